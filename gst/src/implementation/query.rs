// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the `Query`: the set of labels a walk must collect.
//! The query is also in charge of translating label lists into the compact
//! `LabelSet` bitmasks manipulated by the solvers.

use crate::{Alphabet, Error, Label, LabelSet, MAX_QUERY_LABELS};

/// The set of labels that must be covered. The labels of a query are kept
/// sorted, and the i-th of them is encoded by bit i of a `LabelSet`.
///
/// # Example
/// ```
/// # use gst::*;
/// let query = Query::new(vec![Label(7), Label(2)]).unwrap();
/// let set   = query.project(&[Label(1), Label(7)]);
///
/// assert_eq!(vec![Label(7)], query.decode(set));
/// assert_eq!(1, set.len());
/// assert_eq!(LabelSet::full(2), query.goal());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    labels: Vec<Label>,
}
impl Query {
    /// Creates a query from the given labels. Duplicates are ignored. It
    /// fails when the query bears on more than `MAX_QUERY_LABELS` labels.
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Result<Self, Error> {
        let mut labels = labels.into_iter().collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();
        if labels.len() > MAX_QUERY_LABELS {
            return Err(Error::QueryTooLarge(labels.len()));
        }
        Ok(Query { labels })
    }
    /// Creates a query from label names, looked up in the given alphabet
    pub fn from_names<'a>(alphabet: &Alphabet, names: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let labels = names.into_iter()
            .map(|n| alphabet.get(n).ok_or_else(|| Error::UnknownLabel(n.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Query::new(labels)
    }
    /// The labels of the query, sorted
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// The position of `label` in the query, if it belongs to it
    pub fn position(&self, label: Label) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }
    /// The label set comprising every label of the query
    pub fn goal(&self) -> LabelSet {
        LabelSet::full(self.labels.len())
    }
    /// Intersects the given labels with the query. Labels which are not part
    /// of the query are simply dropped.
    pub fn project(&self, labels: &[Label]) -> LabelSet {
        let mut set = LabelSet::empty();
        for pos in labels.iter().filter_map(|l| self.position(*l)) {
            set.insert(pos);
        }
        set
    }
    /// Translates a label set back into the labels it stands for
    pub fn decode(&self, set: LabelSet) -> Vec<Label> {
        set.iter().filter_map(|i| self.labels.get(i).copied()).collect()
    }
}
