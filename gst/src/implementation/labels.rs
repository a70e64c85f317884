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

//! This module provides the label related data structures: an `Alphabet`
//! interning label names and `Labels`, the default label assignment.

use fxhash::FxHashMap;

use crate::{Label, LabelAssignment, VertexId};

/// The alphabet knows the name of every label. Labels are numbered in the
/// order they are interned.
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    names: Vec<String>,
    index: FxHashMap<String, Label>,
}
impl Alphabet {
    /// Creates an alphabet comprising the given labels (duplicates are ignored)
    pub fn new<I, S>(names: I) -> Self
    where I: IntoIterator<Item = S>,
          S: Into<String>
    {
        let mut alphabet = Alphabet::default();
        for name in names {
            alphabet.intern(name);
        }
        alphabet
    }
    /// Creates an alphabet made of the `n` first lowercase letters
    /// ("a", "b", ...). Past "z", the labels are named "l26", "l27", ...
    pub fn letters(n: usize) -> Self {
        Alphabet::new((0..n).map(|i| {
            if i < 26 {
                ((b'a' + i as u8) as char).to_string()
            } else {
                format!("l{i}")
            }
        }))
    }
    /// Returns the label having the given name, creating it if needed
    pub fn intern(&mut self, name: impl Into<String>) -> Label {
        let name = name.into();
        if let Some(label) = self.index.get(&name) {
            return *label;
        }
        let label = Label(self.names.len());
        self.index.insert(name.clone(), label);
        self.names.push(name);
        label
    }
    /// Looks a label up by its name
    pub fn get(&self, name: &str) -> Option<Label> {
        self.index.get(name).copied()
    }
    /// Returns the name of the given label
    ///
    /// # Panics
    /// Panics if `label` was not interned in this alphabet.
    pub fn name(&self, label: Label) -> &str {
        &self.names[label.id()]
    }
    /// The number of labels in the alphabet
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// Iterates over all the labels of the alphabet
    pub fn labels(&self) -> impl Iterator<Item = Label> {
        (0..self.names.len()).map(Label)
    }
}

/// The default label assignment: it stores the sorted, duplicate free list of
/// labels carried by each vertex.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    per_vertex: Vec<Vec<Label>>,
}
impl Labels {
    /// Creates an assignment where none of the `n` first vertices carries
    /// any label
    pub fn with_vertices(n: usize) -> Self {
        Labels { per_vertex: vec![vec![]; n] }
    }
    /// Attaches `label` to `vertex`
    pub fn assign(&mut self, vertex: VertexId, label: Label) {
        if self.per_vertex.len() <= vertex.id() {
            self.per_vertex.resize(vertex.id() + 1, vec![]);
        }
        let labels = &mut self.per_vertex[vertex.id()];
        if let Err(pos) = labels.binary_search(&label) {
            labels.insert(pos, label);
        }
    }
    /// Attaches all the given labels to `vertex`
    pub fn assign_all(&mut self, vertex: VertexId, labels: impl IntoIterator<Item = Label>) {
        for label in labels {
            self.assign(vertex, label);
        }
    }
    /// Returns the sorted list of all the labels carried by some vertex
    pub fn used_labels(&self) -> Vec<Label> {
        let mut used = self.per_vertex.iter().flatten().copied().collect::<Vec<_>>();
        used.sort_unstable();
        used.dedup();
        used
    }
}
impl LabelAssignment for Labels {
    fn labels_of(&self, vertex: VertexId) -> &[Label] {
        self.per_vertex.get(vertex.id()).map(|l| l.as_slice()).unwrap_or(&[])
    }
}
