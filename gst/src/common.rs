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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt;

/// The cost of a walk. Edge weights are non-negative and a cost of
/// `Cost::INFINITY` stands for "no walk covers the query".
pub type Cost = f64;

/// A label set is encoded on 64 bits. Hence, a query may not bear on more
/// than that many labels.
pub const MAX_QUERY_LABELS: usize = 64;

// ----------------------------------------------------------------------------
// --- VERTEX -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a vertex of the graph being searched. Each vertex is
/// identified with an integer ranging from 0 until `graph.nb_vertices()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VertexId(pub usize);
impl VertexId {
    #[inline]
    /// This function returns the id (numeric value) of the vertex.
    ///
    /// # Examples:
    /// ```
    /// # use gst::VertexId;
    /// assert_eq!(0, VertexId(0).id());
    /// assert_eq!(7, VertexId(7).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- LABEL ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An opaque tag carried by some vertices. Labels are interned by an
/// `Alphabet` which knows their human readable names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Label(pub usize);
impl Label {
    #[inline]
    /// This function returns the id (numeric value) of the label.
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- LABEL SET --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A subset of the labels of a query. Bit `i` is set iff the i-th label of
/// the query (in the query order) belongs to the set. Label sets are only
/// meaningful relative to the query that produced them.
///
/// Comparing two label sets compares their bitmask, which makes it a genuine
/// total order (and not the subset partial order).
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LabelSet(u64);
impl LabelSet {
    /// The empty set
    pub const fn empty() -> Self {
        LabelSet(0)
    }
    /// The set comprising the `n` first query labels
    pub fn full(n: usize) -> Self {
        if n >= MAX_QUERY_LABELS {
            LabelSet(u64::MAX)
        } else {
            LabelSet((1_u64 << n) - 1)
        }
    }
    /// The set containing only the i-th query label
    pub fn singleton(i: usize) -> Self {
        debug_assert!(i < MAX_QUERY_LABELS);
        LabelSet(1_u64 << i)
    }
    /// Raw bitmask
    pub fn bits(self) -> u64 {
        self.0
    }
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(self, i: usize) -> bool {
        i < MAX_QUERY_LABELS && self.0 & (1_u64 << i) != 0
    }
    /// Adds the i-th query label to this set
    pub fn insert(&mut self, i: usize) {
        self.0 |= LabelSet::singleton(i).0
    }
    pub fn union(self, other: LabelSet) -> LabelSet {
        LabelSet(self.0 | other.0)
    }
    pub fn inter(self, other: LabelSet) -> LabelSet {
        LabelSet(self.0 & other.0)
    }
    /// The labels of self which are not in other
    pub fn diff(self, other: LabelSet) -> LabelSet {
        LabelSet(self.0 & !other.0)
    }
    /// Returns true iff every member of self also belongs to other
    pub fn is_subset_of(self, other: LabelSet) -> bool {
        self.0 & !other.0 == 0
    }
    /// Iterates over the positions of the members of this set in increasing
    /// order.
    pub fn iter(self) -> LabelSetIter {
        LabelSetIter(self.0)
    }
}
impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
/// Iterator over the positions of the members of a `LabelSet`
pub struct LabelSetIter(u64);
impl Iterator for LabelSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            let pos = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(pos)
        }
    }
}

// ----------------------------------------------------------------------------
// --- SEARCH STATE -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// The key of the search: the vertex where a walk currently stands along
/// with the query labels it has collected so far.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SearchState {
    pub vertex: VertexId,
    pub labels: LabelSet,
}

// ----------------------------------------------------------------------------
// --- CANDIDATE --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A candidate is a pending entry of the search fringe. It tells that `state`
/// can be reached at the given `cost` by following `path`. A candidate
/// becomes stale as soon as a cheaper way to reach its state is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The search state reached by this candidate
    pub state: SearchState,
    /// The total weight of the edges traversed to reach `state`
    pub cost: Cost,
    /// The walk that leads to `state`
    pub path: Vec<VertexId>,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a search: the cost of the best covering walk that was
/// found and the walk itself. When no walk covers the query, the cost is
/// `+inf` and the path is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub cost: Cost,
    pub path: Vec<VertexId>,
}
impl Solution {
    /// The solution telling that the query cannot be covered
    pub fn infeasible() -> Self {
        Solution { cost: Cost::INFINITY, path: vec![] }
    }
    /// Returns true iff a covering walk was found
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Counters describing the work performed by one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Number of initial candidates posted on the fringe
    pub seeded: usize,
    /// Number of candidates pushed onto the fringe after a relaxation
    pub pushed: usize,
    /// Number of candidates pushed onto the fringe by a merge
    pub merged: usize,
    /// Number of stale candidates discarded when popped
    pub stale: usize,
    /// Number of live candidates which were popped off the fringe
    pub explored: usize,
    /// Number of live candidates which were not expanded because of the cost bound
    pub pruned: usize,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_labelset {
    use crate::{LabelSet, VertexId, Solution};

    #[test]
    fn test_vertex_id() {
        assert_eq!(0, VertexId(0).id());
        assert_eq!(3, VertexId(3).id());
    }
    #[test]
    fn empty_set_has_no_member() {
        let set = LabelSet::empty();
        assert!(set.is_empty());
        assert_eq!(0, set.len());
        assert_eq!(0, set.iter().count());
    }
    #[test]
    fn full_set_comprises_the_n_first_labels() {
        assert_eq!(vec![0, 1, 2], LabelSet::full(3).iter().collect::<Vec<_>>());
        assert_eq!(LabelSet::empty(), LabelSet::full(0));
        assert_eq!(64, LabelSet::full(64).len());
    }
    #[test]
    fn union_inter_and_diff_behave_like_sets() {
        let a = LabelSet::singleton(0).union(LabelSet::singleton(2));
        let b = LabelSet::singleton(2).union(LabelSet::singleton(3));

        assert_eq!(vec![0, 2, 3], a.union(b).iter().collect::<Vec<_>>());
        assert_eq!(vec![2],       a.inter(b).iter().collect::<Vec<_>>());
        assert_eq!(vec![0],       a.diff(b).iter().collect::<Vec<_>>());
    }
    #[test]
    fn subset_relation() {
        let a = LabelSet::singleton(1);
        let b = LabelSet::full(3);
        assert!(a.is_subset_of(b));
        assert!(!b.is_subset_of(a));
        assert!(LabelSet::empty().is_subset_of(a));
    }
    #[test]
    fn insert_and_contains() {
        let mut set = LabelSet::empty();
        set.insert(5);
        assert!(set.contains(5));
        assert!(!set.contains(4));
        assert!(!set.contains(64));
    }
    #[test]
    fn ordering_is_total_even_for_incomparable_sets() {
        let a = LabelSet::singleton(0);
        let b = LabelSet::singleton(1);
        assert!(a < b);
        assert!(b > a);
    }
    #[test]
    fn infeasible_solution_has_infinite_cost_and_empty_path() {
        let sol = Solution::infeasible();
        assert!(!sol.is_feasible());
        assert!(sol.path.is_empty());
    }
}
