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

//! This module defines the `Strategy` trait which is the seam between the
//! exact and the pruned search modes.

use crate::{Cost, LabelSet};

/// A strategy decides how a search is seeded, when a popped state is worth
/// expanding and whether partial solutions meeting at a vertex get combined.
///
/// The default implementations of the methods describe an exhaustive search:
/// nothing is ever pruned nor merged.
pub trait Strategy {
    /// This method calls the function `f` for each label set that must be
    /// used to seed the search from a vertex. `start` is the set of query
    /// labels carried by that vertex and `goal` the set of all query labels.
    /// Each seed is posted on the fringe at cost zero.
    fn for_each_seed(&self, start: LabelSet, goal: LabelSet, f: &mut dyn FnMut(LabelSet));

    /// Returns the cost above which a popped (not yet covering) state is not
    /// expanded anymore, given the cost of the best solution known so far.
    /// The same bound caps the cost of the states produced by a merge.
    fn expansion_bound(&self, _best: Cost) -> Cost {
        Cost::INFINITY
    }

    /// Returns true iff the solver should try to combine the expanded state
    /// with the label-disjoint partial solutions recorded at the same vertex.
    fn merges_partial_solutions(&self) -> bool {
        false
    }
}
