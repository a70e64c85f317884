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

use crate::{Cost, LabelSet, SearchState, VertexId};

/// This trait abstracts away the implementation details of the visited table.
/// That is, the data structure remembering the cheapest cost at which each
/// search state has been reached so far.
///
/// The entries of a visited table never increase: an entry is only ever
/// overwritten by a strictly lower cost. This is what lets the solver
/// discard stale fringe candidates lazily, upon pop.
pub trait VisitedTable {
    /// Prepare the table to be used with a graph having `nb_vertices` vertices.
    /// Any previous content is forgotten.
    fn initialize(&mut self, nb_vertices: usize);

    /// Returns the best cost recorded for the given state, if any.
    fn get(&self, state: SearchState) -> Option<Cost>;

    /// Records `cost` for `state` iff it is strictly lower than the cost
    /// that was recorded so far (if any). Returns true iff the table changed.
    fn improve(&mut self, state: SearchState, cost: Cost) -> bool;

    /// Calls `f` with the label set and cost of each state recorded at `vertex`.
    fn for_each_at(&self, vertex: VertexId, f: &mut dyn FnMut(LabelSet, Cost));

    /// The number of states having a recorded cost.
    fn len(&self) -> usize;

    /// Returns true iff no state has been recorded
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
