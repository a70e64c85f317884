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

//! This module provides the implementation of the candidate ranking used to
//! order the fringe of the solvers.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{Candidate, CandidateRanking};

/// The MinCost strategy always selects the cheapest candidate of the fringe.
/// Ties are broken deterministically: first on the vertex id (the lowest id
/// wins) and then on the bitmask of the collected labels (the lowest mask
/// wins). This makes the ranking a total order on the live candidates, so
/// that repeated searches pop the candidates in the very same order.
///
/// # Example
/// ```
/// # use gst::*;
/// let node = |c: f64, v: usize, l: LabelSet| Candidate {
///     state: SearchState { vertex: VertexId(v), labels: l }, cost: c, path: vec![]
/// };
/// let mut fringe = SimpleFringe::new(MinCost);
/// fringe.push(node(3.0, 0, LabelSet::empty()));
/// fringe.push(node(1.0, 2, LabelSet::singleton(0)));
/// fringe.push(node(1.0, 2, LabelSet::empty()));
/// fringe.push(node(1.0, 1, LabelSet::full(2)));
///
/// assert_eq!(VertexId(1), fringe.pop().unwrap().state.vertex); // cheapest, lowest vertex
/// assert_eq!(LabelSet::empty(), fringe.pop().unwrap().state.labels); // then lowest mask
/// assert_eq!(LabelSet::singleton(0), fringe.pop().unwrap().state.labels);
/// assert_eq!(3.0, fringe.pop().unwrap().cost);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MinCost;
impl CandidateRanking for MinCost {
    fn compare(&self, l: &Candidate, r: &Candidate) -> Ordering {
        OrderedFloat(r.cost).cmp(&OrderedFloat(l.cost))
            .then_with(|| r.state.vertex.cmp(&l.state.vertex))
            .then_with(|| r.state.labels.cmp(&l.state.labels))
    }
}
