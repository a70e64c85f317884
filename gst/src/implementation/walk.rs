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

//! A few helpers to check the walks returned by a solver.

use crate::{Cost, LabelAssignment, LabelSet, Query, VertexId, WeightedGraph};

/// Returns the total weight of the edges traversed by `path`. It returns
/// `None` when two consecutive vertices of the path are not adjacent.
///
/// # Example
/// ```
/// # use gst::*;
/// let mut graph = Graph::with_vertices(3);
/// graph.add_edge(VertexId(0), VertexId(1), 2.0).unwrap();
///
/// assert_eq!(Some(4.0), walk_cost(&graph, &[VertexId(0), VertexId(1), VertexId(0)]));
/// assert_eq!(None,      walk_cost(&graph, &[VertexId(0), VertexId(2)]));
/// ```
pub fn walk_cost(graph: &dyn WeightedGraph, path: &[VertexId]) -> Option<Cost> {
    path.windows(2).try_fold(0.0, |total, step| Some(total + graph.weight(step[0], step[1])?))
}

/// Returns the query labels carried by the vertices of `path`
pub fn covered(labels: &dyn LabelAssignment, query: &Query, path: &[VertexId]) -> LabelSet {
    path.iter().fold(LabelSet::empty(), |acc, v| acc.union(query.project(labels.labels_of(*v))))
}
