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

//! This module defines the `WeightedGraph` trait: the view of the graph a
//! solver needs in order to explore it.

use crate::{Cost, VertexId};

/// This trait defines the "contract" of an undirected, edge weighted graph
/// that can be searched for label covering walks. Implementations are read
/// only for the whole duration of a search.
///
/// Edge weights must be non negative and symmetric, that is
/// `weight(u, v) == weight(v, u)`.
pub trait WeightedGraph {
    /// The vertices of the graph are numbered $0, 1, ..., n-1$.
    /// This method returns the value of the number $n$
    fn nb_vertices(&self) -> usize;
    /// This method calls the function `f` once for each edge incident to
    /// `vertex`, passing it the other endpoint along with the edge weight.
    fn for_each_neighbour(&self, vertex: VertexId, f: &mut dyn NeighbourCallback);
    /// Returns the weight of the edge connecting `u` and `v` if there is one
    fn weight(&self, u: VertexId, v: VertexId) -> Option<Cost>;
}

/// This trait basically defines a callback which is passed on to the graph
/// so as to let it efficiently enumerate the neighbours of some vertex.
pub trait NeighbourCallback {
    /// executes the callback for the edge leading to `vertex` with the given `weight`
    fn apply(&mut self, vertex: VertexId, weight: Cost);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <X: FnMut(VertexId, Cost)> NeighbourCallback for X {
    fn apply(&mut self, vertex: VertexId, weight: Cost) {
        self(vertex, weight)
    }
}
