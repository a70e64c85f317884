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

//! This module provides the graph representation used by the solvers: an
//! adjacency list of weighted, undirected edges along with a name for each
//! vertex.

use fxhash::FxHashMap;

use crate::{Cost, Error, NeighbourCallback, VertexId, WeightedGraph};

/// An undirected graph with non negative edge weights. Each vertex bears a
/// name (e.g. "v42") which is only used to build and display the graph: the
/// solvers work with the dense `VertexId`s.
///
/// # Example
/// ```
/// # use gst::*;
/// let mut graph = Graph::default();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// graph.add_edge(a, b, 2.0).unwrap();
///
/// assert_eq!(Some(2.0), graph.weight(b, a));
/// assert_eq!((2, 1), graph.size());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names     : Vec<String>,
    index     : FxHashMap<String, VertexId>,
    adjacency : Vec<Vec<(VertexId, Cost)>>,
    nb_edges  : usize,
}

impl Graph {
    /// Creates a graph with `n` vertices named "v0" .. "v{n-1}" and no edge
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Graph::default();
        for i in 0..n {
            graph.add_vertex(format!("v{i}"));
        }
        graph
    }
    /// Adds a vertex with the given name and returns its id. Adding a name
    /// twice yields the id of the existing vertex.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let name = name.into();
        if let Some(id) = self.index.get(&name) {
            return *id;
        }
        let id = VertexId(self.names.len());
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.adjacency.push(vec![]);
        id
    }
    /// Looks a vertex up by its name
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }
    /// Returns the name of the given vertex
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to this graph.
    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.id()]
    }
    /// Returns the names of the vertices of a walk
    ///
    /// # Panics
    /// Panics if the walk visits a vertex that does not belong to this graph.
    pub fn names_of(&self, path: &[VertexId]) -> Vec<&str> {
        path.iter().map(|v| self.name(*v)).collect()
    }
    /// Adds an undirected edge between `u` and `v`. Adding an edge that
    /// already exists replaces its weight. Self loops are accepted.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Cost) -> Result<(), Error> {
        let n = self.nb_vertices();
        if u.id() >= n {
            return Err(Error::UnknownVertex(u.id()));
        }
        if v.id() >= n {
            return Err(Error::UnknownVertex(v.id()));
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::InvalidWeight { src: u.id(), dst: v.id(), weight });
        }

        if Self::upsert(&mut self.adjacency[u.id()], v, weight) {
            self.nb_edges += 1;
        }
        if u != v {
            Self::upsert(&mut self.adjacency[v.id()], u, weight);
        }
        Ok(())
    }
    /// Adds an edge between two named vertices, creating them if needed
    pub fn add_named_edge(&mut self, u: &str, v: &str, weight: Cost) -> Result<(), Error> {
        let u = self.add_vertex(u);
        let v = self.add_vertex(v);
        self.add_edge(u, v, weight)
    }
    /// The number of (undirected) edges in the graph
    pub fn nb_edges(&self) -> usize {
        self.nb_edges
    }
    /// Returns the number of vertices and edges of the graph
    pub fn size(&self) -> (usize, usize) {
        (self.nb_vertices(), self.nb_edges)
    }
    /// Iterates over all the vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len()).map(VertexId)
    }
    /// Iterates over each undirected edge exactly once, as `(u, v, w)` with `u <= v`
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Cost)> + '_ {
        self.adjacency.iter().enumerate()
            .flat_map(|(u, adj)| adj.iter()
                .filter(move |(v, _)| u <= v.id())
                .map(move |(v, w)| (VertexId(u), *v, *w)))
    }

    /// Sets the weight of the edge towards `dst` in `adj`. Returns true iff
    /// the edge did not exist beforehand.
    fn upsert(adj: &mut Vec<(VertexId, Cost)>, dst: VertexId, weight: Cost) -> bool {
        if let Some(edge) = adj.iter_mut().find(|(v, _)| *v == dst) {
            edge.1 = weight;
            false
        } else {
            adj.push((dst, weight));
            true
        }
    }
}

impl WeightedGraph for Graph {
    fn nb_vertices(&self) -> usize {
        self.names.len()
    }

    fn for_each_neighbour(&self, vertex: VertexId, f: &mut dyn NeighbourCallback) {
        if let Some(adj) = self.adjacency.get(vertex.id()) {
            for (v, w) in adj.iter() {
                f.apply(*v, *w);
            }
        }
    }

    fn weight(&self, u: VertexId, v: VertexId) -> Option<Cost> {
        self.adjacency.get(u.id())?
            .iter()
            .find(|(x, _)| *x == v)
            .map(|(_, w)| *w)
    }
}

#[cfg(test)]
mod test_graph {
    use crate::*;

    fn neighbours(g: &Graph, v: VertexId) -> Vec<(VertexId, Cost)> {
        let mut out = vec![];
        g.for_each_neighbour(v, &mut |u: VertexId, w: Cost| out.push((u, w)));
        out
    }

    #[test]
    fn by_default_it_is_empty() {
        let g = Graph::default();
        assert_eq!((0, 0), g.size());
        assert_eq!(0, g.vertices().count());
    }
    #[test]
    fn with_vertices_names_them_after_their_index() {
        let g = Graph::with_vertices(3);
        assert_eq!("v0", g.name(VertexId(0)));
        assert_eq!("v2", g.name(VertexId(2)));
        assert_eq!(Some(VertexId(1)), g.vertex("v1"));
        assert_eq!(None, g.vertex("v3"));
    }
    #[test]
    fn adding_a_vertex_twice_yields_the_same_id() {
        let mut g = Graph::default();
        let a = g.add_vertex("A");
        let b = g.add_vertex("B");
        assert_ne!(a, b);
        assert_eq!(a, g.add_vertex("A"));
        assert_eq!(2, g.nb_vertices());
    }
    #[test]
    fn edges_are_symmetric() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(VertexId(0), VertexId(1), 4.0).unwrap();
        assert_eq!(Some(4.0), g.weight(VertexId(0), VertexId(1)));
        assert_eq!(Some(4.0), g.weight(VertexId(1), VertexId(0)));
        assert_eq!(vec![(VertexId(1), 4.0)], neighbours(&g, VertexId(0)));
        assert_eq!(vec![(VertexId(0), 4.0)], neighbours(&g, VertexId(1)));
    }
    #[test]
    fn adding_an_existing_edge_replaces_its_weight() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(VertexId(0), VertexId(1), 4.0).unwrap();
        g.add_edge(VertexId(1), VertexId(0), 1.0).unwrap();
        assert_eq!(1, g.nb_edges());
        assert_eq!(Some(1.0), g.weight(VertexId(0), VertexId(1)));
        assert_eq!(1, neighbours(&g, VertexId(0)).len());
    }
    #[test]
    fn self_loops_are_listed_once() {
        let mut g = Graph::with_vertices(1);
        g.add_edge(VertexId(0), VertexId(0), 3.0).unwrap();
        assert_eq!(1, g.nb_edges());
        assert_eq!(vec![(VertexId(0), 3.0)], neighbours(&g, VertexId(0)));
        assert_eq!(vec![(VertexId(0), VertexId(0), 3.0)], g.edges().collect::<Vec<_>>());
    }
    #[test]
    fn negative_or_nan_weights_are_rejected() {
        let mut g = Graph::with_vertices(2);
        assert!(matches!(g.add_edge(VertexId(0), VertexId(1), -1.0), Err(Error::InvalidWeight{..})));
        assert!(matches!(g.add_edge(VertexId(0), VertexId(1), f64::NAN), Err(Error::InvalidWeight{..})));
        assert_eq!(0, g.nb_edges());
    }
    #[test]
    fn edges_towards_unknown_vertices_are_rejected() {
        let mut g = Graph::with_vertices(2);
        assert!(matches!(g.add_edge(VertexId(0), VertexId(5), 1.0), Err(Error::UnknownVertex(5))));
    }
    #[test]
    fn edges_are_enumerated_once() {
        let mut g = Graph::default();
        g.add_named_edge("A", "B", 2.0).unwrap();
        g.add_named_edge("B", "C", 3.0).unwrap();
        g.add_named_edge("A", "C", 10.0).unwrap();
        let mut edges = g.edges().collect::<Vec<_>>();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        assert_eq!(vec![
            (VertexId(0), VertexId(1), 2.0),
            (VertexId(0), VertexId(2), 10.0),
            (VertexId(1), VertexId(2), 3.0),
        ], edges);
    }
    #[test]
    fn there_is_no_weight_between_unconnected_vertices() {
        let g = Graph::with_vertices(2);
        assert_eq!(None, g.weight(VertexId(0), VertexId(1)));
        assert_eq!(None, g.weight(VertexId(7), VertexId(1)));
        assert!(neighbours(&g, VertexId(9)).is_empty());
    }
    #[test] #[should_panic]
    fn naming_a_foreign_vertex_panics() {
        let g = Graph::with_vertices(2);
        g.name(VertexId(2));
    }
    #[test]
    fn names_of_a_walk() {
        let mut g = Graph::default();
        g.add_named_edge("A", "B", 2.0).unwrap();
        assert_eq!(vec!["B", "A", "B"], g.names_of(&[VertexId(1), VertexId(0), VertexId(1)]));
    }
}
