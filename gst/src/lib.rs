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

//! # GST
//! GST is a small library to search edge-weighted undirected graphs for a
//! cheap walk that visits at least one vertex carrying each of the labels of
//! a query. This is a flavour of the Group Steiner Tree problem where each
//! label stands for a group of vertices.
//!
//! The search is a best-first (Dijkstra like) exploration of the space of
//! pairs (vertex, collected labels). It comes in two modes:
//!
//! * `Mode::Exact` which explores the state space exhaustively and returns
//!   the cheapest covering walk.
//! * `Mode::Pruned` which seeds the search with one state per label, prunes
//!   the states which are too expensive compared to the best solution known
//!   so far and combines partial solutions meeting at a vertex. It trades
//!   the optimality guarantee for speed.
//!
//! ## Quick Example
//! The following example builds a triangle graph A - B - C where A carries
//! the label "x" and B carries the label "y". The cheapest walk covering
//! both labels goes from B to A and costs 2.
//! ```
//! # use gst::*;
//! #
//! let mut graph = Graph::default();
//! graph.add_named_edge("A", "B", 2.0).unwrap();
//! graph.add_named_edge("B", "C", 3.0).unwrap();
//! graph.add_named_edge("A", "C", 10.0).unwrap();
//!
//! let mut alphabet = Alphabet::default();
//! let x = alphabet.intern("x");
//! let y = alphabet.intern("y");
//!
//! let mut labels = Labels::with_vertices(graph.nb_vertices());
//! labels.assign(graph.vertex("A").unwrap(), x);
//! labels.assign(graph.vertex("B").unwrap(), y);
//!
//! let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();
//!
//! // Assemble a solver by hand...
//! let mut fringe = SimpleFringe::new(MinCost);
//! let mut solver = DefaultSolver::new(&graph, &labels, &query, &Exhaustive, &mut fringe);
//! let solution   = solver.minimize();
//!
//! assert_eq!(2.0, solution.cost);
//! assert_eq!(vec!["B", "A"], graph.names_of(&solution.path));
//!
//! // ... or simply use the shortcut
//! let pruned = search(&graph, &labels, &query, Mode::Pruned);
//! assert_eq!(solution, pruned);
//! ```
//!
//! ## Random instances
//! The `generate` function builds seeded random instances which are handy to
//! benchmark the two modes against each other (this is what the `gst`
//! binary does).

mod common;
mod error;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
