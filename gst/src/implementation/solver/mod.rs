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

//! This module provides the solver implementation along with a couple of
//! shortcuts to run a search without having to assemble a solver by hand.
mod sequential;

pub use sequential::*;

use crate::{LabelAssignment, Mode, PrunedDp, Exhaustive, Query, SimpleFringe, SimpleVisited, Solution, Solver, Statistics, WeightedGraph, MinCost};

/// The solver you will want to use most of the time
pub type DefaultSolver<'a> = SequentialSolver<'a, SimpleVisited>;

/// Searches for the cheapest walk covering all the labels of `query` using
/// the given search mode. The pruned mode uses the default `PrunedDp`
/// configuration.
///
/// # Example
/// ```
/// # use gst::*;
/// let mut graph = Graph::default();
/// graph.add_named_edge("A", "B", 2.0).unwrap();
/// graph.add_named_edge("B", "C", 3.0).unwrap();
/// graph.add_named_edge("A", "C", 10.0).unwrap();
///
/// let alphabet   = Alphabet::new(["x", "y"]);
/// let mut labels = Labels::with_vertices(3);
/// labels.assign(graph.vertex("A").unwrap(), alphabet.get("x").unwrap());
/// labels.assign(graph.vertex("B").unwrap(), alphabet.get("y").unwrap());
///
/// let query    = Query::from_names(&alphabet, ["x", "y"]).unwrap();
/// let solution = search(&graph, &labels, &query, Mode::Exact);
/// assert_eq!(2.0, solution.cost);
/// assert_eq!(vec!["B", "A"], graph.names_of(&solution.path));
/// ```
pub fn search(graph: &dyn WeightedGraph, labels: &dyn LabelAssignment, query: &Query, mode: Mode) -> Solution {
    search_with_statistics(graph, labels, query, mode).0
}

/// Same as `search` but also returns the counters describing the work
/// performed by the solver.
pub fn search_with_statistics(graph: &dyn WeightedGraph, labels: &dyn LabelAssignment, query: &Query, mode: Mode) -> (Solution, Statistics) {
    let pruned = PrunedDp::default();
    let strategy: &dyn crate::Strategy = match mode {
        Mode::Exact  => &Exhaustive,
        Mode::Pruned => &pruned,
    };
    let mut fringe = SimpleFringe::new(MinCost);
    let mut solver = DefaultSolver::new(graph, labels, query, strategy, &mut fringe);
    let solution = solver.minimize();
    (solution, solver.statistics())
}
