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

//! This module provides the implementation of the sequential label covering
//! solver. That is a best-first search over the (vertex, collected labels)
//! state space, in the spirit of Dijkstra's algorithm: the cost of a state is
//! the weight of the walk reaching it, and relaxing an edge adds the query
//! labels carried by its endpoint to the collected ones.
//!
//! The way the search is seeded, bounded and whether partial solutions get
//! merged is decided by the `Strategy` the solver is configured with.
use tracing::{debug, trace};

use crate::{Candidate, Cost, Fringe, LabelAssignment, LabelSet, Query, SearchState, SimpleVisited, Solution, Solver, Statistics, Strategy, VertexId, VisitedTable, WeightedGraph};

pub struct SequentialSolver<'a, V = SimpleVisited>
where V: VisitedTable + Default
{
    /// A reference to the graph being searched
    graph: &'a dyn WeightedGraph,
    /// The labels carried by each vertex of the graph
    labels: &'a dyn LabelAssignment,
    /// The labels that must be covered
    query: &'a Query,
    /// The strategy deciding how the search is seeded, bounded and whether
    /// partial solutions are merged
    strategy: &'a dyn Strategy,

    /// This is the fringe: the set of candidates that must still be explored
    /// before the search can be considered complete.
    ///
    /// # Note:
    /// This fringe orders the candidates by increasing cost. So, the first
    /// time a live candidate for some state is popped, its cost is the lowest
    /// cost at which that state can be reached by extending single paths.
    fringe: &'a mut dyn Fringe,
    /// The best cost at which each state has been reached so far. A fringe
    /// candidate whose cost differs from the one recorded here is stale.
    visited: V,
    /// The query labels carried by each vertex
    relevant: Vec<LabelSet>,

    /// This is the cost of the best covering walk found so far
    best_value: Cost,
    /// If set, this keeps the best covering walk found so far
    best_sol: Option<Vec<VertexId>>,
    /// The counters describing the work done by the last search
    stats: Statistics,
}

impl <'a, V> SequentialSolver<'a, V>
where V: VisitedTable + Default
{
    pub fn new(
        graph: &'a dyn WeightedGraph,
        labels: &'a dyn LabelAssignment,
        query: &'a Query,
        strategy: &'a dyn Strategy,
        fringe: &'a mut dyn Fringe,
    ) -> Self {
        SequentialSolver {
            graph,
            labels,
            query,
            strategy,
            fringe,
            //
            visited: V::default(),
            relevant: vec![],
            best_value: Cost::INFINITY,
            best_sol: None,
            stats: Statistics::default(),
        }
    }

    /// Gives a read access to the visited table of the last search
    pub fn visited(&self) -> &V {
        &self.visited
    }

    /// This method initializes the search. Put more simply, it forgets about
    /// any previous search and posts the seed states of each vertex onto the
    /// fringe at cost zero.
    fn initialize(&mut self) {
        let n = self.graph.nb_vertices();
        self.fringe.clear();
        self.visited.initialize(n);
        self.best_value = Cost::INFINITY;
        self.best_sol = None;
        self.stats = Statistics::default();

        let query = self.query;
        let labels = self.labels;
        self.relevant = (0..n).map(|v| query.project(labels.labels_of(VertexId(v)))).collect();

        let goal = query.goal();
        let strategy = self.strategy;
        let fringe = &mut *self.fringe;
        let visited = &mut self.visited;
        let stats = &mut self.stats;
        for (v, start) in self.relevant.iter().enumerate() {
            let vertex = VertexId(v);
            strategy.for_each_seed(*start, goal, &mut |labels| {
                let state = SearchState { vertex, labels };
                if visited.improve(state, 0.0) {
                    fringe.push(Candidate { state, cost: 0.0, path: vec![vertex] });
                    stats.seeded += 1;
                }
            });
        }
    }

    /// This method processes the given candidate: stale and hopeless
    /// candidates are dropped, covering ones update the best solution, and
    /// the other ones are expanded (then merged when the strategy says so).
    fn process_one_node(&mut self, node: Candidate) {
        let Candidate { state, cost, path } = node;

        if self.visited.get(state) != Some(cost) {
            self.stats.stale += 1;
            return;
        }
        if cost >= self.best_value {
            return;
        }
        self.stats.explored += 1;

        if state.labels == self.query.goal() {
            self.best_value = cost;
            self.best_sol = Some(path);
            trace!(cost, vertex = state.vertex.id(), "improved best solution");
            return;
        }
        if cost > self.strategy.expansion_bound(self.best_value) {
            self.stats.pruned += 1;
            return;
        }

        self.expand(state, cost, &path);
        if self.strategy.merges_partial_solutions() {
            self.merge(state, cost, &path);
        }
    }

    /// Relaxes every edge incident to the vertex of `state`
    fn expand(&mut self, state: SearchState, cost: Cost, path: &[VertexId]) {
        let best = self.best_value;
        let relevant = &self.relevant;
        let fringe = &mut *self.fringe;
        let visited = &mut self.visited;
        let stats = &mut self.stats;

        self.graph.for_each_neighbour(state.vertex, &mut |vertex: VertexId, weight: Cost| {
            let cost = cost + weight;
            // such a state could never improve the best solution
            if cost >= best {
                return;
            }
            let collected = relevant.get(vertex.id()).copied().unwrap_or_default();
            let next = SearchState { vertex, labels: state.labels.union(collected) };
            if visited.improve(next, cost) {
                let mut path = path.to_vec();
                path.push(vertex);
                fringe.push(Candidate { state: next, cost, path });
                stats.pushed += 1;
            }
        });
    }

    /// Combines `state` with each partial solution recorded at the same
    /// vertex whose labels are a non empty subset of the missing ones. The
    /// combined candidate keeps the path of `state`.
    fn merge(&mut self, state: SearchState, cost: Cost, path: &[VertexId]) {
        let missing = self.query.goal().diff(state.labels);
        let bound = self.strategy.expansion_bound(self.best_value);

        let mut partials = vec![];
        self.visited.for_each_at(state.vertex, &mut |labels, c| partials.push((labels, c)));
        partials.sort_unstable_by_key(|(labels, _)| *labels);

        for (labels, other) in partials {
            if labels.is_empty() || !labels.is_subset_of(missing) {
                continue;
            }
            let combined = SearchState { vertex: state.vertex, labels: state.labels.union(labels) };
            let cost = cost + other;
            if cost <= bound && self.visited.improve(combined, cost) {
                self.fringe.push(Candidate { state: combined, cost, path: path.to_vec() });
                self.stats.merged += 1;
            }
        }
    }
}

impl <'a, V> Solver for SequentialSolver<'a, V>
where V: VisitedTable + Default
{
    /// Runs the best-first search until the fringe is exhausted.
    fn minimize(&mut self) -> Solution {
        self.initialize();
        debug!(
            vertices = self.graph.nb_vertices(),
            query    = self.query.len(),
            seeded   = self.stats.seeded,
            "search started");

        while let Some(node) = self.fringe.pop() {
            self.process_one_node(node);
        }

        debug!(
            cost     = self.best_value,
            explored = self.stats.explored,
            pushed   = self.stats.pushed,
            merged   = self.stats.merged,
            stale    = self.stats.stale,
            pruned   = self.stats.pruned,
            states   = self.visited.len(),
            "search completed");

        match self.best_sol.as_ref() {
            Some(path) => Solution { cost: self.best_value, path: path.clone() },
            None       => Solution::infeasible(),
        }
    }

    /// Returns the best solution that has been identified for this query.
    fn best_solution(&self) -> Option<Vec<VertexId>> {
        self.best_sol.clone()
    }
    /// Returns the cost of the best solution that has been identified for
    /// this query.
    fn best_value(&self) -> Option<Cost> {
        self.best_sol.as_ref().map(|_| self.best_value)
    }
    fn statistics(&self) -> Statistics {
        self.stats
    }
}
