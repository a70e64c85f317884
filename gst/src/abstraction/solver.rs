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

//! This module defines the `Solver` trait.

use crate::{Cost, Solution, Statistics, VertexId};

/// This is the solver abstraction. It is implemented by a structure that
/// searches the (vertex, collected labels) state space for the cheapest walk
/// covering all the labels of a query.
pub trait Solver {
    /// This method orders the solver to search for the cheapest covering walk.
    /// It runs until the fringe is exhausted and returns the best solution
    /// found (or an infeasible solution when no walk covers the query).
    ///
    /// Calling it twice restarts the search from scratch.
    fn minimize(&mut self) -> Solution;
    /// This method returns the cost of the best solution that has been found.
    /// It returns `None` when no solution was found.
    fn best_value(&self) -> Option<Cost>;
    /// This method returns the walk of the best solution that has been found.
    /// It returns `None` when no solution was found.
    fn best_solution(&self) -> Option<Vec<VertexId>>;
    /// Returns the counters describing the work performed by the last search
    fn statistics(&self) -> Statistics;
}
