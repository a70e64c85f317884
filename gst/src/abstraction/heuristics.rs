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

//! This module defines the ranking abstraction used to order the fringe.

use std::cmp::Ordering;

use crate::Candidate;

/// A candidate ranking is an heuristic that imposes a total order on the
/// candidates of the fringe. The candidate which compares `Greater` than all
/// others is the most promising one and is popped first.
///
/// An implementation must be a genuine total order: two distinct live
/// candidates should never compare `Equal`, otherwise the order in which they
/// are popped (and thus the solution which is returned) would depend on the
/// internals of the heap.
pub trait CandidateRanking {
    /// Compares two candidates. `Greater` means that `a` must be explored
    /// before `b`.
    fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering;
}
