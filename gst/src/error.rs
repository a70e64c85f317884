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

//! This module groups the errors that might be raised while building the
//! inputs of a search. The search itself never fails: when a query cannot be
//! covered, it simply yields an infeasible `Solution`.

use crate::Cost;

/// This enumeration simply groups the kind of errors that might occur when
/// building a graph, a query or a random instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Edge weights must be non negative numbers
    #[error("invalid weight {weight} on edge ({src}, {dst})")]
    InvalidWeight { src: usize, dst: usize, weight: Cost },
    /// The edge refers to a vertex that was never added to the graph
    #[error("unknown vertex {0}")]
    UnknownVertex(usize),
    /// The query does not fit in a label set (see `MAX_QUERY_LABELS`)
    #[error("a query may bear on at most 64 labels (got {0})")]
    QueryTooLarge(usize),
    /// The query names a label that is not part of the alphabet
    #[error("unknown label {0}")]
    UnknownLabel(String),
    /// The search mode could not be parsed
    #[error("unknown search mode '{0}' (expected 'exact' or 'pruned')")]
    UnknownMode(String),
    /// The parameters of the random instance generator or of the pruned
    /// strategy are inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
