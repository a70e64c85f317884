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

//! This module provide some convenient utilities to work with candidate rankings.

use std::cmp::Ordering;

use compare::Compare;

use crate::{CandidateRanking, Candidate};

/// This is a thin wrapper to convert a CandidateRanking into a `Compare`
/// object as is required to configure the order of a binary heap.
///
/// This struct has no behavior of its own: it simply delegates to the
/// underlying implementation.
///
/// # Example
/// ```
/// # use gst::*;
/// # use binary_heap_plus::BinaryHeap;
/// let comparator = CompareCandidate::new(MinCost);
/// let heap: BinaryHeap<Candidate, _> = BinaryHeap::from_vec_cmp(vec![], comparator);
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareCandidate<X: CandidateRanking>(X);
impl <X: CandidateRanking> CompareCandidate<X> {
    /// Creates a new instance
    pub fn new(x: X) -> Self {
        Self(x)
    }
}
impl <X: CandidateRanking> Compare<Candidate> for CompareCandidate<X> {
    fn compare(&self, l: &Candidate, r: &Candidate) -> Ordering {
        self.0.compare(l, r)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;
    use compare::Compare;
    use crate::*;

    /// A dummy ranking preferring the highest vertex
    struct VertexRanking;
    impl CandidateRanking for VertexRanking {
        fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
            a.state.vertex.cmp(&b.state.vertex)
        }
    }

    fn candidate(v: usize) -> Candidate {
        Candidate { state: SearchState { vertex: VertexId(v), labels: LabelSet::empty() }, cost: 0.0, path: vec![] }
    }

    #[test]
    fn when_a_is_less_than_b_comparecandidate_returns_less() {
        let cmp = CompareCandidate::new(VertexRanking);
        assert_eq!(Ordering::Less, cmp.compare(&candidate(0), &candidate(1)));
    }
    #[test]
    fn when_a_is_greater_than_b_comparecandidate_returns_greater() {
        let cmp = CompareCandidate::new(VertexRanking);
        assert_eq!(Ordering::Greater, cmp.compare(&candidate(1), &candidate(0)));
    }
    #[test]
    fn when_a_is_equal_to_b_comparecandidate_returns_equal() {
        let cmp = CompareCandidate::new(VertexRanking);
        assert_eq!(Ordering::Equal, cmp.compare(&candidate(1), &candidate(1)));
    }
}
