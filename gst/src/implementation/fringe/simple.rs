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

//! This module provides the implementation of a simple solver fringe (priority queue)

use binary_heap_plus::BinaryHeap;

use crate::*;


/// The simplest fringe implementation you can think of: is basically consists
/// of a binary heap that pushes and pops candidates.
///
/// Stale candidates (those whose state has been reached more cheaply since
/// they were pushed) are left in the heap. It is up to the solver to discard
/// them when they are popped.
///
/// # Note
/// This is the default type of fringe for the solver. Hence, you don't need
/// to take any action in order to use the `SimpleFringe`.
///
pub struct SimpleFringe<O: CandidateRanking> {
    heap: BinaryHeap<Candidate, CompareCandidate<O>>
}
impl <O> SimpleFringe<O> where O: CandidateRanking {
    /// This creates a new simple fringe which uses a custom fringe order.
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareCandidate::new(o)) }
    }
}
impl Default for SimpleFringe<MinCost> {
    fn default() -> Self {
        Self::new(MinCost)
    }
}
impl <O> Fringe for SimpleFringe<O> where O: CandidateRanking {
    fn push(&mut self, candidate: Candidate) {
        self.heap.push(candidate)
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}


#[cfg(test)]
mod test_simple_fringe {
    use crate::*;

    fn node(cost: Cost, v: usize) -> Candidate {
        Candidate {
            state: SearchState { vertex: VertexId(v), labels: LabelSet::empty() },
            cost,
            path : vec![VertexId(v)]
        }
    }

    // by default, it is empty
    #[test]
    fn by_default_it_is_empty() {
        let fringe = SimpleFringe::new(MinCost);
        assert!(fringe.is_empty())
    }

    // when the size is zero, then it is empty
    #[test]
    fn when_the_size_is_zero_then_it_is_empty() {
        let fringe = SimpleFringe::default();
        assert_eq!(fringe.len(), 0);
        assert!(fringe.is_empty());
    }

    // when the size is greater than zero, it it not empty
    #[test]
    fn when_the_size_is_greater_than_zero_it_is_not_empty() {
        let mut fringe = SimpleFringe::new(MinCost);
        fringe.push(node(10.0, 0));
        assert_eq!(fringe.len(), 1);
        assert!(!fringe.is_empty());
    }

    // when I pop a node off the fringe then the length decreases
    #[test]
    fn when_i_pop_a_node_off_the_fringe_then_the_length_decreases() {
        let mut fringe = SimpleFringe::new(MinCost);
        fringe.push(node(10.0, 0));
        fringe.push(node(20.0, 1));

        assert_eq!(fringe.len(), 2);
        fringe.pop();
        assert_eq!(fringe.len(), 1);
        fringe.pop();
        assert_eq!(fringe.len(), 0);
    }

    // when I try to pop a node off an empty fringe, I get none
    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_fringe_i_get_none() {
        let mut fringe = SimpleFringe::new(MinCost);
        assert!(fringe.pop().is_none());
    }

    // when I pop a node, it is always the cheapest one
    #[test]
    fn when_i_pop_a_node_it_is_always_the_cheapest_one() {
        let mut fringe = SimpleFringe::new(MinCost);
        fringe.push(node(5.0, 0));
        fringe.push(node(1.0, 1));
        fringe.push(node(4.0, 2));
        fringe.push(node(2.0, 3));
        fringe.push(node(3.0, 4));

        assert_eq!(fringe.pop().unwrap().cost, 1.0);
        assert_eq!(fringe.pop().unwrap().cost, 2.0);
        assert_eq!(fringe.pop().unwrap().cost, 3.0);
        assert_eq!(fringe.pop().unwrap().cost, 4.0);
        assert_eq!(fringe.pop().unwrap().cost, 5.0);
    }

    // the same state may be pushed several times (stale entries are kept)
    #[test]
    fn the_same_state_may_be_pushed_several_times() {
        let mut fringe = SimpleFringe::new(MinCost);
        fringe.push(node(5.0, 0));
        fringe.push(node(2.0, 0));

        assert_eq!(fringe.len(), 2);
        assert_eq!(fringe.pop().unwrap().cost, 2.0);
        assert_eq!(fringe.pop().unwrap().cost, 5.0);
    }

    // when I clear a non empty fringe it becomes empty
    #[test]
    fn when_i_clear_a_non_empty_fringe_it_becomes_empty() {
        let mut fringe = SimpleFringe::new(MinCost);
        fringe.push(node(5.0, 0));

        assert!(!fringe.is_empty());
        fringe.clear();
        assert!(fringe.is_empty());
    }
}
