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

//! This module provides the heuristic strategy of the pruned mode.

use derive_builder::Builder;

use crate::{Cost, Error, LabelSet, Strategy};

/// _This is the strategy of the pruned mode._ It differs from `Exhaustive`
/// in three ways:
///
/// 1. Each query label carried by a vertex seeds its own search state,
///    and vertices carrying no query label do not seed the search at all.
/// 2. A popped state whose cost exceeds `ratio * best` (where `best` is the
///    cost of the best covering walk found so far) is not expanded.
/// 3. After a state has been expanded, it is combined with every other
///    partial solution recorded at the same vertex whose labels are a non
///    empty subset of the labels still missing. The combination costs the
///    sum of both costs and keeps the path of the expanded state.
///
/// None of these heuristics comes with an optimality guarantee. Note that
/// the merge step prices a tree rather than a walk: the cost it reports may
/// thus be lower than that of the cheapest covering walk, and the returned
/// path need not visit the vertices which contributed the merged labels.
///
/// The builder rejects any ratio that is not a finite positive number.
///
/// # Example
/// ```
/// # use gst::*;
/// let default = PrunedDp::default();
/// let custom  = PrunedDpBuilder::default().ratio(0.5).build().unwrap();
///
/// assert_eq!(6.0, default.expansion_bound(9.0));
/// assert_eq!(4.5, custom.expansion_bound(9.0));
/// assert!(PrunedDpBuilder::default().ratio(-1.0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PrunedDp {
    /// The fraction of the best known cost above which states are pruned
    #[builder(default = "2.0 / 3.0")]
    ratio: Cost,
}
impl PrunedDpBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.ratio {
            Some(ratio) if !(ratio.is_finite() && ratio > 0.0) =>
                Err(Error::InvalidConfig(format!("pruning ratio {ratio} is not a finite positive number")).to_string()),
            _ => Ok(()),
        }
    }
}
impl Default for PrunedDp {
    fn default() -> Self {
        PrunedDp { ratio: 2.0 / 3.0 }
    }
}
impl PrunedDp {
    /// Returns the pruning ratio
    pub fn ratio(&self) -> Cost {
        self.ratio
    }
}
impl Strategy for PrunedDp {
    fn for_each_seed(&self, start: LabelSet, goal: LabelSet, f: &mut dyn FnMut(LabelSet)) {
        // an empty query is covered by any vertex
        if goal.is_empty() {
            f(LabelSet::empty());
            return;
        }
        for label in start.iter() {
            f(LabelSet::singleton(label));
        }
    }

    fn expansion_bound(&self, best: Cost) -> Cost {
        best * self.ratio
    }

    fn merges_partial_solutions(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn one_seed_per_query_label_of_the_vertex() {
        let mut seeds = vec![];
        let start = LabelSet::singleton(0).union(LabelSet::singleton(2));
        PrunedDp::default().for_each_seed(start, LabelSet::full(3), &mut |s| seeds.push(s));
        assert_eq!(vec![LabelSet::singleton(0), LabelSet::singleton(2)], seeds);
    }
    #[test]
    fn vertices_without_query_labels_do_not_seed_the_search() {
        let mut seeds = vec![];
        PrunedDp::default().for_each_seed(LabelSet::empty(), LabelSet::full(3), &mut |s| seeds.push(s));
        assert!(seeds.is_empty());
    }
    #[test]
    fn every_vertex_seeds_an_empty_query() {
        let mut seeds = vec![];
        PrunedDp::default().for_each_seed(LabelSet::empty(), LabelSet::empty(), &mut |s| seeds.push(s));
        assert_eq!(vec![LabelSet::empty()], seeds);
    }
    #[test]
    fn the_default_bound_is_two_thirds_of_the_best_cost() {
        let pruned = PrunedDp::default();
        assert_eq!(6.0, pruned.expansion_bound(9.0));
        assert_eq!(Cost::INFINITY, pruned.expansion_bound(Cost::INFINITY));
        assert!(pruned.merges_partial_solutions());
    }
    #[test]
    fn the_builder_defaults_to_two_thirds() {
        let pruned = PrunedDpBuilder::default().build().unwrap();
        assert_eq!(2.0 / 3.0, pruned.ratio());
    }
    #[test]
    fn the_builder_rejects_ratios_that_are_not_finite_and_positive() {
        for ratio in [-1.0, 0.0, Cost::NAN, Cost::INFINITY, Cost::NEG_INFINITY] {
            let built = PrunedDpBuilder::default().ratio(ratio).build();
            assert!(built.is_err(), "ratio {ratio} was accepted");
        }
    }
    #[test]
    fn the_builder_accepts_ratios_above_one() {
        let pruned = PrunedDpBuilder::default().ratio(1.5).build().unwrap();
        assert_eq!(15.0, pruned.expansion_bound(10.0));
    }
}
