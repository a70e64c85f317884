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

//! This module provides the default visited table: one hashmap per vertex,
//! keyed by the collected label set.

use std::collections::hash_map::Entry;

use fxhash::FxHashMap;

use crate::{Cost, LabelSet, SearchState, VertexId, VisitedTable};

/// Simple implementation of the visited table using one hashmap for each
/// vertex. Grouping the entries per vertex makes it cheap to enumerate the
/// partial solutions meeting at some vertex.
#[derive(Debug, Default, Clone)]
pub struct SimpleVisited {
    costs_by_vertex: Vec<FxHashMap<LabelSet, Cost>>,
    len: usize,
}

impl VisitedTable for SimpleVisited {
    fn initialize(&mut self, nb_vertices: usize) {
        self.costs_by_vertex.clear();
        self.costs_by_vertex.resize_with(nb_vertices, Default::default);
        self.len = 0;
    }

    fn get(&self, state: SearchState) -> Option<Cost> {
        self.costs_by_vertex.get(state.vertex.id())?
            .get(&state.labels)
            .copied()
    }

    fn improve(&mut self, state: SearchState, cost: Cost) -> bool {
        let v = state.vertex.id();
        if self.costs_by_vertex.len() <= v {
            self.costs_by_vertex.resize_with(v + 1, Default::default);
        }
        match self.costs_by_vertex[v].entry(state.labels) {
            Entry::Occupied(mut e) => {
                if cost < *e.get() {
                    e.insert(cost);
                    true
                } else {
                    false
                }
            },
            Entry::Vacant(e) => {
                e.insert(cost);
                self.len += 1;
                true
            }
        }
    }

    fn for_each_at(&self, vertex: VertexId, f: &mut dyn FnMut(LabelSet, Cost)) {
        if let Some(costs) = self.costs_by_vertex.get(vertex.id()) {
            for (labels, cost) in costs.iter() {
                f(*labels, *cost);
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
