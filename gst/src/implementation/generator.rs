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

//! This module provides a seeded random instance generator. It builds an
//! Erdos-Renyi like graph where each vertex carries a few labels drawn from a
//! small pool, and lets you sample a query among the labels that are used.

use derive_builder::Builder;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::{Alphabet, Cost, Error, Graph, Labels, Query, VertexId, WeightedGraph};

/// This is how you configure the random instance generator.
///
/// # Example
/// ```
/// # use gst::*;
/// let config = GeneratorConfigBuilder::default()
///     .nodes(50)
///     .edge_probability(0.1)
///     .build()
///     .unwrap();
/// let instance = generate(&config).unwrap();
/// assert_eq!(50, instance.graph.nb_vertices());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct GeneratorConfig {
    /// The number of vertices of the graph
    #[builder(default="1000")]
    pub nodes: usize,
    /// The probability that any two distinct vertices are adjacent
    #[builder(default="0.3")]
    pub edge_probability: f64,
    /// The number of distinct labels a vertex may carry (named "a", "b", ...)
    #[builder(default="6")]
    pub label_pool: usize,
    /// The max number of labels a vertex carries. Each vertex carries at
    /// least one label.
    #[builder(default="3")]
    pub max_labels_per_vertex: usize,
    /// The minimum weight of an edge (inclusive)
    #[builder(default="1")]
    pub min_weight: u32,
    /// The maximum weight of an edge (inclusive)
    #[builder(default="10")]
    pub max_weight: u32,
    /// The seed of the pseudo random number generator
    #[builder(default="42")]
    pub seed: u64,
}
impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            nodes: 1000,
            edge_probability: 0.3,
            label_pool: 6,
            max_labels_per_vertex: 3,
            min_weight: 1,
            max_weight: 10,
            seed: 42,
        }
    }
}
impl GeneratorConfig {
    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(Error::InvalidConfig(format!("edge probability {} is not in [0, 1]", self.edge_probability)));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidConfig(format!("min weight {} exceeds max weight {}", self.min_weight, self.max_weight)));
        }
        if self.label_pool == 0 {
            return Err(Error::InvalidConfig("the label pool is empty".to_string()));
        }
        if self.max_labels_per_vertex == 0 {
            return Err(Error::InvalidConfig("a vertex must be allowed at least one label".to_string()));
        }
        Ok(())
    }
}

/// A randomly generated instance along with the generator it came from
pub struct Instance {
    pub graph: Graph,
    pub labels: Labels,
    pub alphabet: Alphabet,
    rng: StdRng,
}
impl Instance {
    /// Samples a query of (at most) `size` distinct labels among those that
    /// are carried by at least one vertex. The draw continues the random
    /// sequence of the generator, hence it is reproducible too.
    pub fn sample_query(&mut self, size: usize) -> Result<Query, Error> {
        sample_query(&self.alphabet, &self.labels, size, &mut self.rng)
    }
}

/// Generates a random instance according to the given configuration. The
/// same configuration always yields the same instance.
pub fn generate(config: &GeneratorConfig) -> Result<Instance, Error> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let alphabet = Alphabet::letters(config.label_pool);
    let pool = alphabet.labels().collect::<Vec<_>>();
    let max_labels = config.max_labels_per_vertex.min(pool.len());

    let mut labels = Labels::with_vertices(config.nodes);
    for v in 0..config.nodes {
        let k = rng.gen_range(1..=max_labels);
        labels.assign_all(VertexId(v), pool.choose_multiple(&mut rng, k).copied());
    }

    let mut graph = Graph::with_vertices(config.nodes);
    for i in 0..config.nodes {
        for j in i + 1..config.nodes {
            if rng.gen::<f64>() < config.edge_probability {
                let weight = rng.gen_range(config.min_weight..=config.max_weight) as Cost;
                graph.add_edge(VertexId(i), VertexId(j), weight)?;
            }
        }
    }

    debug!(vertices = graph.nb_vertices(), edges = graph.nb_edges(), seed = config.seed, "instance generated");
    Ok(Instance { graph, labels, alphabet, rng })
}

/// Samples a query of `min(size, #used labels)` distinct labels among those
/// that are carried by at least one vertex.
pub fn sample_query<R: Rng>(alphabet: &Alphabet, labels: &Labels, size: usize, rng: &mut R) -> Result<Query, Error> {
    let mut used = labels.used_labels();
    used.sort_by(|a, b| alphabet.name(*a).cmp(alphabet.name(*b)));
    let size = size.min(used.len());
    Query::new(used.choose_multiple(rng, size).copied())
}
