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

//! This binary generates a random instance, samples a query among the labels
//! in use, and searches for a cheap walk covering that query.

use std::{fs, path::PathBuf, time::Instant};

use clap::Parser;
use gst::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Params {
    /// The number of vertices of the random graph
    #[clap(short, long, default_value = "1000")]
    nodes: usize,
    /// The probability that any two vertices are adjacent
    #[clap(short, long, default_value = "0.3")]
    prob: f64,
    /// The search mode: 'exact' or 'pruned'
    #[clap(short, long, default_value = "exact")]
    mode: Mode,
    /// The seed of the random instance generator
    #[clap(short, long, default_value = "42")]
    seed: u64,
    /// The number of labels in the query (4 in exact mode, 5 in pruned mode
    /// unless specified)
    #[clap(short, long)]
    query_size: Option<usize>,
    /// If set, the graph and the walk found are written to this file in DOT format
    #[clap(short, long)]
    dot: Option<PathBuf>,
}

/// Returns the generator configuration matching the given parameters. The
/// pruned mode is exercised on instances with a larger label pool and fewer
/// labels per vertex.
fn generator_config(params: &Params) -> Result<GeneratorConfig, anyhow::Error> {
    let (pool, per_vertex) = match params.mode {
        Mode::Exact  => (6, 3),
        Mode::Pruned => (20, 2),
    };
    let config = GeneratorConfigBuilder::default()
        .nodes(params.nodes)
        .edge_probability(params.prob)
        .label_pool(pool)
        .max_labels_per_vertex(per_vertex)
        .seed(params.seed)
        .build()?;
    Ok(config)
}

fn run(params: Params) -> Result<(), anyhow::Error> {
    let config = generator_config(&params)?;
    let mut instance = generate(&config)?;
    let query_size = params.query_size.unwrap_or(match params.mode {
        Mode::Exact  => 4,
        Mode::Pruned => 5,
    });
    let query = instance.sample_query(query_size)?;

    let (n, m) = instance.graph.size();
    let names = query.labels().iter().map(|l| instance.alphabet.name(*l)).collect::<Vec<_>>();
    println!("Graph size: {n} vertices, {m} edges");
    println!("Query labels: [{}]", names.join(", "));

    let start = Instant::now();
    let (solution, stats) = search_with_statistics(&instance.graph, &instance.labels, &query, params.mode);
    let duration = start.elapsed();

    println!("Cost: {}", solution.cost);
    println!("Path: {}", instance.graph.names_of(&solution.path).join(" -> "));
    println!("Duration: {:.3} seconds", duration.as_secs_f32());
    println!("Explored: {} (seeded {}, pushed {}, merged {}, stale {}, pruned {})",
        stats.explored, stats.seeded, stats.pushed, stats.merged, stats.stale, stats.pruned);

    if solution.is_feasible() {
        match walk_cost(&instance.graph, &solution.path) {
            Some(c) if c == solution.cost => {},
            Some(c) => warn!(reported = solution.cost, walk = c, "the path does not weigh the reported cost"),
            None    => warn!("the path is not a walk of the graph"),
        }
        if covered(&instance.labels, &query, &solution.path) != query.goal() {
            warn!("the path does not visit every query label");
        }
    }

    if let Some(file) = params.dot {
        let viz = VizConfigBuilder::default().build()?;
        fs::write(file, as_graphviz(&instance.graph, &instance.labels, &instance.alphabet, &solution, &viz))?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let params = Params::parse();
    if let Err(e) = run(params) {
        eprintln!("Error: {e:#}");
    }
}
