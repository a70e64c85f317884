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

//! This module lets you render a graph along with the walk of a solution in
//! the graphviz DOT format.

use std::collections::BTreeSet;

use derive_builder::Builder;

use crate::{Alphabet, Graph, LabelAssignment, Solution, VertexId};

/// This is how you configure the output visualisation e.g.
/// if you want to see the weight of the edges or the labels of the vertices
#[derive(Debug, Clone, Builder)]
pub struct VizConfig {
    /// This flag must be true (default) if you want to see the weight of
    /// each edge
    #[builder(default="true")]
    show_weights: bool,
    /// This flag must be true (default) if you want to see the labels
    /// carried by each vertex
    #[builder(default="true")]
    show_labels: bool,
    /// This flag must be true (default) if you want to see the edges which
    /// are not traversed by the walk of the solution
    #[builder(default="true")]
    show_unused_edges: bool,
}

/// Renders the graph in DOT format. The vertices and edges of the solution
/// walk are highlighted.
///
/// # Example
/// ```
/// # use gst::*;
/// let mut graph = Graph::default();
/// graph.add_named_edge("A", "B", 2.0).unwrap();
/// let solution = Solution { cost: 2.0, path: vec![VertexId(0), VertexId(1)] };
/// let config   = VizConfigBuilder::default().show_labels(false).build().unwrap();
///
/// let dot = as_graphviz(&graph, &Labels::default(), &Alphabet::default(), &solution, &config);
/// assert!(dot.starts_with("graph {"));
/// assert!(dot.contains("0 -- 1"));
/// ```
pub fn as_graphviz(graph: &Graph, labels: &dyn LabelAssignment, alphabet: &Alphabet, solution: &Solution, config: &VizConfig) -> String {
    let on_walk = solution.path.iter().copied().collect::<BTreeSet<_>>();
    let walk_edges = solution.path.windows(2)
        .map(|step| ordered(step[0], step[1]))
        .collect::<BTreeSet<_>>();

    let mut out = String::new();
    out.push_str("graph {\n");

    for v in graph.vertices() {
        out.push_str(&node(graph, labels, alphabet, v, on_walk.contains(&v), config));
    }
    for (u, v, w) in graph.edges() {
        let used = walk_edges.contains(&ordered(u, v));
        if !used && !config.show_unused_edges {
            continue;
        }
        let mut attributes = vec![];
        if config.show_weights {
            attributes.push(format!("label=\"{w}\""));
        }
        if used {
            attributes.push("color=red,penwidth=3".to_string());
        }
        out.push_str(&format!("\t{} -- {} [{}];\n", u.id(), v.id(), attributes.join(",")));
    }

    out.push_str("}\n");
    out
}

/// Creates a string representation of one single vertex
fn node(graph: &Graph, labels: &dyn LabelAssignment, alphabet: &Alphabet, v: VertexId, highlight: bool, config: &VizConfig) -> String {
    let mut label = graph.name(v).to_string();
    if config.show_labels {
        let names = labels.labels_of(v).iter()
            .filter(|l| l.id() < alphabet.len())
            .map(|l| alphabet.name(*l))
            .collect::<Vec<_>>();
        label.push_str(&format!("\\n{{{}}}", names.join(", ")));
    }
    let style = if highlight { ",style=filled,fillcolor=lightpink" } else { "" };
    format!("\t{} [label=\"{}\"{}];\n", v.id(), label, style)
}

fn ordered(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v { (u, v) } else { (v, u) }
}

#[cfg(test)]
mod test_viz {
    use crate::*;

    fn path_graph() -> (Graph, Labels, Alphabet) {
        let mut graph = Graph::default();
        graph.add_named_edge("A", "B", 2.0).unwrap();
        graph.add_named_edge("B", "C", 3.0).unwrap();
        let alphabet = Alphabet::new(["x"]);
        let mut labels = Labels::with_vertices(3);
        labels.assign(VertexId(0), Label(0));
        (graph, labels, alphabet)
    }

    #[test]
    fn default_config_shows_everything() {
        let (graph, labels, alphabet) = path_graph();
        let solution = Solution { cost: 2.0, path: vec![VertexId(1), VertexId(0)] };
        let config = VizConfigBuilder::default().build().unwrap();
        let dot = as_graphviz(&graph, &labels, &alphabet, &solution, &config);

        assert!(dot.contains("0 [label=\"A\\n{x}\",style=filled,fillcolor=lightpink];"));
        assert!(dot.contains("2 [label=\"C\\n{}\"];"));
        assert!(dot.contains("0 -- 1 [label=\"2\",color=red,penwidth=3];"));
        assert!(dot.contains("1 -- 2 [label=\"3\"];"));
        assert!(dot.ends_with("}\n"));
    }
    #[test]
    fn unused_edges_can_be_hidden() {
        let (graph, labels, alphabet) = path_graph();
        let solution = Solution { cost: 2.0, path: vec![VertexId(1), VertexId(0)] };
        let config = VizConfigBuilder::default()
            .show_unused_edges(false)
            .show_weights(false)
            .build()
            .unwrap();
        let dot = as_graphviz(&graph, &labels, &alphabet, &solution, &config);

        assert!(dot.contains("0 -- 1 [color=red,penwidth=3];"));
        assert!(!dot.contains("1 -- 2"));
    }
    #[test]
    fn an_infeasible_solution_highlights_nothing() {
        let (graph, labels, alphabet) = path_graph();
        let config = VizConfigBuilder::default().show_labels(false).build().unwrap();
        let dot = as_graphviz(&graph, &labels, &alphabet, &Solution::infeasible(), &config);

        assert!(!dot.contains("lightpink"));
        assert!(!dot.contains("red"));
        assert!(dot.contains("1 [label=\"B\"];"));
    }
}
