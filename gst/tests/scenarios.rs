use gst::*;

/// Builds a graph with `n` vertices named v0..v{n-1}, the given edges and
/// label assignment. Labels are named after single letters.
fn instance(n: usize, edges: &[(usize, usize, Cost)], labels: &[(usize, &str)]) -> (Graph, Labels, Alphabet) {
    let mut graph = Graph::with_vertices(n);
    for (u, v, w) in edges.iter().copied() {
        graph.add_edge(VertexId(u), VertexId(v), w).unwrap();
    }
    let mut alphabet = Alphabet::default();
    let mut assignment = Labels::with_vertices(n);
    for (v, name) in labels.iter().copied() {
        let label = alphabet.intern(name);
        assignment.assign(VertexId(v), label);
    }
    (graph, assignment, alphabet)
}

fn path(ids: &[usize]) -> Vec<VertexId> {
    ids.iter().copied().map(VertexId).collect()
}

const MODES: [Mode; 2] = [Mode::Exact, Mode::Pruned];

#[test]
fn triangle_walk_goes_from_b_to_a_in_both_modes() {
    let (graph, labels, alphabet) = instance(3,
        &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)],
        &[(0, "x"), (1, "y")]);
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(2.0, solution.cost);
        assert_eq!(path(&[1, 0]), solution.path);
    }
}

#[test]
fn empty_query_is_covered_at_no_cost_by_the_first_vertex() {
    let (graph, labels, _) = instance(4, &[(0, 1, 1.0), (2, 3, 1.0)], &[(2, "x")]);
    let query = Query::default();

    for mode in MODES {
        assert_eq!(Solution { cost: 0.0, path: path(&[0]) }, search(&graph, &labels, &query, mode));
    }
}

#[test]
fn labels_living_in_distinct_components_cannot_be_covered() {
    let (graph, labels, alphabet) = instance(4,
        &[(0, 1, 1.0), (2, 3, 1.0)],
        &[(0, "x"), (3, "y")]);
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(Solution::infeasible(), solution);
        assert!(!solution.is_feasible());
    }
}

#[test]
fn a_label_carried_by_no_vertex_cannot_be_covered() {
    let (graph, labels, mut alphabet) = instance(2, &[(0, 1, 1.0)], &[(0, "x")]);
    alphabet.intern("ghost");
    let query = Query::from_names(&alphabet, ["x", "ghost"]).unwrap();

    for mode in MODES {
        assert_eq!(Solution::infeasible(), search(&graph, &labels, &query, mode));
    }
}

#[test]
fn vertices_missing_from_the_assignment_carry_no_label() {
    let mut graph = Graph::with_vertices(3);
    graph.add_edge(VertexId(0), VertexId(1), 1.0).unwrap();
    graph.add_edge(VertexId(1), VertexId(2), 1.0).unwrap();
    let alphabet = Alphabet::new(["x", "y"]);
    // only v0 and v1 are known to the assignment
    let mut labels = Labels::with_vertices(2);
    labels.assign(VertexId(0), Label(0));
    labels.assign(VertexId(1), Label(1));
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(1.0, solution.cost);
        assert_eq!(path(&[1, 0]), solution.path);
    }
}

#[test]
fn a_single_label_query_is_covered_by_the_lowest_vertex_carrying_it() {
    let (graph, labels, alphabet) = instance(3,
        &[(0, 1, 4.0), (1, 2, 1.0)],
        &[(1, "x"), (2, "x")]);
    let query = Query::from_names(&alphabet, ["x"]).unwrap();

    for mode in MODES {
        assert_eq!(Solution { cost: 0.0, path: path(&[1]) }, search(&graph, &labels, &query, mode));
    }
}

#[test]
fn zero_weight_edges_are_free_to_traverse() {
    let (graph, labels, alphabet) = instance(2, &[(0, 1, 0.0)], &[(0, "x"), (1, "y")]);
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(0.0, solution.cost);
        assert_eq!(path(&[1, 0]), solution.path);
    }
}

#[test]
fn self_loops_never_help() {
    let (graph, labels, alphabet) = instance(3,
        &[(0, 0, 1.0), (0, 1, 2.0), (1, 1, 5.0), (1, 2, 1.0)],
        &[(0, "x"), (2, "y")]);
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(3.0, solution.cost);
        assert_eq!(path(&[2, 1, 0]), solution.path);
    }
}

#[test]
fn a_label_in_the_middle_of_the_walk_comes_for_free() {
    let (graph, labels, alphabet) = instance(4,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
        &[(0, "x"), (3, "y"), (1, "z")]);
    let query = Query::from_names(&alphabet, ["x", "y", "z"]).unwrap();

    for mode in MODES {
        let solution = search(&graph, &labels, &query, mode);
        assert_eq!(3.0, solution.cost);
        assert_eq!(path(&[3, 2, 1, 0]), solution.path);
        assert_eq!(Some(3.0), walk_cost(&graph, &solution.path));
        assert_eq!(query.goal(), covered(&labels, &query, &solution.path));
    }
}

#[test]
fn exact_mode_returns_a_covering_walk_weighing_its_cost() {
    // c is the center of a star whose leaves carry x, y and z
    let (graph, labels, alphabet) = instance(4,
        &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)],
        &[(1, "x"), (2, "y"), (3, "z")]);
    let query = Query::from_names(&alphabet, ["x", "y", "z"]).unwrap();

    let solution = search(&graph, &labels, &query, Mode::Exact);
    assert_eq!(4.0, solution.cost);
    assert_eq!(path(&[3, 0, 2, 0, 1]), solution.path);
    assert_eq!(Some(4.0), walk_cost(&graph, &solution.path));
    assert_eq!(query.goal(), covered(&labels, &query, &solution.path));
}

#[test]
fn pruned_mode_prices_merged_partial_solutions_as_a_tree() {
    // same star as above: the merge step combines the three branches of the
    // star at its center and reports the weight of the tree (3) instead of
    // that of a walk (4). The returned path is the one of the expanded
    // branch only.
    let (graph, labels, alphabet) = instance(4,
        &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)],
        &[(1, "x"), (2, "y"), (3, "z")]);
    let query = Query::from_names(&alphabet, ["x", "y", "z"]).unwrap();

    let (solution, stats) = search_with_statistics(&graph, &labels, &query, Mode::Pruned);
    assert_eq!(3.0, solution.cost);
    assert_eq!(path(&[2, 0]), solution.path);
    assert!(stats.merged > 0);

    assert_eq!(Some(1.0), walk_cost(&graph, &solution.path));
    assert_ne!(query.goal(), covered(&labels, &query, &solution.path));
}

#[test]
fn pruned_mode_only_seeds_vertices_carrying_query_labels() {
    let (graph, labels, alphabet) = instance(4,
        &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)],
        &[(1, "x"), (2, "y"), (3, "z")]);
    let query = Query::from_names(&alphabet, ["x", "y", "z"]).unwrap();

    let (_, exact)  = search_with_statistics(&graph, &labels, &query, Mode::Exact);
    let (_, pruned) = search_with_statistics(&graph, &labels, &query, Mode::Pruned);
    assert_eq!(4, exact.seeded);
    assert_eq!(3, pruned.seeded);
}

#[test]
fn searches_are_deterministic() {
    let config = GeneratorConfigBuilder::default()
        .nodes(60)
        .edge_probability(0.1)
        .build()
        .unwrap();

    for mode in MODES {
        let mut a = generate(&config).unwrap();
        let mut b = generate(&config).unwrap();
        let qa = a.sample_query(4).unwrap();
        let qb = b.sample_query(4).unwrap();
        assert_eq!(qa, qb);

        let sa = search(&a.graph, &a.labels, &qa, mode);
        let sb = search(&b.graph, &b.labels, &qb, mode);
        assert_eq!(sa, sb);
    }
}

#[test]
fn on_random_instances_the_exact_walk_is_valid() {
    for seed in 0..5 {
        let config = GeneratorConfigBuilder::default()
            .nodes(40)
            .edge_probability(0.15)
            .seed(seed)
            .build()
            .unwrap();
        let mut instance = generate(&config).unwrap();
        let query = instance.sample_query(4).unwrap();

        let solution = search(&instance.graph, &instance.labels, &query, Mode::Exact);
        if solution.is_feasible() {
            assert_eq!(Some(solution.cost), walk_cost(&instance.graph, &solution.path));
            assert_eq!(query.goal(), covered(&instance.labels, &query, &solution.path));
        } else {
            assert!(solution.path.is_empty());
        }
    }
}

#[test]
fn a_custom_pruning_ratio_can_be_used() {
    let (graph, labels, alphabet) = instance(3,
        &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)],
        &[(0, "x"), (1, "y")]);
    let query = Query::from_names(&alphabet, ["x", "y"]).unwrap();
    let strategy = PrunedDpBuilder::default().ratio(0.5).build().unwrap();

    let mut fringe = SimpleFringe::new(MinCost);
    let mut solver = DefaultSolver::new(&graph, &labels, &query, &strategy, &mut fringe);
    let solution = solver.minimize();
    assert_eq!(2.0, solution.cost);
    assert_eq!(path(&[1, 0]), solution.path);
}

#[test]
fn the_pruning_ratio_never_cuts_a_state_once_candidates_are_popped_by_cost() {
    for seed in 0..5 {
        let config = GeneratorConfigBuilder::default()
            .nodes(30)
            .edge_probability(0.2)
            .label_pool(8)
            .max_labels_per_vertex(2)
            .seed(seed)
            .build()
            .unwrap();
        let mut instance = generate(&config).unwrap();
        let query = instance.sample_query(4).unwrap();

        let mut solutions = vec![];
        for ratio in [2.0 / 3.0, 0.5, 1.0, 3.0] {
            let strategy = PrunedDpBuilder::default().ratio(ratio).build().unwrap();
            let mut fringe = SimpleFringe::new(MinCost);
            let mut solver = DefaultSolver::new(&instance.graph, &instance.labels, &query, &strategy, &mut fringe);
            solutions.push(solver.minimize());
            assert_eq!(0, solver.statistics().pruned);
        }
        assert!(solutions.windows(2).all(|w| w[0] == w[1]));
    }
}
