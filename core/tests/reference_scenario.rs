use route_search_core::{find_all_routes, Graph, NodeLabels};

#[test]
fn test_b_to_e_by_label() {
    let graph = Graph::reference();
    let labels = NodeLabels::reference();
    let start = labels.resolve("B").unwrap();
    let end = labels.resolve("e").unwrap();

    let outcome = find_all_routes(&graph, start, end).unwrap();

    assert_eq!(outcome.routes[0], vec![1, 2, 4]);
    let named: Vec<Vec<String>> = outcome
        .routes
        .iter()
        .map(|r| labels.route_labels(r))
        .collect();
    assert_eq!(
        named,
        vec![
            vec!["B", "C", "E"],
            vec!["B", "D", "E"],
            vec!["B", "F", "E"],
        ]
    );
    assert!(outcome.exhausted);
}

#[test]
fn test_a_has_a_single_exit() {
    // Depth-first through C's first neighbor B, then D. A's only edge is
    // consumed by that route, so the next attempt fails immediately.
    let graph = Graph::reference();
    let outcome = find_all_routes(&graph, 0, 4).unwrap();
    assert_eq!(outcome.routes, vec![vec![0, 2, 1, 3, 4]]);
    assert!(outcome.exhausted);
    assert_eq!(outcome.attempts, 2);
}

#[test]
fn test_every_pair_terminates() {
    let graph = Graph::reference();
    for start in 0..graph.node_count() {
        for end in 0..graph.node_count() {
            let outcome = find_all_routes(&graph, start, end).unwrap();
            assert!(outcome.exhausted);
            assert!(outcome.routes.len() <= graph.edge_count());
        }
    }
}
