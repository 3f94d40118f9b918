use std::collections::HashSet;

use proptest::prelude::*;
use route_search_core::{
    find_all_routes, find_all_routes_with, route_edges, working_graph, Graph, NodeId,
    SearchConfig, SearchOutcome, WorkingGraphPolicy,
};

/// Small random graph plus a start and end node inside it.
fn graph_and_endpoints() -> impl Strategy<Value = (Graph, NodeId, NodeId)> {
    (1usize..8).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n),
            0..n,
            0..n,
        )
            .prop_map(|(adjacency, start, end)| {
                (Graph::from_adjacency(adjacency).unwrap(), start, end)
            })
    })
}

fn run(graph: &Graph, start: NodeId, end: NodeId, policy: WorkingGraphPolicy) -> SearchOutcome {
    let config = SearchConfig {
        policy,
        max_routes: None,
    };
    find_all_routes_with(graph, start, end, &config).unwrap()
}

fn unordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    (a.min(b), a.max(b))
}

proptest! {
    #[test]
    fn test_sessions_are_deterministic((g, start, end) in graph_and_endpoints()) {
        let a = find_all_routes(&g, start, end).unwrap();
        let b = find_all_routes(&g, start, end).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_routes_are_unique_and_well_formed((g, start, end) in graph_and_endpoints()) {
        for policy in [WorkingGraphPolicy::Replay, WorkingGraphPolicy::Retain] {
            let outcome = run(&g, start, end, policy);
            prop_assert!(outcome.exhausted);

            for (i, a) in outcome.routes.iter().enumerate() {
                prop_assert!(a.len() >= 2);
                prop_assert_eq!(a.first(), Some(&start));
                prop_assert_eq!(a.last(), Some(&end));
                for (from, to) in route_edges(a) {
                    prop_assert!(g.has_edge(from, to), "{}->{} not in graph", from, to);
                }
                for b in &outcome.routes[i + 1..] {
                    prop_assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_connections_used_at_most_once((g, start, end) in graph_and_endpoints()) {
        for policy in [WorkingGraphPolicy::Replay, WorkingGraphPolicy::Retain] {
            let outcome = run(&g, start, end, policy);
            let mut seen = HashSet::new();
            for route in &outcome.routes {
                for (from, to) in route_edges(route) {
                    prop_assert!(seen.insert(unordered(from, to)));
                }
            }
        }
    }

    #[test]
    fn test_attempts_bounded_by_edge_count((g, start, end) in graph_and_endpoints()) {
        let outcome = find_all_routes(&g, start, end).unwrap();
        prop_assert!(outcome.routes.len() <= g.edge_count());
        prop_assert_eq!(outcome.attempts, outcome.routes.len() + 1);
    }

    #[test]
    fn test_working_graph_shrinks_with_each_route((g, start, end) in graph_and_endpoints()) {
        let outcome = find_all_routes(&g, start, end).unwrap();
        let mut previous = g.edge_count();
        for k in 1..=outcome.routes.len() {
            let remaining = working_graph(&g, &outcome.routes[..k]).edge_count();
            prop_assert!(remaining < previous);
            previous = remaining;
        }
    }

    #[test]
    fn test_max_routes_is_a_prefix((g, start, end) in graph_and_endpoints(), cap in 0usize..4) {
        let full = find_all_routes(&g, start, end).unwrap();
        let config = SearchConfig { max_routes: Some(cap), ..SearchConfig::default() };
        let capped = find_all_routes_with(&g, start, end, &config).unwrap();
        let expected = cap.min(full.routes.len());
        prop_assert_eq!(&capped.routes[..], &full.routes[..expected]);
        prop_assert_eq!(capped.exhausted, cap > full.routes.len());
    }
}
