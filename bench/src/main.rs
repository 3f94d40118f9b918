use route_search_core::{
    find_all_routes_with, Graph, GraphError, NodeId, SearchConfig, WorkingGraphPolicy,
};
use std::time::Instant;

type Generator = fn(usize) -> Result<Graph, GraphError>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: route-search-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       Single directed chain (one route, deepest walk)");
        println!("  tree        Branching tree with back edges to the parent");
        println!("  ring        Ring lattice, each node linked to its next K nodes");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default node_count: 1000");
        return;
    }

    if node_count < 2 {
        eprintln!("node_count must be at least 2");
        return;
    }

    println!("route-search-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "tree" => vec![("Branching tree", gen_tree)],
        "ring" => vec![("Ring lattice", gen_ring)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Chain", gen_chain as Generator),
            ("Branching tree", gen_tree),
            ("Ring lattice", gen_ring),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, node_count) {
            eprintln!("{}: generator failed: {}", name, e);
        }
    }
}

fn run_benchmark(name: &str, generator: Generator, node_count: usize) -> Result<(), GraphError> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}ms: {} nodes, {} edges",
        gen_time.as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
    );

    let start: NodeId = 0;
    let end: NodeId = graph.node_count() - 1;

    println!();
    println!(
        "{:>8} {:>10} {:>10} {:>12} {:>10}",
        "policy", "routes", "attempts", "edges left", "time"
    );
    println!("{:->8} {:->10} {:->10} {:->12} {:->10}", "", "", "", "", "");

    for (label, policy) in [
        ("replay", WorkingGraphPolicy::Replay),
        ("retain", WorkingGraphPolicy::Retain),
    ] {
        let config = SearchConfig {
            policy,
            max_routes: None,
        };
        let t = Instant::now();
        let outcome = find_all_routes_with(&graph, start, end, &config)?;
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>10} {:>10} {:>12} {:>8.1}ms",
            label,
            outcome.routes.len(),
            outcome.attempts,
            outcome.remaining_edges,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic, edges appended in generation order
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
}

/// 0 -> 1 -> ... -> n-1. Exactly one route from the first to the last node.
fn gen_chain(node_count: usize) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(node_count);
    for i in 1..node_count {
        graph.add_edge(i - 1, i)?;
    }
    Ok(graph)
}

/// Each node spawns three children; children link back to their parent.
///
/// The back edges are consumed by the forward walk, so this measures deep
/// backtracking through dead-end subtrees.
fn gen_tree(node_count: usize) -> Result<Graph, GraphError> {
    let branching = 3usize;
    let mut graph = Graph::new(node_count);

    let mut next_id = 1usize;
    let mut frontier: Vec<NodeId> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(parent, child)?;
                graph.add_edge(child, parent)?;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Ring lattice: each node points at its next K nodes around the ring.
fn gen_ring(node_count: usize) -> Result<Graph, GraphError> {
    let k = 4usize;
    let mut graph = Graph::new(node_count);
    for i in 0..node_count {
        for j in 1..=k.min(node_count - 1) {
            graph.add_edge(i, (i + j) % node_count)?;
        }
    }
    Ok(graph)
}

/// Erdos-Renyi: ~10 uniform random edges per node, no self-loops.
fn gen_random(node_count: usize) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..node_count * 10 {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(from, to)?;
        }
    }

    Ok(graph)
}

/// Barbell: two random clusters joined by a one-way chain of bridge nodes.
///
/// Every route must cross the bridge, and the first crossing consumes it.
fn gen_barbell(node_count: usize) -> Result<Graph, GraphError> {
    let bridge_len = 10usize.min(node_count / 3).max(1);
    let cluster = (node_count - bridge_len) / 2;
    let mut graph = Graph::new(node_count);
    let mut rng = FastRng::new(99999);

    let degree = 8usize.min(cluster.saturating_sub(1));
    let b_start = cluster + bridge_len;
    let b_size = node_count - b_start;

    for i in 0..cluster {
        for _ in 0..degree {
            let target = rng.next(cluster);
            if target != i {
                graph.add_edge(i, target)?;
            }
        }
    }

    // Bridge: last node of cluster A -> bridge chain -> first node of cluster B
    let mut prev = cluster.saturating_sub(1);
    for id in cluster..b_start {
        graph.add_edge(prev, id)?;
        prev = id;
    }
    graph.add_edge(prev, b_start)?;

    for i in 0..b_size {
        for _ in 0..8usize.min(b_size.saturating_sub(1)) {
            let target = rng.next(b_size);
            if target != i {
                graph.add_edge(b_start + i, b_start + target)?;
            }
        }
    }

    Ok(graph)
}
