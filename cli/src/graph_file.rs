use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use route_search_core::{Graph, NodeId, NodeLabels};
use serde::Deserialize;
use tracing::info;

/// On-disk graph: adjacency lists with optional node labels.
///
/// ```json
/// {"labels": ["A", "B", "C"], "adjacency": [[1], [2], []]}
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    labels: Option<Vec<String>>,
    adjacency: Vec<Vec<NodeId>>,
}

/// A canonical graph together with the labels used to talk about it.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub labels: NodeLabels,
}

impl LoadedGraph {
    pub fn reference() -> Self {
        Self {
            graph: Graph::reference(),
            labels: NodeLabels::reference(),
        }
    }
}

pub fn parse_graph(json: &str) -> Result<LoadedGraph> {
    let file: GraphFile = serde_json::from_str(json).context("invalid graph JSON")?;
    let graph = Graph::from_adjacency(file.adjacency)?;
    let labels = NodeLabels::for_graph(&graph, file.labels)?;
    Ok(LoadedGraph { graph, labels })
}

/// Load `path`, or the built-in reference graph when no path is given.
pub fn load_graph(path: Option<&Path>) -> Result<LoadedGraph> {
    let Some(path) = path else {
        info!("using built-in reference graph");
        return Ok(LoadedGraph::reference());
    };

    let t = Instant::now();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let loaded =
        parse_graph(&json).with_context(|| format!("failed to load {}", path.display()))?;

    info!(
        path = %path.display(),
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        load_time_ms = t.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(loaded)
}
