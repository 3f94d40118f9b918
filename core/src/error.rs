use thiserror::Error;

use crate::graph::NodeId;

/// The Route Builder ran out of edges before completing a novel route.
///
/// This is the session's normal termination signal, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no further route is available from the start node")]
pub struct NoRouteAvailable;

/// A human-readable label did not match any node.
///
/// Kept separate from [`GraphError`] so an input layer can re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node label '{label}'")]
pub struct LabelNotFound {
    pub label: String,
}

/// Structural problems with a graph or the nodes a caller asked about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("{labels} labels supplied for a graph of {nodes} nodes")]
    LabelCountMismatch { labels: usize, nodes: usize },

    #[error("label '{0}' is used by more than one node")]
    DuplicateLabel(String),
}
