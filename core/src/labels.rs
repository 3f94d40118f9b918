use std::collections::HashMap;

use crate::error::{GraphError, LabelNotFound};
use crate::graph::{Graph, NodeId};

/// Human-readable names for the nodes of a graph.
///
/// Lookups ignore surrounding whitespace and ASCII case, so `" b\n"`
/// resolves to the node labelled `B`.
#[derive(Debug, Clone)]
pub struct NodeLabels {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
}

impl NodeLabels {
    /// Label nodes `0..labels.len()` in order.
    pub fn new(labels: Vec<String>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(labels.len());
        for (id, label) in labels.iter().enumerate() {
            if index.insert(normalize(label), id).is_some() {
                return Err(GraphError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, index })
    }

    /// Decimal indices as labels: `"0"`, `"1"`, ...
    pub fn numeric(node_count: usize) -> Self {
        Self::from_unique((0..node_count).map(|i| i.to_string()).collect())
    }

    /// `A`..`F` for [`Graph::reference`].
    pub fn reference() -> Self {
        Self::from_unique(('A'..='F').map(|c| c.to_string()).collect())
    }

    fn from_unique(labels: Vec<String>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(id, l)| (normalize(l), id))
            .collect();
        Self { labels, index }
    }

    /// Labels for `graph`, falling back to numeric labels when none are given.
    pub fn for_graph(graph: &Graph, labels: Option<Vec<String>>) -> Result<Self, GraphError> {
        match labels {
            None => Ok(Self::numeric(graph.node_count())),
            Some(labels) if labels.len() != graph.node_count() => {
                Err(GraphError::LabelCountMismatch {
                    labels: labels.len(),
                    nodes: graph.node_count(),
                })
            }
            Some(labels) => Self::new(labels),
        }
    }

    /// Resolve a typed label to its node.
    pub fn resolve(&self, label: &str) -> Result<NodeId, LabelNotFound> {
        self.index
            .get(&normalize(label))
            .copied()
            .ok_or_else(|| LabelNotFound {
                label: label.trim().to_string(),
            })
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node).map(|s| s.as_str())
    }

    /// Labels for each node of `route`; unlabelled nodes show their index.
    pub fn route_labels(&self, route: &[NodeId]) -> Vec<String> {
        route
            .iter()
            .map(|&n| {
                self.label(n)
                    .map(str::to_string)
                    .unwrap_or_else(|| n.to_string())
            })
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}
