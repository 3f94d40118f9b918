use serde::Serialize;

use crate::error::GraphError;

/// Node identifier: an index in `[0, node_count)`.
pub type NodeId = usize;

/// In-memory directed graph: one ordered adjacency list per node.
///
/// Adjacency order is significant. The route search always follows the
/// first listed neighbor, so the order of each list decides which route
/// is discovered first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// A graph of `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build from explicit adjacency lists, rejecting out-of-range targets.
    pub fn from_adjacency(adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        if let Some(&node) = adjacency.iter().flatten().find(|&&n| n >= node_count) {
            return Err(GraphError::NodeOutOfRange { node, node_count });
        }
        Ok(Self { adjacency })
    }

    /// The six-node demo graph (A..F = 0..5).
    ///
    /// ```text
    /// A -> C
    /// B -> C, D, F
    /// C -> A, B, E
    /// D -> A, E
    /// E -> C, D, F
    /// F -> B, E
    /// ```
    pub fn reference() -> Self {
        Self {
            adjacency: vec![
                vec![2],
                vec![2, 3, 5],
                vec![0, 1, 4],
                vec![0, 4],
                vec![2, 3, 5],
                vec![1, 4],
            ],
        }
    }

    /// Append a directed edge to the end of `from`'s adjacency list.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Consume the connection between `from` and `to`.
    ///
    /// Removes every `to` from `from`'s list and every `from` from `to`'s
    /// list, so once an edge is used neither direction can be walked again.
    /// Removing an edge that does not exist is a no-op.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(out) = self.adjacency.get_mut(from) {
            out.retain(|&n| n != to);
        }
        if let Some(back) = self.adjacency.get_mut(to) {
            back.retain(|&n| n != from);
        }
    }

    /// Out-neighbors of `node` in traversal order. Empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The neighbor the search would step to next, if any.
    pub fn first_neighbor(&self, node: NodeId) -> Option<NodeId> {
        self.neighbors(node).first().copied()
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (parallel entries count separately).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum()
    }
}
