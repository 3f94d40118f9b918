use crate::graph::NodeId;

/// An ordered walk of nodes from the start node towards the end node.
pub type Route = Vec<NodeId>;

/// Accepted routes in discovery order. No two members are equal.
pub type FoundRoutes = Vec<Route>;

/// Drop the last node of `route`, returning it.
pub fn backtrack(route: &mut Route) -> Option<NodeId> {
    route.pop()
}

/// True iff some accepted route has the same nodes in the same order.
pub fn is_duplicate(candidate: &[NodeId], accepted: &[Route]) -> bool {
    accepted.iter().any(|r| r.as_slice() == candidate)
}

/// Consecutive `(from, to)` pairs walked by `route`.
pub fn route_edges(route: &[NodeId]) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
    route.windows(2).map(|w| (w[0], w[1]))
}
