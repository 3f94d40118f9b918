use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{GraphError, NoRouteAvailable};
use crate::graph::{Graph, NodeId};
use crate::route::{backtrack, is_duplicate, route_edges, FoundRoutes, Route};

/// How the working graph is prepared between route-discovery attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkingGraphPolicy {
    /// Each attempt starts from a fresh copy of the canonical graph with
    /// the edges of every accepted route removed.
    #[default]
    Replay,
    /// One working copy is mutated across all attempts, so edges consumed
    /// while backtracking stay consumed.
    Retain,
}

/// Session-level knobs for [`find_all_routes_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    pub policy: WorkingGraphPolicy,
    /// Stop after this many routes. `None` runs until exhaustion.
    pub max_routes: Option<usize>,
}

/// Final result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub routes: FoundRoutes,
    /// True when the session ended because no further route exists,
    /// false when it was cut short by `max_routes`.
    pub exhausted: bool,
    /// Route-discovery attempts made, including the one that failed.
    pub attempts: usize,
    /// Edges left in the working graph after the last attempt.
    pub remaining_edges: usize,
}

/// Extend `partial` until it reaches `end` with a route not in `accepted`.
///
/// Always steps to the first listed neighbor of the current node and
/// consumes that edge (in both directions) the moment it is considered.
/// Dead ends and duplicate completions pop the last node and carry on from
/// the shortened route. Fails once backtracking empties the route.
pub fn build_route(
    partial: Route,
    graph: &mut Graph,
    accepted: &[Route],
    end: NodeId,
) -> Result<Route, NoRouteAvailable> {
    let mut route = partial;

    loop {
        let current = *route.last().ok_or(NoRouteAvailable)?;

        let Some(next) = graph.first_neighbor(current) else {
            trace!(node = current, depth = route.len(), "dead end, backtracking");
            backtrack(&mut route);
            continue;
        };

        graph.remove_edge(current, next);
        route.push(next);

        if next != end {
            continue;
        }

        if is_duplicate(&route, accepted) {
            trace!(route = ?route, "duplicate route, backtracking");
            // Already consumed above; removal is idempotent.
            graph.remove_edge(current, next);
            backtrack(&mut route);
            continue;
        }

        return Ok(route);
    }
}

/// Canonical graph minus every edge walked by an accepted route.
pub fn working_graph(canonical: &Graph, accepted: &[Route]) -> Graph {
    let mut graph = canonical.clone();
    for route in accepted {
        for (from, to) in route_edges(route) {
            graph.remove_edge(from, to);
        }
    }
    graph
}

/// Incremental route discovery between one start and end node.
///
/// Each call to [`RouteSession::next_route`] is one attempt. The canonical
/// graph is only ever read; attempts run on a working copy owned by the
/// session.
pub struct RouteSession<'g> {
    canonical: &'g Graph,
    start: NodeId,
    end: NodeId,
    /// Present only under [`WorkingGraphPolicy::Retain`].
    retained: Option<Graph>,
    accepted: FoundRoutes,
    attempts: usize,
    remaining_edges: usize,
    exhausted: bool,
}

impl<'g> RouteSession<'g> {
    pub fn new(
        canonical: &'g Graph,
        start: NodeId,
        end: NodeId,
        policy: WorkingGraphPolicy,
    ) -> Result<Self, GraphError> {
        canonical.check_node(start)?;
        canonical.check_node(end)?;

        let retained = match policy {
            WorkingGraphPolicy::Replay => None,
            WorkingGraphPolicy::Retain => Some(canonical.clone()),
        };

        Ok(Self {
            canonical,
            start,
            end,
            retained,
            accepted: Vec::new(),
            attempts: 0,
            remaining_edges: canonical.edge_count(),
            exhausted: false,
        })
    }

    /// Run one attempt. Once exhausted, keeps failing without searching.
    pub fn next_route(&mut self) -> Result<&[NodeId], NoRouteAvailable> {
        if self.exhausted {
            return Err(NoRouteAvailable);
        }
        self.attempts += 1;

        let mut replayed;
        let graph = match self.retained.as_mut() {
            Some(graph) => graph,
            None => {
                replayed = working_graph(self.canonical, &self.accepted);
                &mut replayed
            }
        };

        let result = build_route(vec![self.start], graph, &self.accepted, self.end);
        self.remaining_edges = graph.edge_count();

        match result {
            Ok(route) => {
                debug!(
                    attempt = self.attempts,
                    route = ?route,
                    remaining_edges = self.remaining_edges,
                    "route accepted"
                );
                let idx = self.accepted.len();
                self.accepted.push(route);
                Ok(&self.accepted[idx])
            }
            Err(err) => {
                debug!(
                    attempt = self.attempts,
                    routes = self.accepted.len(),
                    "search exhausted"
                );
                self.exhausted = true;
                Err(err)
            }
        }
    }

    pub fn accepted(&self) -> &[Route] {
        &self.accepted
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn finish(self) -> SearchOutcome {
        SearchOutcome {
            routes: self.accepted,
            exhausted: self.exhausted,
            attempts: self.attempts,
            remaining_edges: self.remaining_edges,
        }
    }
}

impl Iterator for RouteSession<'_> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        self.next_route().ok().map(<[NodeId]>::to_vec)
    }
}

/// Discover every route from `start` to `end` until the graph is exhausted.
pub fn find_all_routes(
    canonical: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<SearchOutcome, GraphError> {
    find_all_routes_with(canonical, start, end, &SearchConfig::default())
}

/// [`find_all_routes`] with an explicit policy and optional route cap.
pub fn find_all_routes_with(
    canonical: &Graph,
    start: NodeId,
    end: NodeId,
    config: &SearchConfig,
) -> Result<SearchOutcome, GraphError> {
    let mut session = RouteSession::new(canonical, start, end, config.policy)?;

    while config
        .max_routes
        .map_or(true, |max| session.accepted().len() < max)
    {
        if session.next_route().is_err() {
            break;
        }
    }

    Ok(session.finish())
}
