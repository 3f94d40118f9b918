//! route-search-core: edge-consuming route enumeration.
//!
//! A pure Rust library that keeps a small directed graph as ordered
//! adjacency lists and enumerates routes between a start and end node by
//! depth-first backtracking. Every edge the search considers is consumed
//! in both directions, and every accepted route's edges stay consumed for
//! the rest of the session, so repeated attempts are bounded by the edge
//! count and end in exhaustion.
//!
//! No I/O happens here; label prompting and result printing live in the
//! `route-search` binary.

mod error;
mod graph;
mod labels;
mod route;
mod search;

pub use error::{GraphError, LabelNotFound, NoRouteAvailable};
pub use graph::{Graph, NodeId};
pub use labels::NodeLabels;
pub use route::{backtrack, is_duplicate, route_edges, FoundRoutes, Route};
pub use search::{
    build_route, find_all_routes, find_all_routes_with, working_graph, RouteSession,
    SearchConfig, SearchOutcome, WorkingGraphPolicy,
};
