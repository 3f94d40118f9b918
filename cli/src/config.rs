use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use route_search_core::{SearchConfig, WorkingGraphPolicy};

#[derive(Debug, Parser)]
#[command(name = "route-search")]
#[command(about = "Enumerate edge-consuming routes between two nodes of a directed graph")]
pub struct Args {
    /// JSON graph file. The built-in six-node graph (A..F) is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Start node label. Prompted for on stdin when omitted.
    #[arg(long)]
    pub start: Option<String>,

    /// End node label. Prompted for on stdin when omitted.
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How the working graph is rebuilt between attempts
    #[arg(long, value_enum, default_value_t = PolicyArg::Replay)]
    pub policy: PolicyArg,

    /// Stop after this many routes
    #[arg(long, value_name = "N")]
    pub max_routes: Option<usize>,

    /// -v info, -vv debug, -vvv trace. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Replay,
    Retain,
}

impl From<PolicyArg> for WorkingGraphPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Replay => WorkingGraphPolicy::Replay,
            PolicyArg::Retain => WorkingGraphPolicy::Retain,
        }
    }
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            policy: self.policy.into(),
            max_routes: self.max_routes,
        }
    }

    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["route-search"]).unwrap();
        assert!(args.graph.is_none());
        assert!(args.start.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.policy, PolicyArg::Replay);
        assert_eq!(args.log_filter(), "warn");

        let config = args.search_config();
        assert_eq!(config.policy, WorkingGraphPolicy::Replay);
        assert_eq!(config.max_routes, None);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "route-search",
            "--graph",
            "g.json",
            "--start",
            "B",
            "--end",
            "E",
            "--format",
            "json",
            "--policy",
            "retain",
            "--max-routes",
            "2",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.graph, Some(PathBuf::from("g.json")));
        assert_eq!(args.start.as_deref(), Some("B"));
        assert_eq!(args.end.as_deref(), Some("E"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_filter(), "debug");

        let config = args.search_config();
        assert_eq!(config.policy, WorkingGraphPolicy::Retain);
        assert_eq!(config.max_routes, Some(2));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Args::try_parse_from(["route-search", "--policy", "fresh"]).is_err());
    }
}
