//! route-search: command-line front end for route-search-core.
//!
//! Loads a graph (or the built-in A..F demo graph), resolves start and end
//! labels from flags or an interactive prompt, runs one search session and
//! hands the outcome to a text or JSON sink on stdout. Prompts and logs go
//! to stderr.

mod config;
mod graph_file;
mod prompt;
mod sink;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use route_search_core::find_all_routes_with;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter());

    let stdin = io::stdin();
    run(&args, &mut stdin.lock(), &mut io::stderr(), io::stdout().lock())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run<R: BufRead, P: Write, O: Write>(
    args: &Args,
    input: &mut R,
    prompt_out: &mut P,
    out: O,
) -> Result<()> {
    let loaded = graph_file::load_graph(args.graph.as_deref())?;

    let start = prompt::resolve_endpoint(
        args.start.as_deref(),
        "start",
        &loaded.labels,
        input,
        prompt_out,
    )?;
    let end = prompt::resolve_endpoint(
        args.end.as_deref(),
        "end",
        &loaded.labels,
        input,
        prompt_out,
    )?;

    let config = args.search_config();
    info!(start, end, policy = ?config.policy, max_routes = ?config.max_routes, "searching");

    let t = Instant::now();
    let outcome = find_all_routes_with(&loaded.graph, start, end, &config)?;
    info!(
        routes = outcome.routes.len(),
        attempts = outcome.attempts,
        exhausted = outcome.exhausted,
        elapsed_ms = t.elapsed().as_secs_f64() * 1000.0,
        "search finished"
    );

    sink::sink_for(args.format, out).write_outcome(&outcome, &loaded.labels)
}
