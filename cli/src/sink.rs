use std::io::Write;

use anyhow::Result;
use route_search_core::{NodeLabels, SearchOutcome};
use serde::Serialize;

use crate::config::OutputFormat;

/// Receives the final outcome of a session.
pub trait RouteSink {
    fn write_outcome(&mut self, outcome: &SearchOutcome, labels: &NodeLabels) -> Result<()>;
}

/// One line per route (`B -> C -> E`) and a summary line.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RouteSink for TextSink<W> {
    fn write_outcome(&mut self, outcome: &SearchOutcome, labels: &NodeLabels) -> Result<()> {
        for route in &outcome.routes {
            writeln!(self.out, "{}", labels.route_labels(route).join(" -> "))?;
        }
        let ending = if outcome.exhausted {
            "search exhausted"
        } else {
            "stopped at route limit"
        };
        let noun = if outcome.routes.len() == 1 { "route" } else { "routes" };
        writeln!(self.out, "{} {} found; {}", outcome.routes.len(), noun, ending)?;
        self.out.flush()?;
        Ok(())
    }
}

/// The outcome as a single JSON document.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    outcome: &'a SearchOutcome,
    labelled_routes: Vec<Vec<String>>,
}

impl<W: Write> RouteSink for JsonSink<W> {
    fn write_outcome(&mut self, outcome: &SearchOutcome, labels: &NodeLabels) -> Result<()> {
        let report = JsonReport {
            outcome,
            labelled_routes: outcome
                .routes
                .iter()
                .map(|r| labels.route_labels(r))
                .collect(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn sink_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn RouteSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}
