use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use route_search_core::{NodeId, NodeLabels};
use tracing::warn;

/// Resolve a start or end node.
///
/// A label given on the command line must resolve; otherwise the user is
/// asked on `input` until a known label is typed.
pub fn resolve_endpoint<R: BufRead, W: Write>(
    given: Option<&str>,
    role: &str,
    labels: &NodeLabels,
    input: &mut R,
    output: &mut W,
) -> Result<NodeId> {
    match given {
        Some(label) => Ok(labels.resolve(label)?),
        None => prompt_for_node(input, output, role, labels),
    }
}

/// Ask for a node label, re-prompting after each unknown label.
///
/// Fails only if `input` reaches EOF first.
pub fn prompt_for_node<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    role: &str,
    labels: &NodeLabels,
) -> Result<NodeId> {
    loop {
        write!(
            output,
            "Please enter your {} point ({}): -> ",
            role,
            labels.as_slice().join(", ")
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a {} point was chosen", role);
        }

        match labels.resolve(&line) {
            Ok(node) => return Ok(node),
            Err(err) => {
                warn!(label = %err.label, role, "label not found");
                writeln!(output, "{}. Please try again.", err)?;
            }
        }
    }
}
