//! `sr check`: structural validation of a graph.
//!
//! Exits non-zero when the graph has any issue.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use sixrooms_core::GraphIssue;

use super::GraphSource;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `sr check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: GraphSource,
}

/// Report payload for `sr check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub rooms: usize,
    pub connections: usize,
    pub issues: Vec<GraphIssue>,
}

fn render_text(report: &CheckReport, w: &mut dyn Write) -> io::Result<()> {
    if report.valid {
        return writeln!(w, "ok\t{}\t{}", report.rooms, report.connections);
    }
    for issue in &report.issues {
        writeln!(w, "issue\t{issue}")?;
    }
    Ok(())
}

fn render_pretty(report: &CheckReport, w: &mut dyn Write) -> io::Result<()> {
    if report.valid {
        return writeln!(
            w,
            "✓ graph is valid ({} rooms, {} connections)",
            report.rooms, report.connections
        );
    }
    pretty_section(w, &format!("{} issue(s)", report.issues.len()))?;
    for issue in &report.issues {
        writeln!(w, "- {issue}")?;
    }
    Ok(())
}

/// Execute `sr check`.
pub fn run_check(args: &CheckArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = args.source.load()?;
    let issues = graph.validate();
    let report = CheckReport {
        valid: issues.is_empty(),
        rooms: graph.rooms.len(),
        connections: graph.connections.len(),
        issues,
    };
    render_mode(output, &report, render_text, render_pretty)?;

    if !report.valid {
        anyhow::bail!("graph has {} structural issue(s)", report.issues.len());
    }
    Ok(())
}
