//! `sr analyze`: bridge connections and entrance depths.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use sixrooms_core::{Graph, LayoutHints};

use super::GraphSource;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `sr analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: GraphSource,
}

#[derive(Debug, Serialize)]
struct BridgeRow {
    a: String,
    b: String,
    a_label: String,
    b_label: String,
}

#[derive(Debug, Serialize)]
struct DepthRow {
    room: String,
    label: String,
    /// `None` when no entrance reaches the room.
    depth: Option<usize>,
}

/// Report payload for `sr analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    bridges: Vec<BridgeRow>,
    depths: Vec<DepthRow>,
}

impl AnalyzeReport {
    pub fn build(graph: &Graph) -> Self {
        let hints = LayoutHints::for_graph(graph);
        let label = |id: &str| graph.display_label(id).unwrap_or(id).to_string();

        let bridges = hints
            .bridges
            .iter()
            .map(|(a, b)| BridgeRow {
                a: a.clone(),
                b: b.clone(),
                a_label: label(a),
                b_label: label(b),
            })
            .collect();

        let mut depths: Vec<DepthRow> = graph
            .rooms
            .iter()
            .map(|room| DepthRow {
                room: room.id.clone(),
                label: room.display_label().to_string(),
                depth: hints.depth(&room.id),
            })
            .collect();
        // Reachable rooms by depth, unreachable ones last.
        depths.sort_by(|x, y| {
            x.depth
                .is_none()
                .cmp(&y.depth.is_none())
                .then_with(|| x.depth.cmp(&y.depth))
                .then_with(|| x.label.cmp(&y.label))
        });

        Self { bridges, depths }
    }
}

fn render_text(report: &AnalyzeReport, w: &mut dyn Write) -> io::Result<()> {
    for bridge in &report.bridges {
        writeln!(w, "bridge\t{}\t{}", bridge.a, bridge.b)?;
    }
    for row in &report.depths {
        match row.depth {
            Some(depth) => writeln!(w, "depth\t{}\t{depth}", row.room)?,
            None => writeln!(w, "depth\t{}\t-", row.room)?,
        }
    }
    Ok(())
}

fn render_pretty(report: &AnalyzeReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Bridges")?;
    if report.bridges.is_empty() {
        writeln!(w, "(none)")?;
    }
    for bridge in &report.bridges {
        writeln!(w, "{} <-> {}", bridge.a_label, bridge.b_label)?;
    }
    writeln!(w)?;

    pretty_section(w, "Depth from entrances")?;
    for row in &report.depths {
        let depth = row
            .depth
            .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        pretty_kv(w, &row.label, depth)?;
    }
    Ok(())
}

/// Execute `sr analyze`.
pub fn run_analyze(args: &AnalyzeArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = args.source.load()?;
    let report = AnalyzeReport::build(&graph);
    render_mode(output, &report, render_text, render_pretty)
}
