//! `sr layouts`: list the six-room layout catalog.

use std::io::{self, Write};

use sixrooms_core::generate::{Layout, layouts};

use crate::output::{OutputMode, Renderable, render_list};

/// One catalog entry as shown to the user.
#[derive(Debug, serde::Serialize)]
pub struct LayoutRow {
    pub index: usize,
    pub name: &'static str,
    pub cycle: usize,
    pub edges: Vec<(usize, usize)>,
}

impl LayoutRow {
    fn new(index: usize, layout: &Layout) -> Self {
        Self {
            index,
            name: layout.name,
            cycle: layout.cycle_len(),
            edges: layout.edges.to_vec(),
        }
    }

    fn edge_list(&self) -> String {
        self.edges
            .iter()
            .map(|(a, b)| format!("{a}-{b}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Renderable for LayoutRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "[{}] {}", self.index, self.name)?;
        writeln!(w, "    cycle of {}: {}", self.cycle, self.edge_list())
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(w, self).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            self.index,
            self.cycle,
            self.name,
            self.edge_list()
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["index", "cycle", "name", "edges"]
    }
}

/// Execute `sr layouts`.
pub fn run_layouts(output: OutputMode) -> anyhow::Result<()> {
    let rows: Vec<LayoutRow> = layouts()
        .iter()
        .enumerate()
        .map(|(index, layout)| LayoutRow::new(index, layout))
        .collect();
    render_list(&rows, output)?;
    Ok(())
}
