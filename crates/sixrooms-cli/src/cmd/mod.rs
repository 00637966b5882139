//! Subcommand handlers.
//!
//! Each handler loads a graph (when it needs one), calls exactly one engine
//! operation and prints the result. Shared plumbing lives here.

pub mod analyze;
pub mod attach;
pub mod check;
pub mod connect;
pub mod edit;
pub mod explode;
pub mod generate;
pub mod layouts;
pub mod outline;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sixrooms_core::Graph;
use tracing::{debug, warn};

/// Where to read the input graph from.
#[derive(Args, Debug, Clone)]
pub struct GraphSource {
    /// Graph JSON file, or `-` for stdin.
    #[arg(long = "graph", short = 'g', value_name = "FILE", default_value = "-")]
    pub path: PathBuf,
}

impl GraphSource {
    /// Read and parse the graph.
    pub fn load(&self) -> Result<Graph> {
        let graph = if self.path == Path::new("-") {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read graph from stdin")?;
            parse_graph(&raw).context("Failed to parse graph from stdin")?
        } else {
            let raw = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {}", self.path.display()))?;
            parse_graph(&raw).with_context(|| format!("Failed to parse {}", self.path.display()))?
        };
        debug!(
            rooms = graph.rooms.len(),
            connections = graph.connections.len(),
            "loaded graph"
        );
        Ok(graph)
    }

    /// Read the graph and warn about structural problems.
    ///
    /// Mutating commands still run on a malformed graph; `sr check` is the
    /// place to reject one.
    pub fn load_for_edit(&self) -> Result<Graph> {
        let graph = self.load()?;
        for issue in graph.validate() {
            warn!(%issue, "input graph is malformed");
        }
        Ok(graph)
    }
}

fn parse_graph(raw: &str) -> Result<Graph> {
    Ok(serde_json::from_str(raw)?)
}

/// Seeded rng when a seed is given, otherwise seeded from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Log when an id names no room, since the engine treats that as a no-op.
pub fn warn_if_missing(graph: &Graph, room_id: &str) {
    if !graph.contains_room(room_id) {
        warn!(room = room_id, "no such room; graph unchanged");
    }
}
