//! `sr connect`: join two rooms.

use clap::Args;
use sixrooms_core::{ConnectionKind, add_connection};
use tracing::warn;

use super::GraphSource;
use crate::output::emit_json;

/// Arguments for `sr connect`.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// First room.
    pub a: String,

    /// Second room.
    pub b: String,

    /// Connection kind: open, closed, trapped, hazardous or secret.
    #[arg(long, default_value = "open")]
    pub kind: ConnectionKind,

    #[command(flatten)]
    pub source: GraphSource,
}

/// Execute `sr connect`.
pub fn run_connect(args: &ConnectArgs) -> anyhow::Result<()> {
    let graph = args.source.load_for_edit()?;
    let next = add_connection(&graph, &args.a, &args.b, args.kind);
    if next == graph {
        warn!(a = %args.a, b = %args.b, "nothing to connect; graph unchanged");
    }
    emit_json(&next)
}
