//! `sr explode`: replace a room with a sub-dungeon.
//!
//! Prints `{"graph": ..., "bridge_room": ...}` so callers can re-select the
//! room that took the exploded room's place.

use clap::Args;
use sixrooms_core::mutate::explode_room_with;
use tracing::info;

use super::{GraphSource, make_rng, warn_if_missing};
use crate::config::EffectiveConfig;
use crate::output::emit_json;

/// Arguments for `sr explode`.
#[derive(Args, Debug)]
pub struct ExplodeArgs {
    /// Room to replace.
    pub room: String,

    #[command(flatten)]
    pub source: GraphSource,

    /// Catalog index of the replacement unit's layout. Random if omitted.
    #[arg(long, value_name = "N")]
    pub layout: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Execute `sr explode`.
pub fn run_explode(args: &ExplodeArgs, config: &EffectiveConfig) -> anyhow::Result<()> {
    let graph = args.source.load_for_edit()?;
    warn_if_missing(&graph, &args.room);

    let mut rng = make_rng(args.seed.or_else(|| config.seed()));
    let layout = args.layout.or_else(|| config.layout());
    let exploded = explode_room_with(&graph, &args.room, layout, &mut rng)?;
    if let Some(bridge) = &exploded.bridge_room {
        info!(room = %args.room, %bridge, "exploded room");
    }
    emit_json(&exploded)
}
