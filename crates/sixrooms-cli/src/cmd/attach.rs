//! `sr attach`: grow a room with a new sub-dungeon.

use clap::Args;
use sixrooms_core::mutate::attach_subdungeon_with;

use super::{GraphSource, make_rng, warn_if_missing};
use crate::config::EffectiveConfig;
use crate::output::emit_json;

/// Arguments for `sr attach`.
#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Room to attach the new unit to.
    pub room: String,

    #[command(flatten)]
    pub source: GraphSource,

    /// Catalog index of the unit's layout. Random if omitted.
    #[arg(long, value_name = "N")]
    pub layout: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Execute `sr attach`.
pub fn run_attach(args: &AttachArgs, config: &EffectiveConfig) -> anyhow::Result<()> {
    let graph = args.source.load_for_edit()?;
    warn_if_missing(&graph, &args.room);

    let mut rng = make_rng(args.seed.or_else(|| config.seed()));
    let layout = args.layout.or_else(|| config.layout());
    let next = attach_subdungeon_with(&graph, &args.room, layout, &mut rng)?;
    emit_json(&next)
}
