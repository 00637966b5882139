//! `sr generate`: create a fresh six-room unit.

use clap::Args;
use sixrooms_core::generate;
use tracing::info;

use super::make_rng;
use crate::config::EffectiveConfig;
use crate::output::emit_json;

/// Arguments for `sr generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Catalog index of the layout to use (see `sr layouts`). Random if omitted.
    #[arg(long, value_name = "N")]
    pub layout: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Execute `sr generate`.
pub fn run_generate(args: &GenerateArgs, config: &EffectiveConfig) -> anyhow::Result<()> {
    let layout = args.layout.or_else(|| config.layout());
    let seed = args.seed.or_else(|| config.seed());
    let mut rng = make_rng(seed);

    let graph = generate(&mut rng, layout)?;
    info!(rooms = graph.rooms.len(), ?layout, ?seed, "generated dungeon");
    emit_json(&graph)
}
