//! Six-room unit generation.
//!
//! # Overview
//!
//! A unit is built in three independent random steps, each drawing from the
//! caller's random source:
//!
//! ```text
//! catalog::layout / random_layout_index   -> 6 edges over positions 0..6
//! stocking::stock                         -> content + entrance per position
//! roller::roll_connection_kind (x6)       -> traversal kind per edge
//! ```
//!
//! [`generate`] stitches the three together into a [`Graph`] with freshly
//! minted room identifiers. Seeding the random source makes the whole unit,
//! identifiers included, reproducible.

pub mod catalog;
pub mod roller;
pub mod stocking;

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, instrument};

use crate::error::GenerateError;
use crate::model::normalize::pair_key;
use crate::model::{Connection, Graph, Room};

pub use catalog::{Layout, UNIT_SIZE, layout, layouts, random_layout_index};
pub use roller::{CONNECTION_WEIGHTS, roll_connection_kind};
pub use stocking::{CANONICAL_STOCK, Stocking, stock};

/// Generate one fresh six-room unit.
///
/// `layout` picks a catalog entry explicitly; `None` picks one uniformly.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownLayout`] for an out-of-range index and
/// [`GenerateError::DuplicateEdge`] if the chosen layout is corrupt.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    layout: Option<usize>,
) -> Result<Graph, GenerateError> {
    generate_unit(rng, layout, &HashSet::new())
}

/// Generate a unit whose room ids avoid every id in `taken`.
///
/// Used when splicing into an existing graph.
#[instrument(skip(rng, taken), fields(taken = taken.len()))]
pub(crate) fn generate_unit<R: Rng + ?Sized>(
    rng: &mut R,
    layout: Option<usize>,
    taken: &HashSet<&str>,
) -> Result<Graph, GenerateError> {
    let index = match layout {
        Some(index) => index,
        None => random_layout_index(rng),
    };
    let chosen = catalog::layout(index).ok_or(GenerateError::UnknownLayout {
        index,
        available: layouts().len(),
    })?;

    let stocking = stock(rng);

    let mut minted: Vec<String> = Vec::with_capacity(UNIT_SIZE);
    for _ in 0..UNIT_SIZE {
        let id = mint_room_id(rng, taken, &minted);
        minted.push(id);
    }

    let rooms: Vec<Room> = minted
        .iter()
        .enumerate()
        .map(|(pos, id)| {
            let mut room = Room::stocked(id.clone(), stocking.contents[pos]);
            room.entrance = stocking.entrances[pos];
            room
        })
        .collect();

    let mut seen = HashSet::with_capacity(UNIT_SIZE);
    let mut connections = Vec::with_capacity(UNIT_SIZE);
    for &(a, b) in &chosen.edges {
        let (source, target) = (&minted[a], &minted[b]);
        if !seen.insert(pair_key(source, target)) {
            return Err(GenerateError::DuplicateEdge {
                layout: index,
                a: source.clone(),
                b: target.clone(),
            });
        }
        connections.push(Connection::new(
            source.clone(),
            target.clone(),
            roll_connection_kind(rng),
        ));
    }

    debug!(layout = index, name = chosen.name, "generated unit");
    Ok(Graph::new(rooms, connections))
}

/// Mint a `room-<hex>` id not present in `taken` or `minted`.
fn mint_room_id<R: Rng + ?Sized>(rng: &mut R, taken: &HashSet<&str>, minted: &[String]) -> String {
    loop {
        let candidate = format!("room-{:016x}", rng.next_u64());
        if !taken.contains(candidate.as_str()) && !minted.contains(&candidate) {
            return candidate;
        }
    }
}
