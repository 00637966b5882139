//! Room-content and entrance assignment for a fresh unit.
//!
//! The six rooms always hold one monster+treasure, one monster, one
//! treasure and three empties, shuffled across positions. On a coin flip one
//! of the empties, chosen uniformly among the rooms holding "empty", becomes
//! "special". Two entrance positions are drawn with replacement, so a unit
//! has one or two entrances.

use rand::Rng;
use rand::seq::SliceRandom;

use super::catalog::UNIT_SIZE;
use crate::model::RoomContent;

/// The unshuffled content multiset.
pub const CANONICAL_STOCK: [RoomContent; UNIT_SIZE] = [
    RoomContent::MonsterTreasure,
    RoomContent::Monster,
    RoomContent::Treasure,
    RoomContent::Empty,
    RoomContent::Empty,
    RoomContent::Empty,
];

/// Per-position stocking for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stocking {
    pub contents: [RoomContent; UNIT_SIZE],
    pub entrances: [bool; UNIT_SIZE],
}

impl Stocking {
    /// Number of positions flagged as entrances (1 or 2).
    #[must_use]
    pub fn entrance_count(&self) -> usize {
        self.entrances.iter().filter(|&&e| e).count()
    }
}

/// Draw a stocking for the six positions of a unit.
pub fn stock<R: Rng + ?Sized>(rng: &mut R) -> Stocking {
    let mut contents = CANONICAL_STOCK;
    contents.shuffle(rng);

    if rng.gen_bool(0.5) {
        let empties: Vec<usize> = (0..UNIT_SIZE)
            .filter(|&i| contents[i] == RoomContent::Empty)
            .collect();
        if let Some(&pick) = empties.choose(rng) {
            contents[pick] = RoomContent::Special;
        }
    }

    let mut entrances = [false; UNIT_SIZE];
    entrances[rng.gen_range(0..UNIT_SIZE)] = true;
    entrances[rng.gen_range(0..UNIT_SIZE)] = true;

    Stocking {
        contents,
        entrances,
    }
}
