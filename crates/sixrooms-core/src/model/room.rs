use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ParseEnumError;

/// What a room holds, in the classic six-room stocking sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomContent {
    MonsterTreasure,
    Monster,
    Treasure,
    Special,
    Empty,
}

impl RoomContent {
    /// Every content category, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::MonsterTreasure,
        Self::Monster,
        Self::Treasure,
        Self::Special,
        Self::Empty,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonsterTreasure => "monster+treasure",
            Self::Monster => "monster",
            Self::Treasure => "treasure",
            Self::Special => "special",
            Self::Empty => "empty",
        }
    }

    /// Templated prompt used as a freshly generated room's content text.
    #[must_use]
    pub const fn default_prompt(self) -> &'static str {
        match self {
            Self::MonsterTreasure => {
                "A monster guards treasure here. What is it, and why does it hoard?"
            }
            Self::Monster => "A monster lairs here. What does it want, and will it talk?",
            Self::Treasure => "Treasure lies here, perhaps hidden or trapped.",
            Self::Special => "Something strange: a puzzle, a trick, or an odd feature.",
            Self::Empty => "Empty. Add atmosphere, a clue, or a minor discovery.",
        }
    }
}

impl fmt::Display for RoomContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomContent {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize_token(s);
        match normalized.as_str() {
            "monster+treasure" | "monster_treasure" | "monster-treasure" => {
                Ok(Self::MonsterTreasure)
            }
            "monster" => Ok(Self::Monster),
            "treasure" => Ok(Self::Treasure),
            "special" => Ok(Self::Special),
            "empty" => Ok(Self::Empty),
            _ => Err(ParseEnumError {
                expected: "room content",
                got: s.to_string(),
            }),
        }
    }
}

/// A node of the dungeon graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable, opaque identifier. Never reused within a graph.
    pub id: String,
    /// Author-facing name. May be empty; see [`Room::display_label`].
    #[serde(default)]
    pub label: String,
    pub kind: RoomContent,
    /// Free-form, markdown-capable notes.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub entrance: bool,
    /// Room this one's unit was spliced from. Provenance only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Room {
    /// Build a room stocked with `kind` and its default prompt.
    #[must_use]
    pub fn stocked(id: impl Into<String>, kind: RoomContent) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            kind,
            content: kind.default_prompt().to_string(),
            entrance: false,
            parent: None,
        }
    }

    /// The label, or the identifier when the label is blank.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}
