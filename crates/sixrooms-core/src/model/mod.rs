//! Dungeon graph data model.
//!
//! A [`Graph`] is a flat arena: an ordered list of [`Room`]s and an ordered
//! list of [`Connection`]s. Sub-dungeons are not nested objects; the unit a
//! room came from is recorded only as an inert [`Room::parent`] tag.

mod connection;
mod graph;
pub mod normalize;
mod room;

pub use connection::{Connection, ConnectionKind};
pub use graph::{Graph, GraphIssue};
pub use room::{Room, RoomContent};

use std::fmt;

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

fn normalize_token(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
