use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::normalize::{PairKey, pair_key};
use super::ParseEnumError;

/// How a passage between two rooms is traversed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    #[default]
    Open,
    Closed,
    Trapped,
    Hazardous,
    Secret,
}

impl ConnectionKind {
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::Closed,
        Self::Trapped,
        Self::Hazardous,
        Self::Secret,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Trapped => "trapped",
            Self::Hazardous => "hazardous",
            Self::Secret => "secret",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize_token(s);
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "trapped" => Ok(Self::Trapped),
            "hazardous" => Ok(Self::Hazardous),
            "secret" => Ok(Self::Secret),
            _ => Err(ParseEnumError {
                expected: "connection kind",
                got: s.to_string(),
            }),
        }
    }
}

/// An edge of the dungeon graph.
///
/// Stored as `source`/`target`, but logically unordered: every lookup goes
/// through [`Connection::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub kind: ConnectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Room holding the clue that reveals a secret passage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue_room: Option<String>,
}

impl Connection {
    /// A bare connection with no description or clue.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: ConnectionKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            description: None,
            clue_room: None,
        }
    }

    /// Direction-agnostic endpoint key.
    #[must_use]
    pub fn key(&self) -> PairKey<'_> {
        pair_key(&self.source, &self.target)
    }

    /// `true` if `room_id` is either endpoint.
    #[must_use]
    pub fn touches(&self, room_id: &str) -> bool {
        self.source == room_id || self.target == room_id
    }

    /// The endpoint opposite `room_id`, if `room_id` is an endpoint.
    #[must_use]
    pub fn other_end(&self, room_id: &str) -> Option<&str> {
        if self.source == room_id {
            Some(&self.target)
        } else if self.target == room_id {
            Some(&self.source)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The clue room, only when the passage is secret.
    #[must_use]
    pub fn effective_clue_room(&self) -> Option<&str> {
        match self.kind {
            ConnectionKind::Secret => self.clue_room.as_deref(),
            _ => None,
        }
    }
}
