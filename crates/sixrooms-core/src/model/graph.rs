#![allow(clippy::module_name_repetitions)]

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalize::pair_key;
use super::{Connection, Room};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A dungeon: rooms plus the passages between them.
///
/// Graphs are values. Every mutating operation in [`crate::mutate`] takes a
/// `&Graph` and returns a new one; callers hold the "current" graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Graph {
    #[must_use]
    pub fn new(rooms: Vec<Room>, connections: Vec<Connection>) -> Self {
        Self { rooms, connections }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub(crate) fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    #[must_use]
    pub fn contains_room(&self, id: &str) -> bool {
        self.room(id).is_some()
    }

    /// Room identifiers in graph order.
    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|room| room.id.as_str())
    }

    /// Every identifier the graph still mentions: live rooms, provenance
    /// tags, connection endpoints and clue rooms.
    ///
    /// A removed room's id survives here through the tags of the unit that
    /// replaced it, so new ids minted against this set never revive it.
    #[must_use]
    pub fn referenced_ids(&self) -> HashSet<&str> {
        let mut ids: HashSet<&str> = self.room_ids().collect();
        ids.extend(self.rooms.iter().filter_map(|room| room.parent.as_deref()));
        for c in &self.connections {
            ids.insert(c.source.as_str());
            ids.insert(c.target.as_str());
            ids.extend(c.clue_room.as_deref());
        }
        ids
    }

    /// Display label for a room id, if the room exists.
    #[must_use]
    pub fn display_label(&self, id: &str) -> Option<&str> {
        self.room(id).map(Room::display_label)
    }

    /// Rooms flagged as entrances, in graph order.
    pub fn entrances(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.entrance)
    }

    /// The connection joining `a` and `b`, whichever way it was stored.
    #[must_use]
    pub fn connection_between(&self, a: &str, b: &str) -> Option<&Connection> {
        self.connection_index(a, b).map(|i| &self.connections[i])
    }

    pub(crate) fn connection_index(&self, a: &str, b: &str) -> Option<usize> {
        let wanted = pair_key(a, b);
        self.connections.iter().position(|c| c.key() == wanted)
    }

    /// Every connection touching `room_id`, regardless of stored direction.
    pub fn connections_of<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.connections.iter().filter(move |c| c.touches(room_id))
    }

    /// Rooms adjacent to `room_id`, in connection order.
    #[must_use]
    pub fn neighbors(&self, room_id: &str) -> Vec<&str> {
        self.connections
            .iter()
            .filter_map(|c| c.other_end(room_id))
            .collect()
    }

    /// Check every structural invariant of the model.
    ///
    /// Returns an empty vector for a well-formed graph. Graphs produced by
    /// the generator and mutator always validate; this is for graphs that
    /// arrive from outside (files, forms).
    #[must_use]
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        let mut ids: HashSet<&str> = HashSet::with_capacity(self.rooms.len());
        for room in &self.rooms {
            if !ids.insert(room.id.as_str()) {
                issues.push(GraphIssue::DuplicateRoomId {
                    room: room.id.clone(),
                });
            }
        }

        let mut pairs = HashSet::with_capacity(self.connections.len());
        for c in &self.connections {
            if c.is_self_loop() {
                issues.push(GraphIssue::SelfLoop {
                    room: c.source.clone(),
                });
            }
            for end in [&c.source, &c.target] {
                if !ids.contains(end.as_str()) {
                    issues.push(GraphIssue::DanglingEndpoint {
                        source: c.source.clone(),
                        target: c.target.clone(),
                        missing: end.clone(),
                    });
                }
            }
            if !pairs.insert(c.key()) {
                let (a, b) = c.key();
                issues.push(GraphIssue::ParallelConnection {
                    a: a.to_string(),
                    b: b.to_string(),
                });
            }
            if let Some(clue) = &c.clue_room {
                if !ids.contains(clue.as_str()) {
                    issues.push(GraphIssue::DanglingClue {
                        source: c.source.clone(),
                        target: c.target.clone(),
                        clue: clue.clone(),
                    });
                }
            }
        }

        issues
    }
}

// ---------------------------------------------------------------------------
// GraphIssue
// ---------------------------------------------------------------------------

/// A broken invariant found by [`Graph::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum GraphIssue {
    DuplicateRoomId {
        room: String,
    },
    DanglingEndpoint {
        source: String,
        target: String,
        missing: String,
    },
    ParallelConnection {
        a: String,
        b: String,
    },
    SelfLoop {
        room: String,
    },
    DanglingClue {
        source: String,
        target: String,
        clue: String,
    },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoomId { room } => write!(f, "room id '{room}' is used more than once"),
            Self::DanglingEndpoint {
                source,
                target,
                missing,
            } => write!(
                f,
                "connection {source} - {target} references missing room '{missing}'"
            ),
            Self::ParallelConnection { a, b } => {
                write!(f, "more than one connection between '{a}' and '{b}'")
            }
            Self::SelfLoop { room } => write!(f, "room '{room}' is connected to itself"),
            Self::DanglingClue {
                source,
                target,
                clue,
            } => write!(
                f,
                "connection {source} - {target} names missing clue room '{clue}'"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
