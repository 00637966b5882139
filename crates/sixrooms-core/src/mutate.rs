//! Graph mutations.
//!
//! # Overview
//!
//! Every operation here is pure: it borrows the current [`Graph`] and returns
//! a new one. Two kinds of operation exist:
//!
//! - **Field edits** ([`update_room`], [`update_connection`],
//!   [`add_connection`]) touch a single room or connection.
//! - **Splices** ([`attach_subdungeon`], [`explode_room`]) generate a fresh
//!   six-room unit and graft it onto the graph.
//!
//! # No-op semantics
//!
//! An id that is not in the graph, a self-connection, or a connection that
//! already exists is not an error. The input graph comes back unchanged and
//! the no-op is logged at `debug`. Editing surfaces only ever offer valid
//! ids, so an error path would never be exercised by a real author.
//!
//! # Provenance
//!
//! Rooms of a spliced unit carry the id of the room they were attached to or
//! replaced in [`Room::parent`]. Nothing traverses that tag.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GenerateError;
use crate::generate::{generate_unit, roll_connection_kind};
use crate::model::{Connection, ConnectionKind, Graph, Room};

// ---------------------------------------------------------------------------
// Field edits
// ---------------------------------------------------------------------------

/// Author-editable fields of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFields {
    pub label: String,
    pub content: String,
    pub entrance: bool,
}

impl From<&Room> for RoomFields {
    fn from(room: &Room) -> Self {
        Self {
            label: room.label.clone(),
            content: room.content.clone(),
            entrance: room.entrance,
        }
    }
}

/// Author-editable fields of a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionFields {
    pub kind: ConnectionKind,
    pub description: Option<String>,
    pub clue_room: Option<String>,
}

impl From<&Connection> for ConnectionFields {
    fn from(connection: &Connection) -> Self {
        Self {
            kind: connection.kind,
            description: connection.description.clone(),
            clue_room: connection.clue_room.clone(),
        }
    }
}

/// Replace the label, content and entrance flag of room `id`.
#[must_use]
#[instrument(skip(graph, fields))]
pub fn update_room(graph: &Graph, id: &str, fields: RoomFields) -> Graph {
    let mut next = graph.clone();
    let Some(room) = next.room_mut(id) else {
        debug!("update_room: no such room, ignoring");
        return next;
    };
    room.label = fields.label;
    room.content = fields.content;
    room.entrance = fields.entrance;
    next
}

/// Replace the kind, description and clue room of the connection joining
/// `a` and `b`, matched in either direction.
#[must_use]
#[instrument(skip(graph, fields))]
pub fn update_connection(graph: &Graph, a: &str, b: &str, fields: ConnectionFields) -> Graph {
    let mut next = graph.clone();
    let Some(index) = next.connection_index(a, b) else {
        debug!("update_connection: no such connection, ignoring");
        return next;
    };
    let connection = &mut next.connections[index];
    connection.kind = fields.kind;
    connection.description = fields.description;
    connection.clue_room = fields.clue_room;
    next
}

/// Join two existing rooms with a new connection.
///
/// No-op when `source == target`, when either room is missing, or when the
/// pair is already connected in either direction.
#[must_use]
#[instrument(skip(graph))]
pub fn add_connection(graph: &Graph, source: &str, target: &str, kind: ConnectionKind) -> Graph {
    if source == target {
        debug!("add_connection: self-connection, ignoring");
        return graph.clone();
    }
    if !graph.contains_room(source) || !graph.contains_room(target) {
        debug!("add_connection: unknown endpoint, ignoring");
        return graph.clone();
    }
    if graph.connection_between(source, target).is_some() {
        debug!("add_connection: pair already connected, ignoring");
        return graph.clone();
    }

    let mut next = graph.clone();
    next.connections.push(Connection::new(source, target, kind));
    next
}

// ---------------------------------------------------------------------------
// Splices
// ---------------------------------------------------------------------------

/// Result of [`explode_room`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    pub graph: Graph,
    /// Id of the room that now stands where the exploded room stood.
    /// `None` when the target did not exist and nothing changed.
    pub bridge_room: Option<String>,
}

/// Attach a fresh sub-dungeon to room `room_id` using a random layout.
///
/// # Errors
///
/// Propagates [`GenerateError`] from unit generation.
pub fn attach_subdungeon<R: Rng + ?Sized>(
    graph: &Graph,
    room_id: &str,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    attach_subdungeon_with(graph, room_id, None, rng)
}

/// Attach a fresh sub-dungeon to room `room_id`.
///
/// The new unit's rooms are tagged with `room_id` as provenance and have
/// their entrance flags cleared. One rolled connection joins `room_id` to
/// the unit's first room. The existing room is left untouched.
///
/// # Errors
///
/// Propagates [`GenerateError`] from unit generation.
#[instrument(skip(graph, rng))]
pub fn attach_subdungeon_with<R: Rng + ?Sized>(
    graph: &Graph,
    room_id: &str,
    layout: Option<usize>,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    if !graph.contains_room(room_id) {
        debug!("attach_subdungeon: no such room, ignoring");
        return Ok(graph.clone());
    }

    let taken = graph.referenced_ids();
    let unit = generate_unit(rng, layout, &taken)?;

    let mut next = graph.clone();
    let bridge_id = unit.rooms[0].id.clone();
    next.rooms.extend(unit.rooms.into_iter().map(|mut room| {
        room.parent = Some(room_id.to_string());
        room.entrance = false;
        room
    }));
    next.connections.extend(unit.connections);
    next.connections.push(Connection::new(
        room_id,
        bridge_id.as_str(),
        roll_connection_kind(rng),
    ));

    debug!(bridge = %bridge_id, "attached sub-dungeon");
    Ok(next)
}

/// Replace room `room_id` with a fresh sub-dungeon using a random layout.
///
/// # Errors
///
/// Propagates [`GenerateError`] from unit generation.
pub fn explode_room<R: Rng + ?Sized>(
    graph: &Graph,
    room_id: &str,
    rng: &mut R,
) -> Result<Explosion, GenerateError> {
    explode_room_with(graph, room_id, None, rng)
}

/// Replace room `room_id` with a fresh sub-dungeon.
///
/// The unit's first room becomes the bridge room: it takes over the
/// replaced room's label, content, entrance flag and provenance tag, and
/// every connection that touched the replaced room is re-created between
/// the bridge room and the same neighbour with identical kind, description
/// and clue room. The other five rooms are tagged with `room_id` and are
/// never entrances.
///
/// Two deliberate exceptions to "identical":
///
/// - A clue room equal to `room_id` would dangle once the room is gone, so
///   on every connection (re-created or not) it is rewritten to the bridge
///   room. Clues naming any other room are copied verbatim.
/// - The bridge room keeps the [`RoomContent`](crate::RoomContent) kind it
///   was stocked with, so the unit still holds one of each stock kind. Only
///   the author-facing `content` text is inherited.
///
/// A self-loop on `room_id` has no outside neighbour and is dropped.
///
/// # Errors
///
/// Propagates [`GenerateError`] from unit generation.
#[instrument(skip(graph, rng))]
pub fn explode_room_with<R: Rng + ?Sized>(
    graph: &Graph,
    room_id: &str,
    layout: Option<usize>,
    rng: &mut R,
) -> Result<Explosion, GenerateError> {
    let Some(original) = graph.room(room_id) else {
        debug!("explode_room: no such room, ignoring");
        return Ok(Explosion {
            graph: graph.clone(),
            bridge_room: None,
        });
    };

    let external: Vec<&Connection> = graph.connections_of(room_id).collect();

    let taken = graph.referenced_ids();
    let unit = generate_unit(rng, layout, &taken)?;
    let bridge_id = unit.rooms[0].id.clone();

    let mut rooms: Vec<Room> = graph
        .rooms
        .iter()
        .filter(|room| room.id != room_id)
        .cloned()
        .collect();
    for (pos, mut room) in unit.rooms.into_iter().enumerate() {
        if pos == 0 {
            room.label.clone_from(&original.label);
            room.content.clone_from(&original.content);
            room.entrance = original.entrance;
            room.parent.clone_from(&original.parent);
        } else {
            room.parent = Some(room_id.to_string());
            room.entrance = false;
        }
        rooms.push(room);
    }

    let mut connections: Vec<Connection> = graph
        .connections
        .iter()
        .filter(|c| !c.touches(room_id))
        .cloned()
        .collect();
    connections.extend(unit.connections);
    for edge in external {
        let Some(neighbor) = edge.other_end(room_id) else {
            continue;
        };
        if neighbor == room_id {
            debug!("explode_room: dropping self-loop on replaced room");
            continue;
        }
        connections.push(Connection {
            source: bridge_id.clone(),
            target: neighbor.to_string(),
            kind: edge.kind,
            description: edge.description.clone(),
            clue_room: edge.clue_room.clone(),
        });
    }
    for connection in &mut connections {
        if connection.clue_room.as_deref() == Some(room_id) {
            connection.clue_room = Some(bridge_id.clone());
        }
    }

    debug!(bridge = %bridge_id, "exploded room");
    Ok(Explosion {
        graph: Graph::new(rooms, connections),
        bridge_room: Some(bridge_id),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use crate::model::RoomContent;
    use rand::{SeedableRng, rngs::StdRng};

    fn room(id: &str) -> Room {
        Room::stocked(id, RoomContent::Empty)
    }

    /// `hub` joined to a, b, c with distinct metadata, plus a - b.
    fn star() -> Graph {
        let mut hub = room("hub");
        hub.label = "Great Hall".to_string();
        hub.content = "Banners and torches.".to_string();
        hub.entrance = true;

        let mut to_b = Connection::new("b", "hub", ConnectionKind::Secret);
        to_b.clue_room = Some("b".to_string());
        let mut to_c = Connection::new("hub", "c", ConnectionKind::Trapped);
        to_c.description = Some("Pressure plate".to_string());

        Graph::new(
            vec![hub, room("a"), room("b"), room("c")],
            vec![
                Connection::new("hub", "a", ConnectionKind::Open),
                to_b,
                to_c,
                Connection::new("a", "b", ConnectionKind::Closed),
            ],
        )
    }

    // -----------------------------------------------------------------------
    // Field edits
    // -----------------------------------------------------------------------

    #[test]
    fn update_room_replaces_fields() {
        let g = star();
        let next = update_room(
            &g,
            "a",
            RoomFields {
                label: "Armory".into(),
                content: "Racks of spears.".into(),
                entrance: true,
            },
        );
        let a = next.room("a").unwrap();
        assert_eq!(a.label, "Armory");
        assert_eq!(a.content, "Racks of spears.");
        assert!(a.entrance);
        assert_eq!(a.kind, RoomContent::Empty);
        // input untouched
        assert_eq!(g.room("a").unwrap().label, "");
    }

    #[test]
    fn update_room_unknown_id_is_noop() {
        let g = star();
        assert_eq!(update_room(&g, "nope", RoomFields::default()), g);
    }

    #[test]
    fn update_connection_matches_reversed_pair() {
        let g = star();
        let next = update_connection(
            &g,
            "hub",
            "b",
            ConnectionFields {
                kind: ConnectionKind::Hazardous,
                description: Some("Flooded".into()),
                clue_room: None,
            },
        );
        let c = next.connection_between("b", "hub").unwrap();
        assert_eq!(c.kind, ConnectionKind::Hazardous);
        assert_eq!(c.description.as_deref(), Some("Flooded"));
        assert!(c.clue_room.is_none());
        // stored direction is kept
        assert_eq!(c.source, "b");
    }

    #[test]
    fn update_connection_unknown_pair_is_noop() {
        let g = star();
        assert_eq!(
            update_connection(&g, "b", "c", ConnectionFields::default()),
            g
        );
    }

    #[test]
    fn add_connection_appends_bare_connection() {
        let g = star();
        let next = add_connection(&g, "c", "a", ConnectionKind::Closed);
        assert_eq!(next.connections.len(), g.connections.len() + 1);
        let added = next.connections.last().unwrap();
        assert_eq!((added.source.as_str(), added.target.as_str()), ("c", "a"));
        assert_eq!(added.kind, ConnectionKind::Closed);
        assert!(added.description.is_none());
    }

    #[test]
    fn add_connection_degenerate_requests_are_noops() {
        let g = star();
        assert_eq!(add_connection(&g, "a", "a", ConnectionKind::Open), g);
        assert_eq!(add_connection(&g, "a", "hub", ConnectionKind::Secret), g);
        assert_eq!(add_connection(&g, "a", "ghost", ConnectionKind::Open), g);
    }

    // -----------------------------------------------------------------------
    // Attach
    // -----------------------------------------------------------------------

    #[test]
    fn attach_adds_unit_and_bridge_connection() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(10);
        let next = attach_subdungeon(&g, "c", &mut rng).unwrap();

        assert_eq!(next.rooms.len(), g.rooms.len() + 6);
        assert_eq!(next.connections.len(), g.connections.len() + 7);
        assert_eq!(next.room("c"), g.room("c"));

        let added = &next.rooms[g.rooms.len()..];
        for r in added {
            assert_eq!(r.parent.as_deref(), Some("c"));
            assert!(!r.entrance);
        }
        assert!(next.connection_between("c", &added[0].id).is_some());
        assert!(next.validate().is_empty());
    }

    #[test]
    fn attach_to_unknown_room_is_noop() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(attach_subdungeon(&g, "ghost", &mut rng).unwrap(), g);
    }

    #[test]
    fn attach_rejects_unknown_layout() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(10);
        assert!(attach_subdungeon_with(&g, "a", Some(500), &mut rng).is_err());
    }

    // -----------------------------------------------------------------------
    // Explode
    // -----------------------------------------------------------------------

    #[test]
    fn explode_preserves_external_connections() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(20);
        let Explosion { graph, bridge_room } = explode_room(&g, "hub", &mut rng).unwrap();
        let bridge = bridge_room.unwrap();

        assert!(graph.room("hub").is_none());
        assert!(graph.connections.iter().all(|c| !c.touches("hub")));

        for neighbor in ["a", "b", "c"] {
            let before = g.connection_between("hub", neighbor).unwrap();
            let after = graph.connection_between(&bridge, neighbor).unwrap();
            assert_eq!(after.kind, before.kind);
            assert_eq!(after.description, before.description);
            assert_eq!(after.clue_room, before.clue_room);
        }
        assert!(graph.connection_between("a", "b").is_some());
        assert!(graph.validate().is_empty());
    }

    #[test]
    fn explode_bridge_inherits_identity_fields() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(21);
        let out = explode_room(&g, "hub", &mut rng).unwrap();
        let bridge = out.graph.room(out.bridge_room.as_deref().unwrap()).unwrap();
        assert_eq!(bridge.label, "Great Hall");
        assert_eq!(bridge.content, "Banners and torches.");
        assert!(bridge.entrance);
        assert!(bridge.parent.is_none());

        let others: Vec<&Room> = out
            .graph
            .rooms
            .iter()
            .filter(|r| r.parent.as_deref() == Some("hub"))
            .collect();
        assert_eq!(others.len(), 5);
        assert!(others.iter().all(|r| !r.entrance));

        // The bridge keeps its stocked kind; only the text is inherited.
        let unit_kinds: Vec<RoomContent> = others
            .iter()
            .map(|r| r.kind)
            .chain(std::iter::once(bridge.kind))
            .collect();
        for kind in [
            RoomContent::MonsterTreasure,
            RoomContent::Monster,
            RoomContent::Treasure,
        ] {
            assert_eq!(unit_kinds.iter().filter(|&&k| k == kind).count(), 1, "{kind}");
        }
    }

    #[test]
    fn explode_repoints_clues_at_removed_room() {
        let mut g = star();
        g.connections[3].kind = ConnectionKind::Secret;
        g.connections[3].clue_room = Some("hub".to_string());
        let mut rng = StdRng::seed_from_u64(22);
        let out = explode_room(&g, "hub", &mut rng).unwrap();
        let bridge = out.bridge_room.unwrap();
        let ab = out.graph.connection_between("a", "b").unwrap();
        assert_eq!(ab.clue_room.as_deref(), Some(bridge.as_str()));
    }

    #[test]
    fn explode_unknown_room_is_noop() {
        let g = star();
        let mut rng = StdRng::seed_from_u64(23);
        let out = explode_room(&g, "ghost", &mut rng).unwrap();
        assert_eq!(out.graph, g);
        assert!(out.bridge_room.is_none());
    }

    #[test]
    fn explode_inside_generated_unit_keeps_room_count() {
        let mut rng = StdRng::seed_from_u64(24);
        let g = generate(&mut rng, None).unwrap();
        let target = g.rooms[2].id.clone();
        let out = explode_room(&g, &target, &mut rng).unwrap();
        assert_eq!(out.graph.rooms.len(), 11);
        assert!(out.graph.room(&target).is_none());
        assert!(out.graph.validate().is_empty());
    }

    #[test]
    fn explode_drops_self_loop_on_replaced_room() {
        let mut g = star();
        g.connections.push(Connection::new("hub", "hub", ConnectionKind::Open));
        let mut rng = StdRng::seed_from_u64(25);
        let out = explode_room(&g, "hub", &mut rng).unwrap();
        let bridge = out.bridge_room.unwrap();

        assert_eq!(out.graph.connection_between(&bridge, &bridge), None);
        let outside: Vec<&str> = out
            .graph
            .neighbors(&bridge)
            .into_iter()
            .filter(|n| ["a", "b", "c"].contains(n))
            .collect();
        assert_eq!(outside.len(), 3);
        assert!(out.graph.validate().is_empty());
    }

    #[test]
    fn removed_room_id_is_never_minted_again() {
        // Re-seeding every splice replays the generator's id stream, the
        // same way a fixed seed in config does across CLI runs.
        let g = generate(&mut StdRng::seed_from_u64(1), None).unwrap();
        let first = g.rooms[2].id.clone();
        let once = explode_room(&g, &first, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(once.graph.room(&first).is_none());

        let second = once.graph.rooms[0].id.clone();
        let twice = explode_room(&once.graph, &second, &mut StdRng::seed_from_u64(1)).unwrap();
        let bridge = twice.bridge_room.unwrap();
        let grown =
            attach_subdungeon(&twice.graph, &bridge, &mut StdRng::seed_from_u64(1)).unwrap();

        for removed in [&first, &second] {
            assert!(grown.room(removed).is_none(), "{removed} was minted again");
        }
        let tagged_first = grown
            .rooms
            .iter()
            .filter(|r| r.parent.as_deref() == Some(first.as_str()))
            .count();
        assert_eq!(tagged_first, 5);
        assert!(grown.validate().is_empty());
    }

    #[test]
    fn splices_avoid_ids_mentioned_only_in_tags() {
        let mut g = generate(&mut StdRng::seed_from_u64(2), Some(0)).unwrap();
        // Ids the same seed would mint, kept alive only as tags and a clue.
        let replay = generate(&mut StdRng::seed_from_u64(2), Some(0)).unwrap();
        for (room, old) in g.rooms.iter_mut().zip(&replay.rooms) {
            room.id = format!("{}-live", old.id);
            room.parent = Some(old.id.clone());
        }
        let g = Graph::new(g.rooms, Vec::new());
        let anchor = g.rooms[0].id.clone();

        let out =
            attach_subdungeon_with(&g, &anchor, Some(0), &mut StdRng::seed_from_u64(2)).unwrap();
        for old in &replay.rooms {
            assert!(out.room(&old.id).is_none(), "{} revived", old.id);
        }
    }
}
