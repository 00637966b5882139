//! Read-only traversal for exporters.
//!
//! [`outline`] walks a [`Graph`] in a stable, human-friendly order: entrance
//! rooms first, then by display label, with the room id as a final
//! tiebreak. Each room lists every connection touching it, whichever end
//! stored it, sorted by the neighbour's display label.

use serde::{Deserialize, Serialize};

use crate::model::{ConnectionKind, Graph, Room, RoomContent};

/// One room of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRoom {
    pub id: String,
    pub label: String,
    pub kind: RoomContent,
    pub content: String,
    pub entrance: bool,
    pub passages: Vec<Passage>,
}

/// A connection seen from one of its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub to: String,
    pub to_label: String,
    pub kind: ConnectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the clue to a secret passage is found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<ClueRef>,
}

/// A resolved clue-room reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRef {
    pub room: String,
    pub label: String,
}

/// Build the export outline of `graph`.
#[must_use]
pub fn outline(graph: &Graph) -> Vec<OutlineRoom> {
    let label_of = |id: &str| graph.display_label(id).unwrap_or(id).to_string();

    let mut rooms: Vec<&Room> = graph.rooms.iter().collect();
    rooms.sort_by(|a, b| {
        b.entrance
            .cmp(&a.entrance)
            .then_with(|| a.display_label().cmp(b.display_label()))
            .then_with(|| a.id.cmp(&b.id))
    });

    rooms
        .into_iter()
        .map(|room| {
            let mut passages: Vec<Passage> = graph
                .connections_of(&room.id)
                .filter_map(|c| {
                    let to = c.other_end(&room.id)?;
                    Some(Passage {
                        to: to.to_string(),
                        to_label: label_of(to),
                        kind: c.kind,
                        description: c.description.clone(),
                        clue: c.effective_clue_room().map(|clue| ClueRef {
                            room: clue.to_string(),
                            label: label_of(clue),
                        }),
                    })
                })
                .collect();
            passages.sort_by(|a, b| a.to_label.cmp(&b.to_label).then_with(|| a.to.cmp(&b.to)));

            OutlineRoom {
                id: room.id.clone(),
                label: room.display_label().to_string(),
                kind: room.kind,
                content: room.content.clone(),
                entrance: room.entrance,
                passages,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Connection;

    fn labeled(id: &str, label: &str, entrance: bool) -> Room {
        let mut room = Room::stocked(id, RoomContent::Empty);
        room.label = label.to_string();
        room.entrance = entrance;
        room
    }

    fn sample() -> Graph {
        let mut secret = Connection::new("r3", "r1", ConnectionKind::Secret);
        secret.clue_room = Some("r2".to_string());
        let mut closed = Connection::new("r1", "r2", ConnectionKind::Closed);
        closed.clue_room = Some("r3".to_string());
        closed.description = Some("Oak door".to_string());

        Graph::new(
            vec![
                labeled("r1", "Crypt", false),
                labeled("r2", "Well", true),
                labeled("r3", "", false),
                labeled("r4", "Armory", true),
            ],
            vec![closed, secret],
        )
    }

    #[test]
    fn entrances_come_first_then_labels() {
        let ids: Vec<String> = outline(&sample()).into_iter().map(|r| r.id).collect();
        // r3 has no label and sorts by its id, "r3" > "Crypt".
        assert_eq!(ids, vec!["r4", "r2", "r1", "r3"]);
    }

    #[test]
    fn passages_are_found_from_either_end() {
        let out = outline(&sample());
        let crypt = out.iter().find(|r| r.id == "r1").unwrap();
        let to: Vec<&str> = crypt.passages.iter().map(|p| p.to.as_str()).collect();
        // "Well" sorts before the unlabeled "r3".
        assert_eq!(to, vec!["r2", "r3"]);
        assert_eq!(crypt.passages[0].to_label, "Well");
        assert_eq!(crypt.passages[0].description.as_deref(), Some("Oak door"));
    }

    #[test]
    fn clue_only_resolved_for_secret_passages() {
        let out = outline(&sample());
        let crypt = out.iter().find(|r| r.id == "r1").unwrap();
        let secret = &crypt.passages[1];
        assert_eq!(
            secret.clue,
            Some(ClueRef {
                room: "r2".into(),
                label: "Well".into()
            })
        );
        assert!(crypt.passages[0].clue.is_none());
    }

    #[test]
    fn unlabeled_room_uses_id_as_label() {
        let out = outline(&sample());
        assert!(out.iter().any(|r| r.id == "r3" && r.label == "r3"));
    }
}
