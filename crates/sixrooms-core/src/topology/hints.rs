use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{find_bridges, shortest_depths};
use crate::model::Graph;
use crate::model::normalize::{OwnedPairKey, owned_pair_key};

/// Topology annotations for one graph, ready for a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutHints {
    /// Bridge connections as normalized endpoint pairs.
    pub bridges: BTreeSet<OwnedPairKey>,
    /// Depth of every room reachable from an entrance.
    pub depths: BTreeMap<String, usize>,
}

impl LayoutHints {
    /// Compute bridges and entrance depths for `graph`.
    #[must_use]
    #[instrument(skip_all, fields(rooms = graph.rooms.len()))]
    pub fn for_graph(graph: &Graph) -> Self {
        let edges: Vec<(&str, &str)> = graph
            .connections
            .iter()
            .map(|c| (c.source.as_str(), c.target.as_str()))
            .collect();

        let bridges = find_bridges(graph.room_ids(), &edges)
            .into_iter()
            .map(|position| {
                let (a, b) = edges[position];
                owned_pair_key(a, b)
            })
            .collect();

        let roots: Vec<&str> = graph.entrances().map(|room| room.id.as_str()).collect();
        let depths = shortest_depths(graph.room_ids(), &edges, roots)
            .into_iter()
            .collect();

        Self { bridges, depths }
    }

    #[must_use]
    pub fn is_bridge(&self, a: &str, b: &str) -> bool {
        self.bridges.contains(&owned_pair_key(a, b))
    }

    #[must_use]
    pub fn depth(&self, room_id: &str) -> Option<usize> {
        self.depths.get(room_id).copied()
    }
}
