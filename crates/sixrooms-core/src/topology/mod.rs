//! Read-only topology analysis for dungeon graphs.
//!
//! # Overview
//!
//! Two independent annotations feed layout and rendering decisions:
//!
//! ```text
//! (node ids, edge list)
//!        ↓  RoomGraph::build()
//! RoomGraph (undirected, edge weight = input position)
//!        ├─ bridges::find_bridges()    -> edges whose removal disconnects
//!        └─ depth::shortest_depths()   -> BFS distance from the nearest root
//! ```
//!
//! [`hints::LayoutHints`] bundles both for a [`crate::model::Graph`].
//!
//! Nothing here mutates its input and nothing fails: an empty graph yields
//! empty results.

#![allow(clippy::module_name_repetitions)]

pub mod bridges;
pub mod depth;
pub mod hints;

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

pub use bridges::find_bridges;
pub use depth::shortest_depths;
pub use hints::LayoutHints;

// ---------------------------------------------------------------------------
// RoomGraph
// ---------------------------------------------------------------------------

/// Undirected petgraph view of a node set and edge list.
///
/// Each edge's weight is its position in the input edge list, so results
/// computed on the petgraph side map back to the caller's connections.
/// Parallel edges and self-loops are kept as given.
#[derive(Debug)]
pub struct RoomGraph {
    pub graph: UnGraph<String, usize>,
    /// Mapping from room id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// Node ids in insertion order.
    pub order: Vec<NodeIndex>,
}

impl RoomGraph {
    /// Build the view.
    ///
    /// Edge endpoints missing from `nodes` are added as implicit nodes after
    /// the explicit ones.
    #[must_use]
    pub fn build<'a, I>(nodes: I, edges: &[(&'a str, &'a str)]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut graph = UnGraph::<String, usize>::default();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut order = Vec::new();

        let mut intern = |graph: &mut UnGraph<String, usize>, id: &str| -> NodeIndex {
            if let Some(&idx) = node_map.get(id) {
                return idx;
            }
            let idx = graph.add_node(id.to_string());
            node_map.insert(id.to_string(), idx);
            order.push(idx);
            idx
        };

        for id in nodes {
            intern(&mut graph, id);
        }
        for (position, &(a, b)) in edges.iter().enumerate() {
            let ia = intern(&mut graph, a);
            let ib = intern(&mut graph, b);
            graph.add_edge(ia, ib, position);
        }

        Self {
            graph,
            node_map,
            order,
        }
    }

    #[must_use]
    pub fn node_id(&self, idx: NodeIndex) -> &str {
        self.graph.node_weight(idx).map_or("", String::as_str)
    }
}
