//! Bridge-edge detection.
//!
//! An edge is a bridge when removing it leaves its two endpoints in
//! different components. Each edge is tested on its own: hide that single
//! edge, breadth-first search from one endpoint, and see whether the other
//! endpoint is still reached. That costs O(E·(V+E)), which is nothing at
//! dungeon scale.
//!
//! Self-loops are never bridges. A pair joined by parallel edges has no
//! bridge between them, since each edge is an alternate path for the other.

use std::collections::BTreeSet;

use petgraph::visit::{Bfs, EdgeFiltered, EdgeRef};
use tracing::{instrument, trace};

use super::RoomGraph;

/// Positions (into `edges`) of every bridge edge.
#[must_use]
#[instrument(skip_all, fields(edges = edges.len()))]
pub fn find_bridges<'a, I>(nodes: I, edges: &[(&'a str, &'a str)]) -> BTreeSet<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let rg = RoomGraph::build(nodes, edges);
    let mut bridges = BTreeSet::new();

    for edge in rg.graph.edge_references() {
        let (a, b) = (edge.source(), edge.target());
        if a == b {
            continue;
        }
        let hidden = edge.id();
        let without = EdgeFiltered::from_fn(&rg.graph, |e| e.id() != hidden);

        let mut bfs = Bfs::new(&without, a);
        let mut reached = false;
        while let Some(node) = bfs.next(&without) {
            if node == b {
                reached = true;
                break;
            }
        }

        if !reached {
            trace!(
                position = *edge.weight(),
                a = rg.node_id(a),
                b = rg.node_id(b),
                "bridge"
            );
            bridges.insert(*edge.weight());
        }
    }

    bridges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_edges_are_all_bridges() {
        let got = find_bridges(["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(got, BTreeSet::from([0, 1]));
    }

    #[test]
    fn triangle_has_no_bridges() {
        let got = find_bridges(["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(got.is_empty());
    }

    #[test]
    fn self_loop_is_never_a_bridge() {
        let got = find_bridges(["a", "b"], &[("a", "a"), ("a", "b")]);
        assert_eq!(got, BTreeSet::from([1]));
    }

    #[test]
    fn parallel_edges_are_not_bridges() {
        let got = find_bridges(["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]);
        assert_eq!(got, BTreeSet::from([2]));
    }

    #[test]
    fn empty_graph_has_no_bridges() {
        assert!(find_bridges(std::iter::empty(), &[]).is_empty());
    }
}
