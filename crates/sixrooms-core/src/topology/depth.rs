//! Multi-source shortest depth.
//!
//! Every root starts on the frontier at depth 0 and the search proceeds
//! breadth-first, so the first time a node is discovered is its true
//! minimum distance to any root, independent of root order.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::{debug, instrument};

use super::RoomGraph;

/// Edge-count distance from the nearest root to every reachable node.
///
/// Roots not present among the nodes are ignored. When no valid root is
/// left, the first node is used instead. Nodes no root can reach are absent
/// from the result: their depth is undefined, not zero.
#[must_use]
#[instrument(skip_all, fields(edges = edges.len()))]
pub fn shortest_depths<'a, I, R>(
    nodes: I,
    edges: &[(&'a str, &'a str)],
    roots: R,
) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let rg = RoomGraph::build(nodes, edges);

    let mut starts: Vec<NodeIndex> = roots
        .into_iter()
        .filter_map(|root| rg.node_map.get(root.as_ref()).copied())
        .collect();
    if starts.is_empty() {
        let Some(&first) = rg.order.first() else {
            return HashMap::new();
        };
        debug!(fallback = rg.node_id(first), "no valid roots");
        starts.push(first);
    }

    let mut depth: HashMap<String, usize> = HashMap::with_capacity(rg.order.len());
    let mut visited: HashSet<NodeIndex> = HashSet::with_capacity(rg.order.len());
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();

    for start in starts {
        if visited.insert(start) {
            queue.push_back((start, 0));
        }
    }

    while let Some((current, d)) = queue.pop_front() {
        depth.insert(rg.node_id(current).to_string(), d);
        for next in rg.graph.neighbors(current) {
            if visited.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }

    depth
}
