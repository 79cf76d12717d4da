use tracing::debug;

use crate::error::Error;
use crate::graph::{Graph, NodeKind, UNREACHED};
use crate::heap::IndexedHeap;

/// Tag every node reachable from `root` with its hop distance and a
/// back-pointer one hop closer to the root.
///
/// Single-source relaxation with a decrease-key queue (Dijkstra over
/// uniform weight-1 edges, so the pop order is breadth-first). Runs to
/// completion; afterwards the distances and predecessors form a
/// shortest-path tree and the graph can be queried read-only any number
/// of times. Re-running with a different root re-tags the whole graph.
///
/// Fails with `RootNotFound` if `root` names no node, and with
/// `NotAnActor` if it names a movie: path reconstruction walks
/// predecessors two hops at a time and needs the root on the actor side
/// of the partition.
pub fn compute_shortest_paths(graph: &mut Graph, root: &str) -> Result<(), Error> {
    let root_id = graph
        .resolve(root)
        .ok_or_else(|| Error::RootNotFound(root.to_string()))?;
    if graph.node(root_id).map(|n| n.kind) != Some(NodeKind::Actor) {
        return Err(Error::NotAnActor(root.to_string()));
    }

    let node_count = graph.node_count();
    let mut queue = IndexedHeap::with_capacity(node_count);
    for id in 0..node_count {
        let distance = if id == root_id { 0 } else { UNREACHED };
        graph.set_distance(id, distance);
        graph.set_predecessor(id, None);
        queue.push(id, distance);
    }

    while let Some((cur, distance)) = queue.pop_min() {
        if distance == UNREACHED {
            // Everything still queued is outside the root's component.
            continue;
        }
        let next = distance + 1;
        for nb in graph.neighbors(cur).to_vec() {
            if next < graph.distance(nb) {
                graph.set_predecessor(nb, Some(cur));
                graph.set_distance(nb, next);
                queue.decrease(nb, next)?;
            }
        }
    }

    let reached = (0..node_count)
        .filter(|&id| graph.distance(id) != UNREACHED)
        .count();
    debug!(root, nodes = node_count, reached, "shortest-path pass complete");
    Ok(())
}
