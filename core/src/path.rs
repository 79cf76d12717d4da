use serde::Serialize;

use crate::error::Error;
use crate::graph::{Graph, NodeId, NodeKind, UNREACHED};

/// One step of a separation chain: the actor and the movie that links
/// them to the next actor toward the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathHop {
    pub actor: String,
    pub movie: String,
}

/// A reconstructed chain from a queried actor back to the root.
///
/// `chain` is ordered from the queried actor toward the root and has
/// `separation` entries; it is empty when the queried actor is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub name: String,
    pub root: String,
    pub separation: u32,
    pub chain: Vec<PathHop>,
}

/// Reconstruct the shortest chain from `name` back to the root tagged by
/// [`compute_shortest_paths`](crate::compute_shortest_paths).
///
/// Walks predecessor links two hops at a time (actor → linking movie →
/// next actor), which the bipartite construction and the actor-side root
/// guarantee to be well-formed. `UnknownEntity` for a name never added,
/// `NoPath` when the entity has no finite chain to the root, `NotAnActor`
/// for a reached movie (separations are measured between actors).
pub fn query(graph: &Graph, name: &str) -> Result<PathResult, Error> {
    let id = graph
        .resolve(name)
        .ok_or_else(|| Error::UnknownEntity(name.to_string()))?;
    let distance = graph.distance(id);
    if distance == UNREACHED {
        return Err(Error::NoPath(name.to_string()));
    }
    if graph.node(id).map(|n| n.kind) != Some(NodeKind::Actor) {
        return Err(Error::NotAnActor(name.to_string()));
    }

    let mut chain = Vec::with_capacity((distance / 2) as usize);
    let mut cur = id;
    while graph.distance(cur) > 0 {
        let (movie, prev) = step_back(graph, cur);
        chain.push(PathHop {
            actor: node_name(graph, cur),
            movie: node_name(graph, movie),
        });
        cur = prev;
    }

    Ok(PathResult {
        name: name.to_string(),
        root: node_name(graph, cur),
        separation: distance / 2,
        chain,
    })
}

/// Follow two predecessor hops: the linking movie, then the next actor.
///
/// Both links exist for every reached non-root actor: the graph is
/// bipartite and the root is an actor, so this asserts rather than
/// returning an error.
fn step_back(graph: &Graph, actor: NodeId) -> (NodeId, NodeId) {
    let Some(movie) = graph.predecessor(actor) else {
        unreachable!("reached node {} has no predecessor", actor);
    };
    let Some(prev) = graph.predecessor(movie) else {
        unreachable!("linking movie {} has no predecessor", movie);
    };
    (movie, prev)
}

fn node_name(graph: &Graph, id: NodeId) -> String {
    graph
        .node(id)
        .map(|n| n.name.clone())
        .unwrap_or_default()
}
