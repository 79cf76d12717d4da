use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Dense node identifier, an index into the graph's node arena.
pub type NodeId = usize;

/// Distance sentinel for nodes the shortest-path pass never reached.
pub const UNREACHED: u32 = u32::MAX;

/// Which side of the bipartite graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Actor,
    Movie,
}

/// One input group: a movie and the actors credited in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub title: String,
    #[serde(default)]
    pub cast: Vec<String>,
}

/// One actor or movie, with its adjacency and shortest-path tags.
///
/// `neighbors` is symmetric and deduplicated; it never changes after
/// construction. `distance` and `predecessor` are written only by the
/// shortest-path pass.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub name: String,
    neighbors: Vec<NodeId>,
    pub(crate) distance: u32,
    pub(crate) predecessor: Option<NodeId>,
}

impl Node {
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// In-memory bipartite collaboration graph.
///
/// The graph owns all nodes in an arena `Vec`; adjacency is expressed as
/// `NodeId` indices resolved through the graph, so mutual neighbor links
/// carry no ownership cycles. Actor and movie names share one namespace.
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Build a graph from cast records: one node per movie, one per actor,
    /// an edge between a movie and each of its credited actors.
    ///
    /// Building twice from the same records yields identical node sets and
    /// adjacency. A record with an empty cast adds an isolated movie node.
    pub fn from_records<I>(records: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CastRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            let movie = graph.ensure_node(NodeKind::Movie, &record.title);
            for actor in &record.cast {
                let actor = graph.ensure_node(NodeKind::Actor, actor);
                graph.connect(movie, actor)?;
            }
        }
        Ok(graph)
    }

    /// Return the node with this name, creating it if absent. Idempotent:
    /// re-mentioning an existing name returns the existing node regardless
    /// of the kind argument (an actor/movie name collision is out of scope).
    pub fn ensure_node(&mut self, kind: NodeKind, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            name: name.to_string(),
            neighbors: Vec::new(),
            distance: UNREACHED,
            predecessor: None,
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Add each node as a neighbor of the other. Connecting two nodes that
    /// are already adjacent is a no-op, as is connecting a node to itself.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), Error> {
        if a >= self.nodes.len() {
            return Err(Error::InvalidConnection(a));
        }
        if b >= self.nodes.len() {
            return Err(Error::InvalidConnection(b));
        }
        if a == b {
            return Ok(());
        }
        // Adjacency is always mirrored, so one side's check covers both.
        if !self.nodes[a].neighbors.contains(&b) {
            self.nodes[a].neighbors.push(b);
            self.nodes[b].neighbors.push(a);
        }
        Ok(())
    }

    /// Look up a node by name.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Neighbors of a node. Empty for an id not in the graph.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Distance tagged by the shortest-path pass; `UNREACHED` before the
    /// pass runs, for nodes it never reached, and for unknown ids.
    pub fn distance(&self, id: NodeId) -> u32 {
        self.nodes.get(id).map(|n| n.distance).unwrap_or(UNREACHED)
    }

    /// Back-pointer one hop closer to the root; absent for the root and
    /// for never-reached nodes.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.predecessor)
    }

    pub(crate) fn set_distance(&mut self, id: NodeId, distance: u32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.distance = distance;
        }
    }

    pub(crate) fn set_predecessor(&mut self, id: NodeId, predecessor: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.predecessor = predecessor;
        }
    }

    /// Iterate all nodes with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, cast: &[&str]) -> CastRecord {
        CastRecord {
            title: title.to_string(),
            cast: cast.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<CastRecord> {
        vec![
            record("Movie A", &["Kevin Bacon", "Alice"]),
            record("Movie B", &["Alice", "Bob"]),
            record("Movie C", &["Dave", "Eve"]),
        ]
    }

    #[test]
    fn test_ensure_node_idempotent() {
        let mut g = Graph::new();
        let a = g.ensure_node(NodeKind::Actor, "Alice");
        let b = g.ensure_node(NodeKind::Actor, "Alice");
        assert_eq!(a, b);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_connect_symmetric() {
        let g = Graph::from_records(sample()).unwrap();
        for (id, node) in g.nodes() {
            for &nb in node.neighbors() {
                assert!(
                    g.neighbors(nb).contains(&id),
                    "edge {} / {} not mirrored",
                    id,
                    nb
                );
            }
        }
    }

    #[test]
    fn test_bipartite_by_construction() {
        let g = Graph::from_records(sample()).unwrap();
        for (id, node) in g.nodes() {
            for &nb in node.neighbors() {
                assert_ne!(
                    node.kind,
                    g.node(nb).unwrap().kind,
                    "nodes {} and {} share a kind",
                    id,
                    nb
                );
            }
        }
    }

    #[test]
    fn test_connect_dedupes() {
        let mut g = Graph::new();
        let m = g.ensure_node(NodeKind::Movie, "Movie A");
        let a = g.ensure_node(NodeKind::Actor, "Alice");
        g.connect(m, a).unwrap();
        g.connect(m, a).unwrap();
        g.connect(a, m).unwrap();
        assert_eq!(g.neighbors(m), &[a]);
        assert_eq!(g.neighbors(a), &[m]);
    }

    #[test]
    fn test_connect_self_is_noop() {
        let mut g = Graph::new();
        let a = g.ensure_node(NodeKind::Actor, "Alice");
        g.connect(a, a).unwrap();
        assert!(g.neighbors(a).is_empty());
    }

    #[test]
    fn test_connect_missing_node() {
        let mut g = Graph::new();
        let a = g.ensure_node(NodeKind::Actor, "Alice");
        assert_eq!(g.connect(a, 99), Err(Error::InvalidConnection(99)));
        assert_eq!(g.connect(99, a), Err(Error::InvalidConnection(99)));
        assert!(g.neighbors(a).is_empty());
    }

    #[test]
    fn test_duplicate_credit_single_edge() {
        let g = Graph::from_records(vec![record("Movie A", &["Alice", "Alice"])]).unwrap();
        let m = g.resolve("Movie A").unwrap();
        assert_eq!(g.neighbors(m).len(), 1);
    }

    #[test]
    fn test_empty_cast_isolated_movie() {
        let g = Graph::from_records(vec![record("Movie A", &[])]).unwrap();
        let m = g.resolve("Movie A").unwrap();
        assert_eq!(g.node(m).unwrap().kind, NodeKind::Movie);
        assert!(g.neighbors(m).is_empty());
    }

    #[test]
    fn test_build_idempotent() {
        let g1 = Graph::from_records(sample()).unwrap();
        let g2 = Graph::from_records(sample()).unwrap();
        assert_eq!(g1.node_count(), g2.node_count());
        assert_eq!(g1.edge_count(), g2.edge_count());
        for (id, node) in g1.nodes() {
            let other = g2.resolve(&node.name).unwrap();
            assert_eq!(g2.node(other).unwrap().kind, node.kind);
            let mut mine: Vec<&str> = node
                .neighbors()
                .iter()
                .map(|&nb| g1.node(nb).unwrap().name.as_str())
                .collect();
            let mut theirs: Vec<&str> = g2
                .neighbors(other)
                .iter()
                .map(|&nb| g2.node(nb).unwrap().name.as_str())
                .collect();
            mine.sort_unstable();
            theirs.sort_unstable();
            assert_eq!(mine, theirs, "adjacency differs for node {}", id);
        }
    }

    #[test]
    fn test_shared_actor_across_movies() {
        let g = Graph::from_records(sample()).unwrap();
        let alice = g.resolve("Alice").unwrap();
        assert_eq!(g.neighbors(alice).len(), 2);
    }

    #[test]
    fn test_fresh_nodes_unreached() {
        let g = Graph::from_records(sample()).unwrap();
        for (id, _) in g.nodes() {
            assert_eq!(g.distance(id), UNREACHED);
            assert_eq!(g.predecessor(id), None);
        }
    }

    #[test]
    fn test_counts() {
        let g = Graph::from_records(sample()).unwrap();
        // 3 movies + 5 actors, 2 edges per two-actor movie
        assert_eq!(g.node_count(), 8);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_cast_record_json() {
        let rec: CastRecord = serde_json::from_str(
            r#"{"title": "Movie A", "cast": ["Kevin Bacon", "Alice"]}"#,
        )
        .unwrap();
        assert_eq!(rec.title, "Movie A");
        assert_eq!(rec.cast.len(), 2);

        let rec: CastRecord = serde_json::from_str(r#"{"title": "Movie B"}"#).unwrap();
        assert!(rec.cast.is_empty());
    }
}
