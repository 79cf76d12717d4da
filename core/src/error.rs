//! Error taxonomy for graph construction, tagging, and queries.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for costar-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by graph construction, the shortest-path pass, and
/// path queries.
///
/// `InvalidConnection`, `InvalidPriority`, and `NotQueued` indicate caller
/// bugs and abort the computation that raised them. The remaining variants
/// are lookup outcomes the caller is expected to handle and report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Attempt to link a node id that is not in the graph.
    #[error("cannot connect node {0}: no such node")]
    InvalidConnection(NodeId),

    /// Decrease-key asked to raise a priority instead of lowering it.
    #[error("decrease-key on node {node}: requested {requested}, already at {current}")]
    InvalidPriority {
        node: NodeId,
        current: u32,
        requested: u32,
    },

    /// Decrease-key on a node that is not in the queue (use-after-pop).
    #[error("decrease-key on node {0}: not in the queue")]
    NotQueued(NodeId),

    /// The requested root name is absent from the graph.
    #[error("root '{0}' is not in the graph")]
    RootNotFound(String),

    /// The named node is a movie where an actor is required.
    #[error("'{0}' is a movie; separations are measured between actors")]
    NotAnActor(String),

    /// Query for a name that was never added to the graph.
    #[error("'{0}' is not in the graph")]
    UnknownEntity(String),

    /// The entity exists but has no finite chain to the root.
    #[error("no connection between '{0}' and the root")]
    NoPath(String),
}
