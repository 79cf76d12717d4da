//! costar-core: degrees-of-separation engine for collaboration graphs.
//!
//! A pure Rust library that builds a bipartite actor/movie graph from cast
//! records, tags every node with its hop distance from a root actor using
//! a decrease-key priority queue, and reconstructs the actor/movie chain
//! behind any queried separation. No I/O; loading datasets and the
//! interactive query loop live in the `costar` binary.
//!
//! The intended flow is build once, tag once, query many times:
//!
//! ```
//! use costar_core::{compute_shortest_paths, query, CastRecord, Graph};
//!
//! let records = vec![CastRecord {
//!     title: "Movie A".into(),
//!     cast: vec!["Kevin Bacon".into(), "Alice".into()],
//! }];
//! let mut graph = Graph::from_records(records)?;
//! compute_shortest_paths(&mut graph, "Kevin Bacon")?;
//! assert_eq!(query(&graph, "Alice")?.separation, 1);
//! # Ok::<(), costar_core::Error>(())
//! ```

mod error;
mod graph;
mod heap;
mod path;
mod search;

pub use error::{Error, Result};
pub use graph::{CastRecord, Graph, Node, NodeId, NodeKind, UNREACHED};
pub use heap::IndexedHeap;
pub use path::{query, PathHop, PathResult};
pub use search::compute_shortest_paths;
