#![forbid(unsafe_code)]
//! graphwalk-core library.
//!
//! A directed graph over a fixed vertex set `0..n`, stored as an adjacency
//! matrix, with the classic search questions asked of it: walks, cycles,
//! reachability, components, transitive closure, Hamiltonian paths and
//! circuits, Eulerian paths and circuits.
//!
//! # Conventions
//!
//! - **Errors**: fallible operations return `Result<_, GraphError>`; every
//!   error maps to a stable [`ErrorCode`].
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`, `warn!`). The
//!   library never installs a subscriber.
//! - **Ordering**: neighbors are always examined in ascending index order,
//!   so every result is deterministic for a given graph.
//!
//! ```
//! use graphwalk_core::{Graph, bfs_order, reachable_path};
//!
//! let g = Graph::from_edges(4, [(0, 1), (1, 2), (0, 3)])?;
//! assert_eq!(bfs_order(&g, 0)?, vec![0, 1, 3, 2]);
//! assert_eq!(reachable_path(&g, 0, 2)?, Some(vec![0, 1, 2]));
//! # Ok::<(), graphwalk_core::GraphError>(())
//! ```

pub mod connectivity;
pub mod error;
pub mod graph;
pub mod search;
pub mod traversal;

pub use connectivity::{
    ComponentLabels, ReachabilityMatrix, connected_components, has_cycle, is_reachable,
    reachable_path, transitive_closure,
};
pub use error::{ErrorCode, GraphError};
pub use graph::{Adjacency, Edge, Graph, Vertex};
pub use search::{
    EulerOutcome, ParityViolation, eulerian_circuits, eulerian_path, hamiltonian_circuits,
    hamiltonian_path,
};
pub use traversal::{DfsTree, Predecessors, bfs_order, dfs_order, dfs_tree};
