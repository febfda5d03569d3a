//! Structural questions about a graph.
//!
//! - [`has_cycle`]: depth-first cycle check from vertex 0.
//! - [`is_reachable`] / [`reachable_path`]: directed reachability with the
//!   path that proves it.
//! - [`connected_components`]: component labeling with edge direction
//!   ignored.
//! - [`transitive_closure`]: the all-pairs "a path exists" relation.
//!
//! All of these are read-only and generic over [`Adjacency`](crate::graph::Adjacency).

pub mod closure;
pub mod components;
pub mod cycles;
pub mod reach;

pub use closure::{ReachabilityMatrix, transitive_closure};
pub use components::{ComponentLabels, connected_components};
pub use cycles::has_cycle;
pub use reach::{is_reachable, reachable_path};
