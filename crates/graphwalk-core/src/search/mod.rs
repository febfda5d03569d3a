//! Exhaustive backtracking searches.
//!
//! - [`hamilton`]: paths and circuits that visit every vertex once.
//! - [`euler`]: walks that use every edge once, with degree-parity
//!   preconditions.
//! - [`journal`]: the undo log Eulerian search uses to consume and restore
//!   edges.
//!
//! Hamiltonian search only reads the graph. Eulerian search needs
//! `&mut Graph` while it runs and restores it before returning.

pub mod euler;
pub mod hamilton;
pub mod journal;

pub use euler::{EulerOutcome, ParityViolation, eulerian_circuits, eulerian_path};
pub use hamilton::{hamiltonian_circuits, hamiltonian_path};
pub use journal::{Checkpoint, EdgeJournal};
