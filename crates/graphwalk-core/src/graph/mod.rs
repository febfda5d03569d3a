//! Graph store and the query interface the algorithms consume.
//!
//! # Overview
//!
//! [`Graph`] owns a square adjacency matrix (one bit row per vertex) and an
//! edge count that is maintained on every insert and remove. Every
//! algorithm in this crate is written against the [`Adjacency`] trait rather
//! than the concrete store, so derived matrices such as the transitive
//! closure can be fed back into the same algorithms.
//!
//! The model is directed: `v -> w` and `w -> v` are independent edges.
//! Undirected graphs are simulated by inserting both directions, see
//! [`Graph::insert_undirected`].

mod adjacency;
mod store;

pub use adjacency::Adjacency;
pub use store::Graph;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertex identifier: an index in `0..vertex_count`.
pub type Vertex = usize;

/// An ordered pair of vertices.
///
/// Edges are not stored as entities; whether one exists is a fact derived
/// from the adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

impl Edge {
    #[must_use]
    pub const fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((from, to): (Vertex, Vertex)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
