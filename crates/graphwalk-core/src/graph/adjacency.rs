use crate::error::GraphError;

use super::Vertex;

/// Read-only adjacency queries over a fixed vertex set.
///
/// `has_edge` and `neighbors` assume in-range vertices; public entry points
/// validate caller-supplied vertices with [`Adjacency::check_vertex`] before
/// walking.
pub trait Adjacency {
    /// Number of vertices. Fixed for the lifetime of the value.
    fn vertex_count(&self) -> usize;

    /// Whether the directed edge `from -> to` exists.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool;

    /// Out-neighbors of `v` in ascending index order.
    ///
    /// Every traversal in this crate relies on the ascending order for
    /// reproducible results.
    fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.vertex_count()).filter(move |&w| self.has_edge(v, w))
    }

    /// Reject a vertex outside `0..vertex_count`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] when `v` is out of range.
    fn check_vertex(&self, v: Vertex) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
