//! Undo journal for searches that consume edges.
//!
//! # Overview
//!
//! Eulerian search removes each edge it walks so the edge cannot be walked
//! twice, and must put every one of them back. Instead of pairing each
//! removal with a hand-written reinsert on every return path, removals go
//! through an [`EdgeJournal`]:
//!
//! | Step | Call | Effect |
//! |---|---|---|
//! | mark | [`EdgeJournal::checkpoint`] | remember the stack height |
//! | consume | [`EdgeJournal::take`] | remove the edge, push it on the stack |
//! | undo | [`EdgeJournal::rollback`] | reinsert everything above the mark, newest first |
//! | drop | `Drop` | roll back to the empty stack |
//!
//! The journal holds the only mutable borrow of the graph for its whole
//! lifetime, so nothing else can observe or disturb the half-consumed state,
//! and dropping it (including on an early `?` return) always leaves the
//! graph as it was when the journal was opened.

use crate::error::GraphError;
use crate::graph::{Edge, Graph};

/// Stack height captured by [`EdgeJournal::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Exclusive, self-restoring edge-removal log over a [`Graph`].
#[derive(Debug)]
pub struct EdgeJournal<'g> {
    graph: &'g mut Graph,
    taken: Vec<Edge>,
}

impl<'g> EdgeJournal<'g> {
    /// Open a journal. The graph is only reachable through the journal until
    /// it is dropped.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self {
            graph,
            taken: Vec::new(),
        }
    }

    /// Read access to the graph in its current, partially consumed state.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.taken.len())
    }

    /// Remove `edge` from the graph and record it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the edge is absent or has an invalid
    /// endpoint; nothing is recorded in that case.
    pub fn take(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.graph.remove_edge(edge.from, edge.to)?;
        self.taken.push(edge);
        Ok(())
    }

    /// Reinsert every edge taken since `mark`, most recent first.
    ///
    /// Rolling back to a mark at or above the current height is a no-op.
    pub fn rollback(&mut self, mark: Checkpoint) {
        while self.taken.len() > mark.0 {
            let Some(edge) = self.taken.pop() else {
                break;
            };
            let restored = self.graph.set_edge(edge, true);
            debug_assert!(restored, "journaled edge {edge} was already present");
        }
    }

    /// Edges currently removed, oldest first.
    #[must_use]
    pub fn taken(&self) -> &[Edge] {
        &self.taken
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

impl Drop for EdgeJournal<'_> {
    fn drop(&mut self) {
        if !self.taken.is_empty() {
            tracing::trace!(pending = self.taken.len(), "journal dropped; restoring edges");
            self.rollback(Checkpoint(0));
        }
    }
}
