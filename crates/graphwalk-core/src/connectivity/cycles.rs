//! Cycle detection by depth-first walk from vertex 0.
//!
//! A neighbor that is already visited and is not the vertex we just came
//! from closes a cycle. Skipping the immediate predecessor keeps a
//! symmetric pair `v <-> w` (an undirected edge) from counting as a cycle.
//!
//! Only vertices reachable from vertex 0 are examined.
//!
//! The rule does not tell back edges from cross or forward edges. On a
//! directed graph, `0 -> 1, 0 -> 2, 1 -> 2` reports a cycle: vertex 2 is
//! already visited when 0 reaches it again, even though no directed cycle
//! exists. The check answers "does the walk revisit a vertex", which is the
//! exact cycle test only on undirected graphs.

use fixedbitset::FixedBitSet;

use crate::graph::{Adjacency, Vertex};

/// Whether the walk from vertex 0 runs into an already-visited vertex other
/// than its immediate predecessor.
#[must_use]
pub fn has_cycle<G: Adjacency + ?Sized>(graph: &G) -> bool {
    if graph.vertex_count() == 0 {
        return false;
    }
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let found = walk(graph, 0, None, &mut visited);
    tracing::debug!(found, visited = visited.count_ones(..), "cycle check");
    found
}

fn walk<G: Adjacency + ?Sized>(
    graph: &G,
    current: Vertex,
    pred: Option<Vertex>,
    visited: &mut FixedBitSet,
) -> bool {
    visited.insert(current);
    for next in graph.neighbors(current) {
        if !visited.contains(next) {
            if walk(graph, next, Some(current), visited) {
                return true;
            }
        } else if Some(next) != pred {
            return true;
        }
    }
    false
}
