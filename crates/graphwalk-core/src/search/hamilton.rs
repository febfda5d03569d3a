//! Hamiltonian paths and circuits by chronological backtracking.
//!
//! The search extends a path one unvisited out-neighbor at a time, in
//! ascending index order. A branch that cannot be completed unmarks its
//! vertex and clears its predecessor before the next neighbor is tried.
//! There is no pruning beyond "never revisit a vertex", so the cost is
//! exponential in the worst case; the first path found is reproducible but
//! not minimal in any sense.

use fixedbitset::FixedBitSet;

use crate::error::GraphError;
use crate::graph::{Adjacency, Vertex};
use crate::traversal::Predecessors;

/// A path from `src` to `dest` that visits every vertex exactly once.
///
/// With a single vertex, `hamiltonian_path(g, 0, 0)` is `[0]`; with more,
/// `src == dest` never succeeds because `dest` is already visited.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if either vertex is out of range.
pub fn hamiltonian_path<G: Adjacency + ?Sized>(
    graph: &G,
    src: Vertex,
    dest: Vertex,
) -> Result<Option<Vec<Vertex>>, GraphError> {
    graph.check_vertex(src)?;
    graph.check_vertex(dest)?;

    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut pred = Predecessors::new(n);
    visited.insert(src);

    let found = extend(graph, src, dest, n - 1, &mut visited, &mut pred);
    tracing::debug!(src, dest, found, "hamiltonian path search");
    Ok(found.then(|| pred.path_to(dest)))
}

/// Every Hamiltonian circuit found by trying each edge `src -> first` as
/// the opening step and searching a Hamiltonian path `first -> … -> src`.
///
/// Each circuit is `[src, first, …, src]`. The same cycle is reported once
/// per starting edge that leads to it; rotations and reflections are not
/// merged.
#[must_use]
pub fn hamiltonian_circuits<G: Adjacency + ?Sized>(graph: &G) -> Vec<Vec<Vertex>> {
    let n = graph.vertex_count();
    let mut circuits = Vec::new();

    for src in 0..n {
        for first in graph.neighbors(src) {
            let mut visited = FixedBitSet::with_capacity(n);
            let mut pred = Predecessors::new(n);
            pred.set(first, src);
            visited.insert(first);

            if extend(graph, first, src, n - 1, &mut visited, &mut pred) {
                let circuit = pred.circuit_through(src);
                tracing::trace!(?circuit, "hamiltonian circuit");
                circuits.push(circuit);
            }
        }
    }

    tracing::debug!(found = circuits.len(), "hamiltonian circuit search");
    circuits
}

/// `remaining` counts the vertices still to be added after `current`.
fn extend<G: Adjacency + ?Sized>(
    graph: &G,
    current: Vertex,
    dest: Vertex,
    remaining: usize,
    visited: &mut FixedBitSet,
    pred: &mut Predecessors,
) -> bool {
    if remaining == 0 && current == dest {
        return true;
    }
    for next in graph.neighbors(current) {
        if visited.contains(next) {
            continue;
        }
        pred.set(next, current);
        visited.insert(next);
        if extend(graph, next, dest, remaining - 1, visited, pred) {
            return true;
        }
        pred.clear(next);
        visited.set(next, false);
    }
    false
}
