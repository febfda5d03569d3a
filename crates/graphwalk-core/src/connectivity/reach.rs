use fixedbitset::FixedBitSet;

use crate::error::GraphError;
use crate::graph::{Adjacency, Vertex};
use crate::traversal::Predecessors;

/// Whether a directed path leads from `src` to `dest`.
///
/// A vertex always reaches itself.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if either vertex is out of range.
pub fn is_reachable<G: Adjacency + ?Sized>(
    graph: &G,
    src: Vertex,
    dest: Vertex,
) -> Result<bool, GraphError> {
    Ok(reachable_path(graph, src, dest)?.is_some())
}

/// The first path from `src` to `dest` found by depth-first search, as the
/// full vertex sequence `[src, …, dest]`.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if either vertex is out of range.
pub fn reachable_path<G: Adjacency + ?Sized>(
    graph: &G,
    src: Vertex,
    dest: Vertex,
) -> Result<Option<Vec<Vertex>>, GraphError> {
    graph.check_vertex(src)?;
    graph.check_vertex(dest)?;

    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut pred = Predecessors::new(n);

    if search(graph, src, dest, &mut visited, &mut pred) {
        let path = pred.path_to(dest);
        debug_assert_eq!(path.first(), Some(&src));
        tracing::debug!(src, dest, hops = path.len() - 1, "path found");
        Ok(Some(path))
    } else {
        tracing::debug!(src, dest, "no path");
        Ok(None)
    }
}

/// Extend the path through `current`; a dead-end branch clears the
/// predecessor it provisionally recorded.
fn search<G: Adjacency + ?Sized>(
    graph: &G,
    current: Vertex,
    dest: Vertex,
    visited: &mut FixedBitSet,
    pred: &mut Predecessors,
) -> bool {
    if current == dest {
        return true;
    }
    visited.insert(current);
    for next in graph.neighbors(current) {
        if visited.contains(next) {
            continue;
        }
        pred.set(next, current);
        if search(graph, next, dest, visited, pred) {
            return true;
        }
        pred.clear(next);
    }
    false
}
