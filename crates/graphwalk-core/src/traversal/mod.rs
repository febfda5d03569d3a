//! Depth-first and breadth-first walks.
//!
//! Both walks visit neighbors in ascending index order, so for a fixed
//! adjacency matrix the visitation order is fully deterministic.
//!
//! The depth-first walk uses an explicit frame stack instead of recursion.
//! Each frame remembers the next neighbor index to try, which reproduces the
//! recursive preorder exactly while keeping stack depth off the call stack.

mod predecessors;

pub use predecessors::Predecessors;

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use serde::Serialize;

use crate::error::GraphError;
use crate::graph::{Adjacency, Vertex};

/// Spanning tree produced by a depth-first walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsTree {
    /// Start vertex of the walk.
    pub root: Vertex,
    /// Vertices in discovery (preorder) order; `order[0] == root`.
    pub order: Vec<Vertex>,
    /// Tree parent of each discovered vertex; `None` for the root and for
    /// vertices the walk never reached.
    pub parents: Predecessors,
    depths: Vec<Option<usize>>,
}

impl DfsTree {
    /// Tree children of `v` in discovery order.
    #[must_use]
    pub fn children(&self, v: Vertex) -> Vec<Vertex> {
        self.order
            .iter()
            .copied()
            .filter(|&c| c != self.root && self.parents.get(c) == Some(v))
            .collect()
    }

    /// Distance from the root along tree edges, if `v` was reached.
    #[must_use]
    pub fn depth(&self, v: Vertex) -> Option<usize> {
        self.depths.get(v).copied().flatten()
    }

    #[must_use]
    pub fn contains(&self, v: Vertex) -> bool {
        self.depth(v).is_some()
    }
}

/// Vertices reachable from `start` in depth-first preorder.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
pub fn dfs_order<G: Adjacency + ?Sized>(graph: &G, start: Vertex) -> Result<Vec<Vertex>, GraphError> {
    Ok(dfs_tree(graph, start)?.order)
}

/// Depth-first walk from `start`, keeping the tree structure.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
pub fn dfs_tree<G: Adjacency + ?Sized>(graph: &G, start: Vertex) -> Result<DfsTree, GraphError> {
    graph.check_vertex(start)?;
    let n = graph.vertex_count();

    let mut order = Vec::new();
    let mut parents = Predecessors::new(n);
    let mut depths = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);

    // Frame: (vertex, next neighbor index to examine).
    let mut stack: Vec<(Vertex, Vertex)> = vec![(start, 0)];
    visited.insert(start);
    order.push(start);
    depths[start] = Some(0);

    while let Some(frame) = stack.last_mut() {
        let (current, from) = *frame;
        let next = (from..n).find(|&w| graph.has_edge(current, w) && !visited.contains(w));
        match next {
            Some(w) => {
                frame.1 = w + 1;
                visited.insert(w);
                order.push(w);
                parents.set(w, current);
                depths[w] = Some(stack.len());
                stack.push((w, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::trace!(start, reached = order.len(), "depth-first walk complete");
    Ok(DfsTree {
        root: start,
        order,
        parents,
        depths,
    })
}

/// Vertices reachable from `start` in breadth-first (level) order.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
pub fn bfs_order<G: Adjacency + ?Sized>(graph: &G, start: Vertex) -> Result<Vec<Vertex>, GraphError> {
    graph.check_vertex(start)?;
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for next in graph.neighbors(current) {
            if !visited.put(next) {
                queue.push_back(next);
            }
        }
    }

    tracing::trace!(start, reached = order.len(), "breadth-first walk complete");
    Ok(order)
}
