use fixedbitset::FixedBitSet;

use crate::graph::{Adjacency, Vertex};

/// Transitive closure of a graph: cell `(j, k)` is set iff a directed path
/// of one or more edges leads from `j` to `k`.
///
/// The diagonal is not seeded, so `(v, v)` is set only when `v` lies on a
/// cycle. The matrix is itself an [`Adjacency`], which makes the closure of a
/// closure computable (and equal to it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityMatrix {
    rows: Vec<FixedBitSet>,
}

impl ReachabilityMatrix {
    /// Whether `to` is reachable from `from`. Out-of-range vertices are
    /// never reachable.
    #[must_use]
    pub fn reaches(&self, from: Vertex, to: Vertex) -> bool {
        self.rows.get(from).is_some_and(|row| row.contains(to))
    }

    /// Number of set cells.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones(..)).sum()
    }

    /// Dense row-major copy, one `bool` per cell.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        let n = self.rows.len();
        self.rows
            .iter()
            .map(|row| (0..n).map(|k| row.contains(k)).collect())
            .collect()
    }
}

impl Adjacency for ReachabilityMatrix {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.rows[from].contains(to)
    }

    fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.rows[v].ones()
    }
}

/// Warshall's all-pairs closure.
///
/// The intermediate vertex `i` is the outermost loop: after round `i`, cell
/// `(j, k)` records a path whose interior uses only vertices `0..=i`. The
/// inner `k` loop is a row union.
#[must_use]
pub fn transitive_closure<G: Adjacency + ?Sized>(graph: &G) -> ReachabilityMatrix {
    let n = graph.vertex_count();
    let mut rows: Vec<FixedBitSet> = (0..n)
        .map(|v| {
            let mut row = FixedBitSet::with_capacity(n);
            row.extend(graph.neighbors(v));
            row
        })
        .collect();

    for i in 0..n {
        let via = rows[i].clone();
        for row in &mut rows {
            if row.contains(i) {
                row.union_with(&via);
            }
        }
    }

    let closure = ReachabilityMatrix { rows };
    tracing::debug!(vertex_count = n, pairs = closure.pair_count(), "transitive closure");
    closure
}
