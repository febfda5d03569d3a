use std::num::NonZeroU32;

use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::error::GraphError;

use super::{Adjacency, Edge, Vertex};

/// Directed graph over `0..vertex_count` stored as an adjacency matrix.
///
/// Equality compares the full matrix and the edge count, which is what the
/// restore-after-search guarantees are tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    rows: Vec<FixedBitSet>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            rows: vec![FixedBitSet::with_capacity(vertex_count); vertex_count],
            edge_count: 0,
        })
    }

    /// Create a graph and insert each `(from, to)` pair as a directed edge.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid vertex or duplicate edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (from, to) in edges {
            graph.insert_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Generate a graph where, for each pair `v < w`, the edge `v -> w` and
    /// the edge `w -> v` are each present with probability `1 / sparsity`.
    ///
    /// No self-loops are generated. Pass a seeded RNG for reproducible
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn random<R: Rng + ?Sized>(
        vertex_count: usize,
        sparsity: NonZeroU32,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for v in 0..vertex_count {
            for w in (v + 1)..vertex_count {
                if rng.gen_ratio(1, sparsity.get()) {
                    graph.set_edge(Edge::new(v, w), true);
                }
                if rng.gen_ratio(1, sparsity.get()) {
                    graph.set_edge(Edge::new(w, v), true);
                }
            }
        }
        tracing::debug!(
            vertex_count,
            edge_count = graph.edge_count,
            sparsity = sparsity.get(),
            "generated random graph"
        );
        Ok(graph)
    }

    /// Number of edges currently present.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the edge `v -> w` exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if either index is out of range;
    /// an invalid vertex is never reported as "no edge".
    pub fn adjacent(&self, v: Vertex, w: Vertex) -> Result<bool, GraphError> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Ok(self.rows[v].contains(w))
    }

    /// Insert the directed edge `v -> w`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] for a bad endpoint and
    /// [`GraphError::EdgeExists`] if the edge is already present. The graph
    /// is unchanged on error.
    pub fn insert_edge(&mut self, v: Vertex, w: Vertex) -> Result<(), GraphError> {
        let edge = Edge::new(v, w);
        if self.adjacent(v, w)? {
            return Err(GraphError::EdgeExists(edge));
        }
        self.set_edge(edge, true);
        Ok(())
    }

    /// Remove the directed edge `v -> w`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] for a bad endpoint and
    /// [`GraphError::EdgeMissing`] if the edge is absent. The graph is
    /// unchanged on error.
    pub fn remove_edge(&mut self, v: Vertex, w: Vertex) -> Result<(), GraphError> {
        let edge = Edge::new(v, w);
        if !self.adjacent(v, w)? {
            return Err(GraphError::EdgeMissing(edge));
        }
        self.set_edge(edge, false);
        Ok(())
    }

    /// Insert `v -> w` and `w -> v`. A self-loop is inserted once.
    ///
    /// # Errors
    ///
    /// Fails without inserting anything if either direction already exists
    /// or either endpoint is invalid.
    pub fn insert_undirected(&mut self, v: Vertex, w: Vertex) -> Result<(), GraphError> {
        if self.adjacent(v, w)? {
            return Err(GraphError::EdgeExists(Edge::new(v, w)));
        }
        if self.adjacent(w, v)? {
            return Err(GraphError::EdgeExists(Edge::new(w, v)));
        }
        self.set_edge(Edge::new(v, w), true);
        self.set_edge(Edge::new(w, v), true);
        Ok(())
    }

    /// Out-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn degree(&self, v: Vertex) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.rows[v].count_ones(..))
    }

    /// In-degree of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn in_degree(&self, v: Vertex) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.rows.iter().filter(|row| row.contains(v)).count())
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(from, row)| row.ones().map(move |to| Edge::new(from, to)))
    }

    /// Count set cells by scanning the matrix.
    ///
    /// Only for verification: [`Graph::edge_count`] is maintained
    /// incrementally and must always agree with this.
    #[must_use]
    pub fn recount_edges(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones(..)).sum()
    }

    /// Set or clear a cell with in-range endpoints, keeping the edge count
    /// in step. Returns whether the cell changed.
    pub(crate) fn set_edge(&mut self, edge: Edge, present: bool) -> bool {
        let was = self.rows[edge.from].contains(edge.to);
        self.rows[edge.from].set(edge.to, present);
        match (was, present) {
            (false, true) => {
                self.edge_count += 1;
                true
            }
            (true, false) => {
                self.edge_count -= 1;
                true
            }
            _ => false,
        }
    }
}

impl Adjacency for Graph {
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
