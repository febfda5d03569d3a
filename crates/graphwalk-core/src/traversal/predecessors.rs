use serde::Serialize;

use crate::graph::Vertex;

/// Per-search predecessor map: which vertex each vertex was reached from.
///
/// `None` means "no predecessor". A path is reconstructed by walking back
/// from a destination until a vertex without a predecessor is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predecessors {
    pred: Vec<Option<Vertex>>,
}

impl Predecessors {
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            pred: vec![None; vertex_count],
        }
    }

    #[must_use]
    pub fn get(&self, v: Vertex) -> Option<Vertex> {
        self.pred[v]
    }

    pub fn set(&mut self, v: Vertex, from: Vertex) {
        self.pred[v] = Some(from);
    }

    pub fn clear(&mut self, v: Vertex) {
        self.pred[v] = None;
    }

    /// Vertices from the root of `dest`'s chain up to and including `dest`.
    ///
    /// The walk is bounded by the vertex count, so a malformed (cyclic)
    /// chain yields a truncated path instead of looping forever.
    #[must_use]
    pub fn path_to(&self, dest: Vertex) -> Vec<Vertex> {
        let mut path = vec![dest];
        let mut cursor = dest;
        while let Some(prev) = self.pred[cursor] {
            if path.len() > self.pred.len() {
                break;
            }
            path.push(prev);
            cursor = prev;
        }
        path.reverse();
        path
    }

    /// Closed walk `[src, …, src]` for a chain that loops back to `src`.
    ///
    /// Used after a circuit search that seeded the first hop's predecessor
    /// with `src` and finished by recording `src`'s own predecessor.
    #[must_use]
    pub fn circuit_through(&self, src: Vertex) -> Vec<Vertex> {
        let mut back = vec![src];
        let mut cursor = src;
        while let Some(prev) = self.pred[cursor] {
            if prev == src || back.len() > self.pred.len() {
                break;
            }
            back.push(prev);
            cursor = prev;
        }
        back.reverse();

        let mut circuit = Vec::with_capacity(back.len() + 1);
        circuit.push(src);
        circuit.extend(back);
        circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_walks_back_to_root() {
        let mut pred = Predecessors::new(4);
        pred.set(1, 0);
        pred.set(3, 1);
        assert_eq!(pred.path_to(3), vec![0, 1, 3]);
        assert_eq!(pred.path_to(0), vec![0]);
    }

    #[test]
    fn cleared_entries_end_the_chain() {
        let mut pred = Predecessors::new(3);
        pred.set(1, 0);
        pred.set(2, 1);
        pred.clear(1);
        assert_eq!(pred.get(1), None);
        assert_eq!(pred.path_to(2), vec![1, 2]);
    }

    #[test]
    fn circuit_closes_on_source() {
        // 2 -> 0 -> 1 -> 2, seeded from src = 2 with first hop 0.
        let mut pred = Predecessors::new(3);
        pred.set(0, 2);
        pred.set(1, 0);
        pred.set(2, 1);
        assert_eq!(pred.circuit_through(2), vec![2, 0, 1, 2]);
    }

    #[test]
    fn cyclic_chain_is_bounded() {
        let mut pred = Predecessors::new(2);
        pred.set(0, 1);
        pred.set(1, 0);
        assert!(pred.path_to(0).len() <= 3);
    }
}
