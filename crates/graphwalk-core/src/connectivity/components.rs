use serde::Serialize;

use crate::graph::{Adjacency, Vertex};

/// Assignment of every vertex to a connected component.
///
/// Components are numbered `0..count` in order of their smallest vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    count: usize,
}

impl ComponentLabels {
    /// Number of components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, or `None` if `v` is out of range.
    #[must_use]
    pub fn component_of(&self, v: Vertex) -> Option<usize> {
        self.labels.get(v).copied()
    }

    /// Component id of each vertex, indexed by vertex.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Vertices of component `id` in ascending order.
    #[must_use]
    pub fn members(&self, id: usize) -> Vec<Vertex> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(v, &label)| (label == id).then_some(v))
            .collect()
    }

    /// Every component's members, indexed by component id.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<Vertex>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, &label) in self.labels.iter().enumerate() {
            groups[label].push(v);
        }
        groups
    }

    /// Whether `v` and `w` share a component.
    #[must_use]
    pub fn same_component(&self, v: Vertex, w: Vertex) -> bool {
        matches!((self.component_of(v), self.component_of(w)), (Some(a), Some(b)) if a == b)
    }
}

/// Label the weakly connected components of `graph`.
///
/// Edge direction is ignored: `v -> w` joins `v` and `w` just as `w -> v`
/// does. Vertices are scanned in index order and each unlabeled vertex
/// seeds a new component.
#[must_use]
pub fn connected_components<G: Adjacency + ?Sized>(graph: &G) -> ComponentLabels {
    let n = graph.vertex_count();
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut count = 0;

    for seed in 0..n {
        if labels[seed].is_some() {
            continue;
        }
        let id = count;
        count += 1;

        labels[seed] = Some(id);
        let mut stack = vec![seed];
        while let Some(current) = stack.pop() {
            for next in 0..n {
                let linked = graph.has_edge(current, next) || graph.has_edge(next, current);
                if linked && labels[next].is_none() {
                    labels[next] = Some(id);
                    stack.push(next);
                }
            }
        }
    }

    tracing::debug!(vertex_count = n, components = count, "labeled components");
    ComponentLabels {
        labels: labels.into_iter().map(|label| label.unwrap_or_default()).collect(),
        count,
    }
}
