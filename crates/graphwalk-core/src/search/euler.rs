//! Eulerian paths and circuits: walks that use every edge exactly once.
//!
//! # Preconditions
//!
//! Degree parity is checked before any search and short-circuits with a
//! [`ParityViolation`]:
//!
//! - path `src -> dest` with `src != dest`: both endpoints odd, every other
//!   vertex even;
//! - circuit (or a path with `src == dest`): every vertex even.
//!
//! Degree is out-degree. On a graph built from undirected edges (both
//! directions inserted) that is the usual undirected degree.
//!
//! # Search
//!
//! The walk tries each edge out of the current vertex in ascending neighbor
//! order, takes it out of the graph through an [`EdgeJournal`] before going
//! deeper, and rolls it back on the way out whether or not the branch
//! succeeded. The walk is complete when the journal holds every edge and the
//! walk stands on `dest`. Progress is kept on an explicit frame stack, so
//! the walk can be as long as the edge count without growing the call stack.
//!
//! Parity is necessary, not sufficient, for this directed walk: edges in two
//! disconnected groups, or unbalanced in/out degrees, pass the check and
//! still exhaust the search. That outcome is [`EulerOutcome::Exhausted`].

use std::fmt;

use serde::Serialize;

use crate::error::GraphError;
use crate::graph::{Adjacency, Edge, Graph, Vertex};

use super::journal::{Checkpoint, EdgeJournal};

/// A degree-parity reason why no Eulerian walk can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParityViolation {
    /// A path endpoint has even degree.
    EvenEndpoint { vertex: Vertex, degree: usize },
    /// A vertex that must have even degree has odd degree.
    OddVertex { vertex: Vertex, degree: usize },
}

impl fmt::Display for ParityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenEndpoint { vertex, degree } => write!(
                f,
                "endpoint {vertex} has even degree {degree}; both endpoints of an Euler path must have odd degree"
            ),
            Self::OddVertex { vertex, degree } => write!(
                f,
                "vertex {vertex} has odd degree {degree}; it must be even for an Euler walk to exist"
            ),
        }
    }
}

/// Result of an Eulerian search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerOutcome<T> {
    /// The walk (or walks) found.
    Found(T),
    /// Degree parity rules the walk out; no search was attempted.
    Violation(ParityViolation),
    /// Parity held but the search found no walk.
    Exhausted,
}

impl<T> EulerOutcome<T> {
    /// The found value, if any.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Violation(_) | Self::Exhausted => None,
        }
    }
}

/// Search for a walk from `src` to `dest` that uses every edge once.
///
/// The returned walk lists vertices, so it has `edge_count + 1` entries.
/// The graph is borrowed mutably for the search and is bitwise identical to
/// its input state when this returns, whatever the outcome.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertex`] for an out-of-range endpoint and
/// [`GraphError::JournalDrift`] if the edge count failed to come back.
pub fn eulerian_path(
    graph: &mut Graph,
    src: Vertex,
    dest: Vertex,
) -> Result<EulerOutcome<Vec<Vertex>>, GraphError> {
    graph.check_vertex(src)?;
    graph.check_vertex(dest)?;

    let violation = if src == dest {
        circuit_violation(graph)
    } else {
        path_violation(graph, src, dest)
    };
    if let Some(violation) = violation {
        tracing::debug!(src, dest, %violation, "euler path ruled out by parity");
        return Ok(EulerOutcome::Violation(violation));
    }

    Ok(match walk_all_edges(graph, src, dest)? {
        Some(walk) => EulerOutcome::Found(walk),
        None => EulerOutcome::Exhausted,
    })
}

/// Search for a closed walk using every edge once, starting from each vertex
/// in turn. Every start that succeeds contributes its circuit; the same
/// cycle is typically reported from several starts.
///
/// A graph without edges yields the trivial circuit `[v]` for every vertex.
///
/// # Errors
///
/// Returns [`GraphError::JournalDrift`] if the edge count failed to come back.
pub fn eulerian_circuits(graph: &mut Graph) -> Result<EulerOutcome<Vec<Vec<Vertex>>>, GraphError> {
    if let Some(violation) = circuit_violation(graph) {
        tracing::debug!(%violation, "euler circuit ruled out by parity");
        return Ok(EulerOutcome::Violation(violation));
    }

    let mut circuits = Vec::new();
    for src in 0..graph.vertex_count() {
        if let Some(circuit) = walk_all_edges(graph, src, src)? {
            circuits.push(circuit);
        }
    }

    tracing::debug!(found = circuits.len(), "euler circuit search");
    Ok(if circuits.is_empty() {
        EulerOutcome::Exhausted
    } else {
        EulerOutcome::Found(circuits)
    })
}

fn path_violation(graph: &Graph, src: Vertex, dest: Vertex) -> Option<ParityViolation> {
    for endpoint in [src, dest] {
        let degree = out_degree(graph, endpoint);
        if degree % 2 == 0 {
            return Some(ParityViolation::EvenEndpoint {
                vertex: endpoint,
                degree,
            });
        }
    }
    (0..graph.vertex_count())
        .filter(|&v| v != src && v != dest)
        .find_map(|v| odd_vertex(graph, v))
}

fn circuit_violation(graph: &Graph) -> Option<ParityViolation> {
    (0..graph.vertex_count()).find_map(|v| odd_vertex(graph, v))
}

fn odd_vertex(graph: &Graph, vertex: Vertex) -> Option<ParityViolation> {
    let degree = out_degree(graph, vertex);
    (degree % 2 == 1).then_some(ParityViolation::OddVertex { vertex, degree })
}

fn out_degree(graph: &Graph, v: Vertex) -> usize {
    graph.neighbors(v).count()
}

/// Run one journaled search and verify the graph came back whole.
fn walk_all_edges(
    graph: &mut Graph,
    src: Vertex,
    dest: Vertex,
) -> Result<Option<Vec<Vertex>>, GraphError> {
    let expected = graph.edge_count();
    let mut walk = vec![src];

    let found = {
        let mut journal = EdgeJournal::new(graph);
        let found = extend(&mut journal, src, dest, expected, &mut walk)?;
        debug_assert!(journal.is_empty(), "search left edges in the journal");
        found
    };

    let actual = graph.edge_count();
    if actual != expected {
        tracing::warn!(expected, actual, "edge journal drift after euler search");
        return Err(GraphError::JournalDrift { expected, actual });
    }

    tracing::trace!(src, dest, found, edges = expected, "euler walk attempt");
    Ok(found.then_some(walk))
}

/// One step of the walk: the vertex reached, the next out-neighbor index to
/// try from it, and the journal height before the edge into it was taken.
struct Frame {
    vertex: Vertex,
    cursor: Vertex,
    mark: Checkpoint,
}

fn extend(
    journal: &mut EdgeJournal<'_>,
    src: Vertex,
    dest: Vertex,
    total: usize,
    walk: &mut Vec<Vertex>,
) -> Result<bool, GraphError> {
    let base = journal.checkpoint();
    let n = journal.graph().vertex_count();
    let mut stack = vec![Frame {
        vertex: src,
        cursor: 0,
        mark: base,
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.vertex;
        if journal.len() == total && current == dest {
            journal.rollback(base);
            return Ok(true);
        }

        // Everything taken above this frame has been rolled back by the
        // time the cursor is consulted again, so scanning the live row from
        // the cursor sees the same candidates as on entry.
        let next = (frame.cursor..n).find(|&w| journal.graph().has_edge(current, w));
        match next {
            Some(next) => {
                frame.cursor = next + 1;
                let mark = journal.checkpoint();
                journal.take(Edge::new(current, next))?;
                walk.push(next);
                stack.push(Frame {
                    vertex: next,
                    cursor: 0,
                    mark,
                });
            }
            None => {
                let Some(done) = stack.pop() else { break };
                journal.rollback(done.mark);
                if !stack.is_empty() {
                    walk.pop();
                }
            }
        }
    }
    Ok(false)
}
