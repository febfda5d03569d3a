use std::fmt;

use crate::graph::{Edge, Vertex};

/// Errors raised by the graph store and the algorithms built on it.
///
/// Every failure is local: the graph is left exactly as it was before the
/// failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A graph must have at least one vertex.
    #[error("a graph needs at least one vertex")]
    EmptyGraph,

    /// A vertex index outside `0..vertex_count`.
    #[error("invalid vertex {vertex}: graph has vertices 0..{vertex_count}")]
    InvalidVertex { vertex: Vertex, vertex_count: usize },

    /// Inserting an edge that is already present.
    #[error("edge already exists: {0}")]
    EdgeExists(Edge),

    /// Removing an edge that is not present.
    #[error("edge doesn't exist: {0}")]
    EdgeMissing(Edge),

    /// The edge count no longer matches what it was before a journaled
    /// search. Always a bug in the edge journal, never caller error.
    #[error("edge count drifted during search: expected {expected}, found {actual}")]
    JournalDrift { expected: usize, actual: usize },
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyGraph => ErrorCode::EmptyGraph,
            Self::InvalidVertex { .. } => ErrorCode::InvalidVertex,
            Self::EdgeExists(_) => ErrorCode::EdgeExists,
            Self::EdgeMissing(_) => ErrorCode::EdgeMissing,
            Self::JournalDrift { .. } => ErrorCode::InternalJournalDrift,
        }
    }
}

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyGraph,
    InvalidVertex,
    EdgeExists,
    EdgeMissing,
    InternalJournalDrift,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyGraph => "E1001",
            Self::InvalidVertex => "E2001",
            Self::EdgeExists => "E2002",
            Self::EdgeMissing => "E2003",
            Self::InternalJournalDrift => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyGraph => "Graph has no vertices",
            Self::InvalidVertex => "Vertex index out of range",
            Self::EdgeExists => "Edge already exists",
            Self::EdgeMissing => "Edge does not exist",
            Self::InternalJournalDrift => "Edge journal failed to restore the graph",
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::EmptyGraph => Some("Declare a vertex count of 1 or more."),
            Self::InvalidVertex => Some("Use a vertex between 0 and the vertex count minus one."),
            Self::EdgeExists | Self::EdgeMissing => None,
            Self::InternalJournalDrift => Some("Report a bug with the input graph attached."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
