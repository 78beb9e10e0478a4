//! Error types for DAG operations.
//!
//! Every failure is local and recoverable. Removal operations never produce
//! an error for a missing target; see [`Dag::remove_vertex`](crate::Dag::remove_vertex)
//! and [`Dag::remove_edge`](crate::Dag::remove_edge).

use thiserror::Error;

/// Result type for DAG operations.
pub type DagResult<T> = Result<T, DagError>;

/// Errors returned by fallible [`Dag`](crate::Dag) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DagError {
    /// A vertex with this id is already present.
    #[error("dag: vertex already exists: {id}")]
    VertexExists {
        /// The duplicate id.
        id: String,
    },

    /// A referenced vertex is not present.
    #[error("dag: vertex does not exist: {id}")]
    VertexNotExists {
        /// The missing id.
        id: String,
    },

    /// The directed edge is already present.
    #[error("dag: edge already exists: {from} -> {to}")]
    EdgeExists {
        /// Source vertex id.
        from: String,
        /// Target vertex id.
        to: String,
    },

    /// The edge is a self-loop or would close a cycle.
    #[error("dag: cycle between edges: {from} -> {to}")]
    Cycle {
        /// Source vertex id.
        from: String,
        /// Target vertex id.
        to: String,
    },
}

impl DagError {
    /// Creates a vertex-exists error.
    pub fn vertex_exists(id: impl Into<String>) -> Self {
        Self::VertexExists { id: id.into() }
    }

    /// Creates a vertex-not-exists error.
    pub fn vertex_not_exists(id: impl Into<String>) -> Self {
        Self::VertexNotExists { id: id.into() }
    }

    /// Creates an edge-exists error.
    pub fn edge_exists(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::EdgeExists {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a cycle error.
    pub fn cycle(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Cycle {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns true for [`DagError::Cycle`].
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}
