//! Error types shared by all engines.
//!
//! Every validation failure is fail-fast: an engine returning an error has
//! produced no partial distances or weights. Disconnected graphs and
//! unreachable vertices are *not* errors; they are carried in the result
//! types instead.

use crate::weight::Weight;

/// An input-validation error raised before an engine starts computing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// The caller supplied a graph with no vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// The source vertex is not a vertex of the graph.
    ///
    /// The field is named `vertex` rather than `source` because thiserror
    /// reserves `source` for the error-cause chain.
    #[error("source vertex {vertex} is out of range for {node_count} vertices")]
    SourceOutOfRange {
        /// The invalid source vertex supplied by the caller.
        vertex: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// An edge referenced a vertex that is not part of the graph.
    #[error("edge references vertex {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid vertex id referenced by an edge.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// A matrix row had a different length from the vertex count.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Number of entries the row actually holds.
        len: usize,
        /// Number of entries every row must hold.
        expected: usize,
    },
    /// A weight's magnitude reached the sentinel without being exactly it.
    #[error("weight {weight} is at or beyond the sentinel magnitude")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: Weight,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::EmptyGraph => GraphErrorCode::EmptyGraph,
            Self::SourceOutOfRange { .. } => GraphErrorCode::SourceOutOfRange,
            Self::InvalidNodeId { .. } => GraphErrorCode::InvalidNodeId,
            Self::RaggedMatrix { .. } => GraphErrorCode::RaggedMatrix,
            Self::WeightOutOfRange { .. } => GraphErrorCode::WeightOutOfRange,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// The caller supplied a graph with no vertices.
    EmptyGraph,
    /// The source vertex is not a vertex of the graph.
    SourceOutOfRange,
    /// An edge referenced a vertex that is not part of the graph.
    InvalidNodeId,
    /// A matrix row had a different length from the vertex count.
    RaggedMatrix,
    /// A weight's magnitude reached the sentinel without being exactly it.
    WeightOutOfRange,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::SourceOutOfRange => "SOURCE_OUT_OF_RANGE",
            Self::InvalidNodeId => "INVALID_NODE_ID",
            Self::RaggedMatrix => "RAGGED_MATRIX",
            Self::WeightOutOfRange => "WEIGHT_OUT_OF_RANGE",
        }
    }
}

/// Convenient alias for results returned by the engines.
pub type Result<T> = core::result::Result<T, GraphError>;
