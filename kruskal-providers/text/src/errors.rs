//! Error taxonomy for the text edge-list loader.
//!
//! Every variant maps to a stable code through [`TextProviderError::code`] and,
//! where the failure points at a specific input line, reports it 1-based via
//! [`TextProviderError::line`].

use kruskal_core::GraphError;
use thiserror::Error;

/// Errors raised while loading a text edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// The input held no non-blank line to read a vertex count from.
    #[error("input is empty; expected a vertex count on the first line")]
    MissingVertexCount,
    /// The first non-blank line was not a non-negative integer.
    #[error("line {line}: expected a non-negative vertex count but found `{content}`")]
    VertexCount {
        /// 1-based line holding the vertex count.
        line: usize,
        /// Trimmed line content.
        content: String,
    },
    /// The vertex count exceeds what a component tracker can index.
    #[error("line {line}: vertex count {vertex_count} exceeds the supported maximum of {max}")]
    VertexCountTooLarge {
        /// 1-based line holding the vertex count.
        line: usize,
        /// Count declared by the input.
        vertex_count: usize,
        /// Largest accepted count, see [`crate::MAX_VERTEX_COUNT`].
        max: usize,
    },
    /// An edge line did not hold exactly three integers.
    #[error("line {line}: {reason} in `{content}`")]
    MalformedLine {
        /// 1-based line of the edge.
        line: usize,
        /// Trimmed line content.
        content: String,
        /// Which field or shape check failed.
        reason: &'static str,
    },
    /// An edge referenced a vertex outside the declared range.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line of the first offending edge.
        line: usize,
        /// Validation failure reported by the graph.
        #[source]
        source: GraphError,
    },
    /// Reading the underlying stream failed, including invalid UTF-8.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextProviderError {
    /// Returns a stable machine-readable code for the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingVertexCount => "MISSING_VERTEX_COUNT",
            Self::VertexCount { .. } => "VERTEX_COUNT",
            Self::VertexCountTooLarge { .. } => "VERTEX_COUNT_TOO_LARGE",
            Self::MalformedLine { .. } => "MALFORMED_LINE",
            Self::Graph { source, .. } => source.code().as_str(),
            Self::Io(_) => "IO",
        }
    }

    /// Returns the 1-based input line the error refers to, when there is one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::VertexCount { line, .. }
            | Self::VertexCountTooLarge { line, .. }
            | Self::MalformedLine { line, .. }
            | Self::Graph { line, .. } => Some(*line),
            Self::MissingVertexCount | Self::Io(_) => None,
        }
    }
}
