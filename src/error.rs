//! Error types shared by ingestion, generation and the estimators.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors that can occur while building graphs or running an estimator.
#[derive(Debug, Error)]
pub enum LspError {
    /// A line of an edge list could not be parsed.
    #[error("format error on line {line}: {reason}")]
    Format {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Sampling was requested from an empty vertex set.
    #[error("cannot sample from an empty vertex set")]
    EmptyDomain,

    /// A start vertex or pivot is not part of the searched component.
    #[error("vertex {0} is not part of the searched component")]
    UnknownVertex(VertexId),

    /// The coordinate-guided search needs a point for every vertex.
    #[error("vertex {0} has no coordinates")]
    MissingCoordinates(VertexId),

    /// A generator or builder argument is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LspError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LspError>;
