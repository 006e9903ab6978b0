//! Error types for parsing, clustering and segment description.

use thiserror::Error;

/// Errors raised before a clustering run starts.
///
/// Once parameters are valid the iterative loop is total, so no variant
/// describes a failure inside the loop itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    /// K, the point count or the run configuration is unusable.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What is wrong with the parameter
        message: String,
    },

    /// The raw delimited text could not be turned into points.
    #[error("{message}")]
    MalformedInput {
        /// 1-based line in the trimmed input, when the problem is line-specific
        line: Option<usize>,
        /// Description suitable for showing to the user
        message: String,
    },
}

impl SegmentError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn malformed_input(line: Option<usize>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;

/// Errors from the summary stage. These never invalidate a finished clustering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescribeError {
    /// The describing service failed.
    #[error("Segment description failed: {0}")]
    Service(String),

    /// The service answered with the wrong number of descriptions.
    #[error("Expected {expected} segment descriptions, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}
