/// Error types for corating-recommender
///
/// Loading the review dataset is the only place things can really go wrong.
/// Queries never fail: an unknown item just has no recommendations.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for corating-recommender operations
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Dataset file could not be opened
    #[error("IO error opening {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the dataset failed partway through
    #[error("IO error reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A line in the dataset is not a well-formed review record
    #[error("Malformed review on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber could not be installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// HTTP listener failed to bind or serve
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for corating-recommender operations
pub type Result<T> = std::result::Result<T, RecommendError>;

impl RecommendError {
    /// True for the errors that can come out of loading a dataset.
    ///
    /// Any of these means the store was never built, so nothing may be served.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            RecommendError::Io { .. } | RecommendError::Read { .. } | RecommendError::Parse { .. }
        )
    }

    /// Convert RecommendError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            RecommendError::Io { path, source } => {
                format!(
                    "Could not open review file '{}'. Check the path and permissions. Details: {}",
                    path.display(),
                    source
                )
            }
            RecommendError::Read { line, source } => {
                format!("Review file became unreadable at line {}. Details: {}", line, source)
            }
            RecommendError::Parse { line, source } => {
                format!(
                    "Line {} is not a valid review (need user_id, asin and rating). Details: {}",
                    line, source
                )
            }
            RecommendError::Config(msg) => format!("Configuration issue: {}", msg),
            RecommendError::Logger(msg) => format!("Could not set up logging: {}", msg),
            RecommendError::Server(msg) => format!("HTTP server failed: {}", msg),
        }
    }
}
