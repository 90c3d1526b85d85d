//! Error types for the playback core

use thiserror::Error;

/// Errors raised while building core vocabulary values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Media identifiers must not be empty
    #[error("Video id must not be empty")]
    EmptyVideoId,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
