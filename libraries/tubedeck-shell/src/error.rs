//! Error types for backend execution

use thiserror::Error;

/// Failures reported by a media backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// No player instance exists yet
    #[error("Media backend is not available")]
    Unavailable,

    /// The backend refused a seek
    #[error("Seek to {0}s rejected")]
    SeekRejected(f64),

    /// The backend refused to load a media identifier
    #[error("Load rejected: {0}")]
    LoadRejected(String),

    /// Anything else the backend reports
    #[error("Backend error: {0}")]
    Other(String),
}

/// Result type for backend calls
pub type Result<T> = std::result::Result<T, BackendError>;
