//! Tubedeck CLI Library
//!
//! Replays event scripts through the playback engine and checks them
//! against the state invariants.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod replay;
pub mod simulated;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use replay::{check, load_script, replay, CheckFailure, CheckReport, ReplaySummary};
pub use simulated::{BackendCall, SimulatedBackend};
