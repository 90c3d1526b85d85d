//! Tubedeck - Playback Shell
//!
//! The boundary around `tubedeck-core`: turns commands into backend calls
//! and backend callbacks into events.
//!
//! This crate provides:
//! - `MediaBackend` and `QueueProvider` traits for platform integration
//! - `CommandRunner` (ordered command execution, repeat-one handling)
//! - `PlayerController` (single dispatch queue, time polling, callbacks)
//! - Perceptual volume curve for backends with a linear volume scale
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use tubedeck_shell::{BackendResult, EmptyQueue, MediaBackend, PlayerController};
//! use tubedeck_core::{PlayerEvent, VideoId};
//!
//! #[derive(Default)]
//! struct LoggingBackend {
//!     loaded: Vec<String>,
//! }
//!
//! impl MediaBackend for LoggingBackend {
//!     fn play(&mut self) -> BackendResult<()> { Ok(()) }
//!     fn pause(&mut self) -> BackendResult<()> { Ok(()) }
//!     fn seek(&mut self, _seconds: f64) -> BackendResult<()> { Ok(()) }
//!     fn load(&mut self, video_id: &VideoId) -> BackendResult<()> {
//!         self.loaded.push(video_id.to_string());
//!         Ok(())
//!     }
//!     fn set_volume(&mut self, _level: f64) -> BackendResult<()> { Ok(()) }
//!     fn current_time(&self) -> Option<f64> { None }
//! }
//!
//! let mut controller = PlayerController::new(LoggingBackend::default(), EmptyQueue);
//! controller.on_ready(0.0);
//! controller.dispatch(PlayerEvent::TrackSelected {
//!     video_id: VideoId::new("abc").unwrap(),
//!     autoplay: true,
//! });
//! assert_eq!(controller.backend().loaded, vec!["abc".to_string()]);
//! ```

mod backend;
mod controller;
mod error;
mod queue;
mod runner;
mod volume;

// Public exports
pub use backend::MediaBackend;
pub use controller::{AppliedStep, ControllerConfig, DispatchOutcome, PlayerController};
pub use error::{BackendError, Result as BackendResult};
pub use queue::{EmptyQueue, QueueProvider, RepeatMode};
pub use runner::{CommandRunner, RunReport};
pub use volume::perceptual_volume;
