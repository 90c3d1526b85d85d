//! Media backend trait
//!
//! Abstracts the embedded player (web embed, native decoder, test double).

use crate::error::Result;
use tubedeck_core::VideoId;

/// Anything that can load, play, pause, seek and report a position
///
/// Calls are fire-and-forget from the engine's point of view: the backend
/// confirms asynchronously through the controller callbacks
/// (`on_ready`, `on_state_code`, `on_error`).
pub trait MediaBackend: Send {
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    /// Jump to an absolute position in seconds
    fn seek(&mut self, seconds: f64) -> Result<()>;

    /// Load media and start playing it
    fn load(&mut self, video_id: &VideoId) -> Result<()>;

    /// Load media without starting playback
    ///
    /// Backends without a native cue fall back to load-then-pause.
    fn cue(&mut self, video_id: &VideoId) -> Result<()> {
        self.load(video_id)?;
        self.pause()
    }

    /// Set output level on the backend's own 0-100 scale
    fn set_volume(&mut self, level: f64) -> Result<()>;

    /// Current position, `None` when nothing is loaded
    fn current_time(&self) -> Option<f64>;
}
