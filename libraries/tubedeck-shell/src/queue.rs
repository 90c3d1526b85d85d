//! Queue provider trait
//!
//! The engine never knows playlist order, shuffle or repeat. It asks a
//! provider and receives a media identifier, or nothing.

use serde::{Deserialize, Serialize};
use tubedeck_core::VideoId;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

/// Resolves "next" and "previous" into concrete tracks
///
/// `None` means there is nothing to move to; the request is then a no-op.
pub trait QueueProvider: Send {
    fn next(&mut self) -> Option<VideoId>;

    fn previous(&mut self) -> Option<VideoId>;

    fn repeat_mode(&self) -> RepeatMode {
        RepeatMode::Off
    }
}

/// A provider with no tracks
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyQueue;

impl QueueProvider for EmptyQueue {
    fn next(&mut self) -> Option<VideoId> {
        None
    }

    fn previous(&mut self) -> Option<VideoId> {
        None
    }
}
