//! Inbound events
//!
//! Everything that can move the state machine: backend lifecycle reports,
//! track selection from the queue, and user intent.

use crate::types::{ObservedPlayback, VideoId};
use serde::{Deserialize, Serialize};

/// Events fed into the reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerEvent {
    /// Embedding API finished loading
    ApiReady,

    /// Backend instance is constructed and accepts commands
    PlayerReady {
        /// Duration of whatever is loaded, 0 if nothing
        duration: f64,
    },

    /// Backend reported a playback status change
    PlayerStateChanged {
        state: ObservedPlayback,
        #[serde(default)]
        duration: Option<f64>,
    },

    /// Backend failed to load the media of load request `request_id`
    ///
    /// Reports for any request other than the latest are stale and ignored.
    LoadFailed { request_id: u64, reason: String },

    /// Periodic position report
    TimeTick { current_time: f64 },

    /// A track was chosen, by the user or by the queue
    TrackSelected { video_id: VideoId, autoplay: bool },

    UserTogglePlay,
    UserPlay,
    UserPause,

    /// Jump to an absolute position
    UserSeek { seconds: f64 },

    UserSkipForward,
    UserSkipBackward,

    /// Requested volume, clamped to 0-100
    UserSetVolume { volume: i32 },

    UserNextTrack,
    UserPreviousTrack,

    /// Flip the A-B loop on or off
    UserToggleSliceRepeat,

    UserSetSliceStart { seconds: f64 },
    UserSetSliceEnd { seconds: f64 },
    UserSetSliceRepeatEnabled { enabled: bool },
    UserClearSlice,
    UserSetSliceAutoRepeat { auto_repeat: bool },

    /// Playback reached the end of the A-B loop
    SliceBoundaryReached,
}

impl PlayerEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            PlayerEvent::ApiReady => "ApiReady",
            PlayerEvent::PlayerReady { .. } => "PlayerReady",
            PlayerEvent::PlayerStateChanged { .. } => "PlayerStateChanged",
            PlayerEvent::LoadFailed { .. } => "LoadFailed",
            PlayerEvent::TimeTick { .. } => "TimeTick",
            PlayerEvent::TrackSelected { .. } => "TrackSelected",
            PlayerEvent::UserTogglePlay => "UserTogglePlay",
            PlayerEvent::UserPlay => "UserPlay",
            PlayerEvent::UserPause => "UserPause",
            PlayerEvent::UserSeek { .. } => "UserSeek",
            PlayerEvent::UserSkipForward => "UserSkipForward",
            PlayerEvent::UserSkipBackward => "UserSkipBackward",
            PlayerEvent::UserSetVolume { .. } => "UserSetVolume",
            PlayerEvent::UserNextTrack => "UserNextTrack",
            PlayerEvent::UserPreviousTrack => "UserPreviousTrack",
            PlayerEvent::UserToggleSliceRepeat => "UserToggleSliceRepeat",
            PlayerEvent::UserSetSliceStart { .. } => "UserSetSliceStart",
            PlayerEvent::UserSetSliceEnd { .. } => "UserSetSliceEnd",
            PlayerEvent::UserSetSliceRepeatEnabled { .. } => "UserSetSliceRepeatEnabled",
            PlayerEvent::UserClearSlice => "UserClearSlice",
            PlayerEvent::UserSetSliceAutoRepeat { .. } => "UserSetSliceAutoRepeat",
            PlayerEvent::SliceBoundaryReached => "SliceBoundaryReached",
        }
    }
}
