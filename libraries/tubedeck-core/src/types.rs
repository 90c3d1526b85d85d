//! Core types for the playback state machine

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media identifier understood by the backend
///
/// Always non-empty: construction and deserialization both reject `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Create a video id, rejecting empty strings
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyVideoId);
        }
        Ok(Self(id))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VideoId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the user last asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredPlayback {
    Playing,
    #[default]
    Paused,
}

/// Last status reported by the media backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservedPlayback {
    /// Nothing has started yet
    Unstarted,

    /// Media reached its end
    Ended,

    /// Currently playing
    Playing,

    /// Paused mid-media
    #[default]
    Paused,

    /// Stalled waiting for data
    Buffering,

    /// Loaded and parked at the start, not playing
    Cued,
}

impl ObservedPlayback {
    /// Map an embedded-player state code to a playback status
    ///
    /// Codes: -1 unstarted, 0 ended, 1 playing, 2 paused, 3 buffering, 5 cued.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    /// Whether this status proves the backend accepted the requested media
    pub fn confirms_load(self) -> bool {
        matches!(
            self,
            Self::Cued | Self::Playing | Self::Paused | Self::Buffering
        )
    }
}

/// Lifecycle of the currently selected media
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum Mode {
    /// No track has ever been selected
    #[default]
    Uninitialized,

    /// Load requested, backend has not confirmed yet
    Loading {
        video_id: VideoId,
        request_id: u64,
        autoplay: bool,
    },

    /// Backend confirmed the media is loaded
    Ready { video_id: VideoId },

    /// Load failed
    Error { reason: String },
}

impl Mode {
    /// Media identifier carried by `Loading` and `Ready`
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            Mode::Loading { video_id, .. } | Mode::Ready { video_id } => Some(video_id),
            Mode::Uninitialized | Mode::Error { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Mode::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Mode::Ready { .. })
    }
}

/// A-B loop region over the current media
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceRepeat {
    /// Whether the loop is switched on
    pub active: bool,

    /// Loop start in seconds
    pub start: Option<f64>,

    /// Loop end in seconds
    pub end: Option<f64>,

    /// Jump back to `start` at the boundary (otherwise pause there)
    pub auto_repeat: bool,
}

impl SliceRepeat {
    /// Both bounds are present
    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

impl Default for SliceRepeat {
    fn default() -> Self {
        Self {
            active: false,
            start: None,
            end: None,
            auto_repeat: true,
        }
    }
}

/// Full playback snapshot
///
/// Replaced wholesale by every reducer call. The last three fields are
/// derived from the rest and recomputed after each transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub api_ready: bool,
    pub player_ready: bool,

    /// Seconds into the current media
    pub current_time: f64,

    /// Media length in seconds, 0 while unknown
    pub duration: f64,

    /// Volume (0-100)
    pub volume: u8,

    pub desired_playback: DesiredPlayback,
    pub observed_playback: ObservedPlayback,
    pub mode: Mode,

    /// Incremented on every track selection
    pub load_request_id: u64,

    pub slice_repeat: SliceRepeat,

    /// Derived: `mode` is `Loading`
    pub is_loading_new_video: bool,

    /// Derived: backend reports `Playing`
    pub is_playing: bool,

    /// Derived: play requested but not yet confirmed
    pub pending_play_state: Option<DesiredPlayback>,
}

impl PlayerState {
    /// Create the process-start state
    pub fn new() -> Self {
        Self {
            api_ready: false,
            player_ready: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 100,
            desired_playback: DesiredPlayback::Paused,
            observed_playback: ObservedPlayback::Paused,
            mode: Mode::Uninitialized,
            load_request_id: 0,
            slice_repeat: SliceRepeat::default(),
            is_loading_new_video: false,
            is_playing: false,
            pending_play_state: None,
        }
        .with_derived()
    }

    /// Create the process-start state with a given volume
    pub fn with_volume(volume: u8) -> Self {
        Self {
            volume: volume.min(100),
            ..Self::new()
        }
    }

    /// Recompute the derived fields from the rest of the state
    pub(crate) fn with_derived(mut self) -> Self {
        self.is_loading_new_video = self.mode.is_loading();
        self.is_playing = self.observed_playback == ObservedPlayback::Playing;
        self.pending_play_state = derive_pending(self.desired_playback, self.observed_playback);
        self
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn derive_pending(
    desired: DesiredPlayback,
    observed: ObservedPlayback,
) -> Option<DesiredPlayback> {
    if desired == DesiredPlayback::Playing && observed != ObservedPlayback::Playing {
        Some(DesiredPlayback::Playing)
    } else {
        None
    }
}
