//! Outbound commands
//!
//! Requests to the command runner. The reducer only decides; the runner
//! executes against the media backend or the queue provider.

use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// Commands emitted by the reducer, in execution order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    Play,
    Pause,
    Seek { seconds: f64 },
    Load { video_id: VideoId, autoplay: bool },
    SetVolume { volume: u8 },

    /// Ask the queue provider for the next track
    RequestNextTrack,

    /// Ask the queue provider for the previous track
    RequestPreviousTrack,
}

impl PlayerCommand {
    /// Whether the command goes to the media backend (as opposed to the queue)
    pub fn targets_backend(&self) -> bool {
        match self {
            PlayerCommand::Play
            | PlayerCommand::Pause
            | PlayerCommand::Seek { .. }
            | PlayerCommand::Load { .. }
            | PlayerCommand::SetVolume { .. } => true,
            PlayerCommand::RequestNextTrack | PlayerCommand::RequestPreviousTrack => false,
        }
    }
}
