//! Tubedeck - Playback Command Engine
//!
//! A pure, synchronous state machine that reconciles what the user wants
//! (play, pause, seek, switch track) with what an asynchronous media backend
//! reports.
//!
//! This crate provides:
//! - The playback state snapshot and its invariants
//! - The closed event and command vocabularies
//! - The reducer: `(state, event) -> (state, commands)`
//! - A-B loop (slice repeat) bookkeeping
//!
//! # Architecture
//!
//! `tubedeck-core` performs no I/O and has no notion of time or threads:
//! - No dependency on any media backend
//! - No dependency on the playlist or queue
//! - Every call returns a fresh state; nothing is mutated in place
//!
//! Executing commands and turning backend callbacks into events is the job of
//! `tubedeck-shell`.
//!
//! # Example: Cold Start
//!
//! ```rust
//! use tubedeck_core::{reduce, ObservedPlayback, PlayerCommand, PlayerEvent, PlayerState, VideoId};
//!
//! let state = PlayerState::new();
//! let state = reduce(&state, PlayerEvent::ApiReady).state;
//!
//! // Backend not ready yet: the load is deferred
//! let t = reduce(
//!     &state,
//!     PlayerEvent::TrackSelected { video_id: VideoId::new("abc").unwrap(), autoplay: true },
//! );
//! assert!(t.commands.is_empty());
//!
//! // Backend ready: the deferred load goes out
//! let t = reduce(&t.state, PlayerEvent::PlayerReady { duration: 0.0 });
//! assert_eq!(
//!     t.commands,
//!     vec![PlayerCommand::Load { video_id: VideoId::new("abc").unwrap(), autoplay: true }]
//! );
//!
//! // Load lands cued while the user wants playback: play it
//! let t = reduce(
//!     &t.state,
//!     PlayerEvent::PlayerStateChanged { state: ObservedPlayback::Cued, duration: Some(212.0) },
//! );
//! assert_eq!(t.commands, vec![PlayerCommand::Play]);
//! assert_eq!(t.state.duration, 212.0);
//! ```

mod commands;
mod error;
mod events;
pub mod invariants;
mod reducer;
mod slice;
pub mod types;

// Public exports
pub use commands::PlayerCommand;
pub use error::{CoreError, Result};
pub use events::PlayerEvent;
pub use invariants::{check_invariants, InvariantViolation};
pub use reducer::{reduce, Transition, SEEK_STEP_SECONDS};
pub use slice::MIN_SLICE_SECONDS;
pub use types::{DesiredPlayback, Mode, ObservedPlayback, PlayerState, SliceRepeat, VideoId};
