//! State invariant checks
//!
//! Diagnostic tool, not a runtime gate: the reducer must make these
//! impossible to violate. Tests run the checker after every reducer step and
//! the shell can run it in debug builds.

use crate::types::{derive_pending, Mode, ObservedPlayback, PlayerState};
use thiserror::Error;

/// A broken state invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("Invalid current time: {0}")]
    CurrentTime(f64),

    #[error("Current time {current_time} is past duration {duration}")]
    CurrentTimePastDuration { current_time: f64, duration: f64 },

    #[error("Invalid duration: {0}")]
    Duration(f64),

    #[error("Volume must be between 0 and 100, got {0}")]
    Volume(u8),

    #[error("{0} mode requires a video id")]
    MissingVideoId(&'static str),

    #[error("Invalid slice bound: {0}")]
    SliceBound(f64),

    #[error("Slice start {start} is not before end {end}")]
    SliceOrder { start: f64, end: f64 },

    #[error("Derived field {0} is out of sync")]
    StaleDerived(&'static str),
}

/// Check every state invariant, reporting the first violation
pub fn check_invariants(state: &PlayerState) -> Result<(), InvariantViolation> {
    if !state.current_time.is_finite() || state.current_time < 0.0 {
        return Err(InvariantViolation::CurrentTime(state.current_time));
    }

    if !state.duration.is_finite() || state.duration < 0.0 {
        return Err(InvariantViolation::Duration(state.duration));
    }

    if state.duration > 0.0 && state.current_time > state.duration {
        return Err(InvariantViolation::CurrentTimePastDuration {
            current_time: state.current_time,
            duration: state.duration,
        });
    }

    if state.volume > 100 {
        return Err(InvariantViolation::Volume(state.volume));
    }

    match &state.mode {
        Mode::Loading { video_id, .. } if video_id.as_str().is_empty() => {
            return Err(InvariantViolation::MissingVideoId("Loading"));
        }
        Mode::Ready { video_id } if video_id.as_str().is_empty() => {
            return Err(InvariantViolation::MissingVideoId("Ready"));
        }
        _ => {}
    }

    let slice = &state.slice_repeat;
    for bound in [slice.start, slice.end].into_iter().flatten() {
        if !bound.is_finite() || bound < 0.0 {
            return Err(InvariantViolation::SliceBound(bound));
        }
    }
    if let (Some(start), Some(end)) = (slice.start, slice.end) {
        if start >= end {
            return Err(InvariantViolation::SliceOrder { start, end });
        }
    }

    if state.is_loading_new_video != state.mode.is_loading() {
        return Err(InvariantViolation::StaleDerived("is_loading_new_video"));
    }
    if state.is_playing != (state.observed_playback == ObservedPlayback::Playing) {
        return Err(InvariantViolation::StaleDerived("is_playing"));
    }
    if state.pending_play_state != derive_pending(state.desired_playback, state.observed_playback)
    {
        return Err(InvariantViolation::StaleDerived("pending_play_state"));
    }

    Ok(())
}
