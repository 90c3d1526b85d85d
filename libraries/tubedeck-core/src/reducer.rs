//! Event → state → command reducer
//!
//! `reduce` is total and pure: it never touches the backend, it only
//! decides what should happen next. User intent is recorded
//! unconditionally, while commands are emitted only once the backend can
//! act on them (`player_ready`). Anything recorded early is honored by the
//! `PlayerReady` transition.

use crate::commands::PlayerCommand;
use crate::events::PlayerEvent;
use crate::slice;
use crate::types::{DesiredPlayback, Mode, ObservedPlayback, PlayerState};

/// Step used by skip forward/backward, in seconds
pub const SEEK_STEP_SECONDS: f64 = 10.0;

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The replacement state
    pub state: PlayerState,

    /// Commands for the runner, in execution order
    pub commands: Vec<PlayerCommand>,
}

/// Clamp into `[min, max]`; NaN collapses to `min`
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Upper bound for positions: the duration once known, unbounded before
pub(crate) fn upper_bound(duration: f64) -> f64 {
    if duration > 0.0 {
        duration
    } else {
        f64::MAX
    }
}

fn usable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Apply one event to a state snapshot
pub fn reduce(state: &PlayerState, event: PlayerEvent) -> Transition {
    let mut next = state.clone();
    let mut commands = Vec::new();
    let ready = state.player_ready;

    match event {
        PlayerEvent::ApiReady => {
            next.api_ready = true;
        }

        PlayerEvent::PlayerReady { duration } => {
            next.player_ready = true;
            if let Some(duration) = usable_duration(duration) {
                next.duration = duration;
                next.current_time = state.current_time.min(duration);
                next.slice_repeat = slice::fit_to_duration(state.slice_repeat, duration);
            }

            match &state.mode {
                Mode::Loading {
                    video_id, autoplay, ..
                } => commands.push(PlayerCommand::Load {
                    video_id: video_id.clone(),
                    autoplay: *autoplay,
                }),
                Mode::Ready { .. } if state.desired_playback == DesiredPlayback::Playing => {
                    commands.push(PlayerCommand::Play);
                }
                Mode::Ready { .. } | Mode::Uninitialized | Mode::Error { .. } => {}
            }
        }

        PlayerEvent::TrackSelected { video_id, autoplay } => {
            let request_id = state.load_request_id + 1;
            next.load_request_id = request_id;
            next.mode = Mode::Loading {
                video_id: video_id.clone(),
                request_id,
                autoplay,
            };
            next.current_time = 0.0;
            next.duration = 0.0;
            next.observed_playback = ObservedPlayback::Paused;
            if autoplay {
                next.desired_playback = DesiredPlayback::Playing;
            }

            if ready {
                commands.push(PlayerCommand::Load { video_id, autoplay });
            }
        }

        PlayerEvent::LoadFailed { request_id, reason } => {
            let current = request_id == state.load_request_id
                && matches!(state.mode, Mode::Loading { .. } | Mode::Ready { .. });
            if current {
                next.mode = Mode::Error { reason };
                next.observed_playback = ObservedPlayback::Unstarted;
                next.current_time = 0.0;
                next.duration = 0.0;
            }
        }

        PlayerEvent::UserTogglePlay => {
            let desired = match state.desired_playback {
                DesiredPlayback::Playing => DesiredPlayback::Paused,
                DesiredPlayback::Paused => DesiredPlayback::Playing,
            };
            next.desired_playback = desired;
            if ready {
                commands.push(match desired {
                    DesiredPlayback::Playing => PlayerCommand::Play,
                    DesiredPlayback::Paused => PlayerCommand::Pause,
                });
            }
        }

        PlayerEvent::UserPlay => {
            next.desired_playback = DesiredPlayback::Playing;
            if ready {
                commands.push(PlayerCommand::Play);
            }
        }

        PlayerEvent::UserPause => {
            next.desired_playback = DesiredPlayback::Paused;
            if ready {
                commands.push(PlayerCommand::Pause);
            }
        }

        PlayerEvent::UserSeek { seconds } => {
            seek_to(&mut next, &mut commands, seconds, ready);
        }

        PlayerEvent::UserSkipForward => {
            seek_to(
                &mut next,
                &mut commands,
                state.current_time + SEEK_STEP_SECONDS,
                ready,
            );
        }

        PlayerEvent::UserSkipBackward => {
            seek_to(
                &mut next,
                &mut commands,
                state.current_time - SEEK_STEP_SECONDS,
                ready,
            );
        }

        PlayerEvent::UserSetVolume { volume } => {
            next.volume = volume.clamp(0, 100) as u8;
            if ready {
                commands.push(PlayerCommand::SetVolume {
                    volume: next.volume,
                });
            }
        }

        PlayerEvent::UserNextTrack => {
            commands.push(PlayerCommand::RequestNextTrack);
        }

        PlayerEvent::UserPreviousTrack => {
            commands.push(PlayerCommand::RequestPreviousTrack);
        }

        PlayerEvent::TimeTick { current_time } => {
            next.current_time = clamp(current_time, 0.0, upper_bound(state.duration));
        }

        PlayerEvent::PlayerStateChanged {
            state: observed,
            duration,
        } => {
            reconcile(state, &mut next, &mut commands, observed, duration);
        }

        PlayerEvent::UserToggleSliceRepeat => {
            next.slice_repeat.active = !state.slice_repeat.active;
        }

        PlayerEvent::UserSetSliceRepeatEnabled { enabled } => {
            next.slice_repeat.active = enabled;
        }

        PlayerEvent::UserSetSliceAutoRepeat { auto_repeat } => {
            next.slice_repeat.auto_repeat = auto_repeat;
        }

        PlayerEvent::UserClearSlice => {
            next.slice_repeat.start = None;
            next.slice_repeat.end = None;
        }

        PlayerEvent::UserSetSliceStart { seconds } => {
            next.slice_repeat = slice::with_start(state.slice_repeat, seconds, state.duration);
            replay_slice(&mut next, &mut commands, ready);
        }

        PlayerEvent::UserSetSliceEnd { seconds } => {
            next.slice_repeat = slice::with_end(state.slice_repeat, seconds, state.duration);
            replay_slice(&mut next, &mut commands, ready);
        }

        PlayerEvent::SliceBoundaryReached => {
            if let (Some(start), Some(_)) = (state.slice_repeat.start, state.slice_repeat.end) {
                if state.slice_repeat.auto_repeat {
                    let start = clamp(start, 0.0, upper_bound(state.duration));
                    next.current_time = start;
                    if ready {
                        commands.push(PlayerCommand::Seek { seconds: start });
                    }
                } else {
                    next.desired_playback = DesiredPlayback::Paused;
                    if ready {
                        commands.push(PlayerCommand::Pause);
                    }
                }
            }
        }
    }

    Transition {
        state: next.with_derived(),
        commands,
    }
}

/// Optimistically move to a clamped position and ask the backend to follow
fn seek_to(next: &mut PlayerState, commands: &mut Vec<PlayerCommand>, target: f64, ready: bool) {
    let target = clamp(target, 0.0, upper_bound(next.duration));
    next.current_time = target;
    if ready {
        commands.push(PlayerCommand::Seek { seconds: target });
    }
}

/// After a bound edit, jump to the loop start and play it
fn replay_slice(next: &mut PlayerState, commands: &mut Vec<PlayerCommand>, ready: bool) {
    if !ready {
        return;
    }
    if let Some(start) = next.slice_repeat.start {
        next.desired_playback = DesiredPlayback::Playing;
        commands.push(PlayerCommand::Seek { seconds: start });
        commands.push(PlayerCommand::Play);
    }
}

/// Align observed playback with desired playback after a backend report
///
/// Mode checks use the mode from before this event, so a `Loading` →
/// `Ready` promotion does not also trigger drift correction in the same step.
fn reconcile(
    state: &PlayerState,
    next: &mut PlayerState,
    commands: &mut Vec<PlayerCommand>,
    observed: ObservedPlayback,
    duration: Option<f64>,
) {
    next.observed_playback = observed;
    if let Some(duration) = duration.and_then(usable_duration) {
        next.duration = duration;
    }

    if observed == ObservedPlayback::Cued {
        next.current_time = 0.0;
    } else if next.duration > 0.0 && next.current_time > next.duration {
        next.current_time = next.duration;
    }

    if let Mode::Loading { video_id, .. } = &state.mode {
        if observed.confirms_load() {
            next.mode = Mode::Ready {
                video_id: video_id.clone(),
            };
        }
    }

    if state.mode.is_ready() {
        match (state.desired_playback, observed) {
            (DesiredPlayback::Paused, ObservedPlayback::Playing) => {
                commands.push(PlayerCommand::Pause);
            }
            (DesiredPlayback::Playing, ObservedPlayback::Paused) => {
                commands.push(PlayerCommand::Play);
            }
            _ => {}
        }
    }

    if observed == ObservedPlayback::Cued && state.desired_playback == DesiredPlayback::Playing {
        commands.push(PlayerCommand::Play);
    }

    if observed == ObservedPlayback::Ended {
        commands.push(PlayerCommand::RequestNextTrack);
    }
}
