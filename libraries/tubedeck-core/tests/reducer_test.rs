//! Transition tests for the reducer
//!
//! Every test runs the invariant checker after each step.

use tubedeck_core::{
    check_invariants, reduce, DesiredPlayback, Mode, ObservedPlayback, PlayerCommand, PlayerEvent,
    PlayerState, Transition, VideoId,
};

// ===== Test Helpers =====

fn vid(id: &str) -> VideoId {
    VideoId::new(id).unwrap()
}

fn step(state: &PlayerState, event: PlayerEvent) -> Transition {
    let t = reduce(state, event);
    check_invariants(&t.state).expect("invariants hold after every step");
    t
}

/// Ready backend with `id` loaded and a known duration
fn ready_state(id: &str, duration: f64, desired: DesiredPlayback) -> PlayerState {
    let mut state = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: 0.0 }).state;
    state = step(
        &state,
        PlayerEvent::TrackSelected {
            video_id: vid(id),
            autoplay: desired == DesiredPlayback::Playing,
        },
    )
    .state;
    state = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Cued,
            duration: Some(duration),
        },
    )
    .state;
    assert_eq!(state.mode, Mode::Ready { video_id: vid(id) });
    state
}

// ===== Lifecycle =====

#[test]
fn test_player_ready_adopts_positive_duration_only() {
    let t = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: 95.0 });
    assert!(t.state.player_ready);
    assert_eq!(t.state.duration, 95.0);
    assert!(t.commands.is_empty());

    let t = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: -4.0 });
    assert_eq!(t.state.duration, 0.0);

    let t = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: f64::NAN });
    assert_eq!(t.state.duration, 0.0);
}

#[test]
fn test_player_ready_replays_play_intent_for_ready_media() {
    let mut state = ready_state("abc", 100.0, DesiredPlayback::Playing);
    state.player_ready = false;

    let t = step(&state, PlayerEvent::PlayerReady { duration: 100.0 });
    assert_eq!(t.commands, vec![PlayerCommand::Play]);
}

#[test]
fn test_player_ready_without_media_emits_nothing() {
    let state = step(&PlayerState::new(), PlayerEvent::UserPlay).state;
    let t = step(&state, PlayerEvent::PlayerReady { duration: 0.0 });
    assert!(t.commands.is_empty());
}

// ===== Deferred command emission =====

#[test]
fn test_user_play_before_ready_is_deferred() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Paused);
    let state = PlayerState {
        player_ready: false,
        ..state
    };

    let t = step(&state, PlayerEvent::UserPlay);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Playing);
    assert!(t.commands.is_empty());

    let t = step(&t.state, PlayerEvent::PlayerReady { duration: 100.0 });
    let plays = t
        .commands
        .iter()
        .filter(|c| **c == PlayerCommand::Play)
        .count();
    assert_eq!(plays, 1);
}

#[test]
fn test_track_selected_before_ready_defers_load() {
    let t = step(
        &PlayerState::new(),
        PlayerEvent::TrackSelected {
            video_id: vid("abc"),
            autoplay: false,
        },
    );
    assert!(t.commands.is_empty());
    assert!(t.state.is_loading_new_video);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Paused);

    let t = step(&t.state, PlayerEvent::PlayerReady { duration: 0.0 });
    assert_eq!(
        t.commands,
        vec![PlayerCommand::Load {
            video_id: vid("abc"),
            autoplay: false,
        }]
    );
}

#[test]
fn test_track_selected_resets_position() {
    let mut state = ready_state("abc", 100.0, DesiredPlayback::Playing);
    state = step(&state, PlayerEvent::TimeTick { current_time: 42.0 }).state;

    let t = step(
        &state,
        PlayerEvent::TrackSelected {
            video_id: vid("def"),
            autoplay: true,
        },
    );
    assert_eq!(t.state.current_time, 0.0);
    assert_eq!(t.state.duration, 0.0);
    assert_eq!(t.state.observed_playback, ObservedPlayback::Paused);
    assert_eq!(
        t.commands,
        vec![PlayerCommand::Load {
            video_id: vid("def"),
            autoplay: true,
        }]
    );
}

// ===== User intent =====

#[test]
fn test_toggle_play_flips_intent() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Paused);

    let t = step(&state, PlayerEvent::UserTogglePlay);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Playing);
    assert_eq!(t.commands, vec![PlayerCommand::Play]);
    assert_eq!(t.state.pending_play_state, Some(DesiredPlayback::Playing));

    let t = step(&t.state, PlayerEvent::UserTogglePlay);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Paused);
    assert_eq!(t.commands, vec![PlayerCommand::Pause]);
    assert_eq!(t.state.pending_play_state, None);
}

#[test]
fn test_pause_before_ready_records_intent_only() {
    let t = step(&PlayerState::new(), PlayerEvent::UserPause);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Paused);
    assert!(t.commands.is_empty());
}

// ===== Seeking =====

#[test]
fn test_seek_is_clamped_to_duration() {
    let state = ready_state("abc", 180.0, DesiredPlayback::Paused);

    let t = step(&state, PlayerEvent::UserSeek { seconds: -50.0 });
    assert_eq!(t.state.current_time, 0.0);
    assert_eq!(t.commands, vec![PlayerCommand::Seek { seconds: 0.0 }]);

    let t = step(&state, PlayerEvent::UserSeek { seconds: 500.0 });
    assert_eq!(t.state.current_time, 180.0);
    assert_eq!(t.commands, vec![PlayerCommand::Seek { seconds: 180.0 }]);
}

#[test]
fn test_seek_without_duration_is_unbounded_above() {
    let state = PlayerState::new();
    let t = step(&state, PlayerEvent::UserSeek { seconds: 75.0 });
    assert_eq!(t.state.current_time, 75.0);
    assert!(t.commands.is_empty());

    let t = step(&state, PlayerEvent::UserSeek { seconds: -75.0 });
    assert_eq!(t.state.current_time, 0.0);
}

#[test]
fn test_infinite_seek_lands_on_the_nearest_bound() {
    let state = ready_state("abc", 180.0, DesiredPlayback::Paused);

    let t = step(&state, PlayerEvent::UserSeek { seconds: f64::INFINITY });
    assert_eq!(t.state.current_time, 180.0);
    assert_eq!(t.commands, vec![PlayerCommand::Seek { seconds: 180.0 }]);

    let t = step(&state, PlayerEvent::UserSeek { seconds: f64::NEG_INFINITY });
    assert_eq!(t.state.current_time, 0.0);

    let t = step(&state, PlayerEvent::TimeTick { current_time: f64::INFINITY });
    assert_eq!(t.state.current_time, 180.0);

    // Unknown duration: stays finite
    let t = step(&PlayerState::new(), PlayerEvent::UserSeek { seconds: f64::INFINITY });
    assert_eq!(t.state.current_time, f64::MAX);
}

#[test]
fn test_skip_steps_ten_seconds() {
    let mut state = ready_state("abc", 180.0, DesiredPlayback::Playing);
    state = step(&state, PlayerEvent::TimeTick { current_time: 175.0 }).state;

    let t = step(&state, PlayerEvent::UserSkipForward);
    assert_eq!(t.state.current_time, 180.0);

    let t = step(&t.state, PlayerEvent::UserSkipBackward);
    assert_eq!(t.state.current_time, 170.0);
    assert_eq!(t.commands, vec![PlayerCommand::Seek { seconds: 170.0 }]);

    let state = step(&state, PlayerEvent::UserSeek { seconds: 4.0 }).state;
    let t = step(&state, PlayerEvent::UserSkipBackward);
    assert_eq!(t.state.current_time, 0.0);
}

// ===== Volume =====

#[test]
fn test_volume_is_clamped() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Paused);

    let t = step(&state, PlayerEvent::UserSetVolume { volume: 140 });
    assert_eq!(t.state.volume, 100);
    assert_eq!(t.commands, vec![PlayerCommand::SetVolume { volume: 100 }]);

    let t = step(&state, PlayerEvent::UserSetVolume { volume: -3 });
    assert_eq!(t.state.volume, 0);

    let t = step(&PlayerState::new(), PlayerEvent::UserSetVolume { volume: 30 });
    assert_eq!(t.state.volume, 30);
    assert!(t.commands.is_empty());
}

// ===== Queue requests =====

#[test]
fn test_next_and_previous_only_emit_requests() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Playing);

    let t = step(&state, PlayerEvent::UserNextTrack);
    assert_eq!(t.commands, vec![PlayerCommand::RequestNextTrack]);
    assert_eq!(t.state, state);

    let t = step(&state, PlayerEvent::UserPreviousTrack);
    assert_eq!(t.commands, vec![PlayerCommand::RequestPreviousTrack]);
    assert_eq!(t.state, state);
}

// ===== Time ticks =====

#[test]
fn test_time_tick_is_clamped_and_silent() {
    let state = ready_state("abc", 60.0, DesiredPlayback::Playing);

    let t = step(&state, PlayerEvent::TimeTick { current_time: 90.0 });
    assert_eq!(t.state.current_time, 60.0);
    assert!(t.commands.is_empty());

    let t = step(&state, PlayerEvent::TimeTick { current_time: f64::NAN });
    assert_eq!(t.state.current_time, 0.0);
}

// ===== Reconciliation =====

#[test]
fn test_paused_intent_corrects_every_playing_report() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Paused);
    let mut current = state;

    for _ in 0..3 {
        let t = step(
            &current,
            PlayerEvent::PlayerStateChanged {
                state: ObservedPlayback::Playing,
                duration: None,
            },
        );
        assert_eq!(t.commands, vec![PlayerCommand::Pause]);
        assert_eq!(t.state.desired_playback, DesiredPlayback::Paused);
        current = t.state;
    }
}

#[test]
fn test_playing_intent_corrects_paused_report() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Playing);
    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Paused,
            duration: None,
        },
    );
    assert_eq!(t.commands, vec![PlayerCommand::Play]);
    assert_eq!(t.state.desired_playback, DesiredPlayback::Playing);
}

#[test]
fn test_matching_report_emits_nothing() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Playing);
    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Playing,
            duration: None,
        },
    );
    assert!(t.commands.is_empty());
    assert!(t.state.is_playing);
    assert_eq!(t.state.pending_play_state, None);
}

#[test]
fn test_ended_always_requests_next() {
    for desired in [DesiredPlayback::Playing, DesiredPlayback::Paused] {
        let state = ready_state("abc", 100.0, desired);
        let t = step(
            &state,
            PlayerEvent::PlayerStateChanged {
                state: ObservedPlayback::Ended,
                duration: None,
            },
        );
        assert_eq!(t.commands, vec![PlayerCommand::RequestNextTrack]);
    }
}

#[test]
fn test_buffering_confirms_load() {
    let state = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: 0.0 }).state;
    let state = step(
        &state,
        PlayerEvent::TrackSelected {
            video_id: vid("abc"),
            autoplay: true,
        },
    )
    .state;

    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Buffering,
            duration: Some(30.0),
        },
    );
    assert_eq!(t.state.mode, Mode::Ready { video_id: vid("abc") });
    assert!(!t.state.is_loading_new_video);
    assert!(t.commands.is_empty());
}

#[test]
fn test_unstarted_does_not_confirm_load() {
    let state = step(
        &PlayerState::new(),
        PlayerEvent::TrackSelected {
            video_id: vid("abc"),
            autoplay: false,
        },
    )
    .state;

    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Unstarted,
            duration: None,
        },
    );
    assert!(t.state.mode.is_loading());
}

#[test]
fn test_cued_resets_time() {
    let mut state = ready_state("abc", 100.0, DesiredPlayback::Paused);
    state = step(&state, PlayerEvent::TimeTick { current_time: 33.0 }).state;
    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Cued,
            duration: None,
        },
    );
    assert_eq!(t.state.current_time, 0.0);
    assert!(t.commands.is_empty());
}

#[test]
fn test_shorter_reported_duration_pulls_time_back() {
    let state = step(&PlayerState::new(), PlayerEvent::TimeTick { current_time: 500.0 }).state;
    let t = step(
        &state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Playing,
            duration: Some(212.0),
        },
    );
    assert_eq!(t.state.duration, 212.0);
    assert_eq!(t.state.current_time, 212.0);
}

// ===== Load failure =====

#[test]
fn test_load_failed_enters_error_mode() {
    let state = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: 0.0 }).state;
    let state = step(
        &state,
        PlayerEvent::TrackSelected {
            video_id: vid("gone"),
            autoplay: true,
        },
    )
    .state;

    let t = step(
        &state,
        PlayerEvent::LoadFailed {
            request_id: 1,
            reason: "video unavailable".to_string(),
        },
    );
    assert_eq!(
        t.state.mode,
        Mode::Error {
            reason: "video unavailable".to_string()
        }
    );
    assert_eq!(t.state.observed_playback, ObservedPlayback::Unstarted);
    assert!(t.commands.is_empty());
    assert!(!t.state.is_loading_new_video);

    // A late status report does not resurrect the failed load
    let t = step(
        &t.state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Paused,
            duration: None,
        },
    );
    assert!(matches!(t.state.mode, Mode::Error { .. }));

    // Selecting another track recovers
    let t = step(
        &t.state,
        PlayerEvent::TrackSelected {
            video_id: vid("next"),
            autoplay: true,
        },
    );
    assert!(t.state.mode.is_loading());
    assert_eq!(t.state.load_request_id, 2);
}

#[test]
fn test_stale_load_failure_is_ignored() {
    let mut state = step(&PlayerState::new(), PlayerEvent::PlayerReady { duration: 0.0 }).state;
    for id in ["first", "second"] {
        state = step(
            &state,
            PlayerEvent::TrackSelected {
                video_id: vid(id),
                autoplay: false,
            },
        )
        .state;
    }

    // Failure of the replaced load arrives late
    let t = step(
        &state,
        PlayerEvent::LoadFailed {
            request_id: 1,
            reason: "first unavailable".to_string(),
        },
    );
    assert_eq!(t.state, state);

    let t = step(
        &t.state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Cued,
            duration: Some(100.0),
        },
    );
    assert_eq!(t.state.mode, Mode::Ready { video_id: vid("second") });

    // Drift correction is live for the new track
    let t = step(
        &t.state,
        PlayerEvent::PlayerStateChanged {
            state: ObservedPlayback::Playing,
            duration: None,
        },
    );
    assert_eq!(t.commands, vec![PlayerCommand::Pause]);
}

#[test]
fn test_load_failure_without_a_load_is_ignored() {
    let state = PlayerState::new();
    let t = step(
        &state,
        PlayerEvent::LoadFailed {
            request_id: 0,
            reason: "nothing loaded".to_string(),
        },
    );
    assert_eq!(t.state.mode, Mode::Uninitialized);
}

#[test]
fn test_load_failure_for_ready_media() {
    let state = ready_state("abc", 100.0, DesiredPlayback::Playing);
    let t = step(
        &state,
        PlayerEvent::LoadFailed {
            request_id: state.load_request_id,
            reason: "stream dropped".to_string(),
        },
    );
    assert!(matches!(t.state.mode, Mode::Error { .. }));
    assert_eq!(t.state.duration, 0.0);
}
