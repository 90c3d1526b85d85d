/// Script replay and invariant checking
use crate::config::CliConfig;
use crate::error::Result;
use crate::simulated::{BackendCall, SimulatedBackend};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tubedeck_core::{
    check_invariants, reduce, InvariantViolation, PlayerEvent, PlayerState, VideoId,
};
use tubedeck_queue::PlaylistQueue;
use tubedeck_shell::{AppliedStep, PlayerController};

/// Read a JSON array of events
pub fn load_script(path: &Path) -> Result<Vec<PlayerEvent>> {
    let text = std::fs::read_to_string(path)?;
    let events = serde_json::from_str(&text)?;
    Ok(events)
}

/// One output line per scripted event
#[derive(Debug, Serialize)]
struct ReplayLine<'a> {
    index: usize,
    steps: &'a [AppliedStep],
    failures: usize,
    state: &'a PlayerState,
}

/// Totals printed after the last event
#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub steps: usize,
    pub failures: usize,
    pub violations: Vec<String>,
    pub calls: Vec<BackendCall>,
    pub state: PlayerState,
}

/// Run events through a controller on the simulated backend
///
/// Writes one JSON line per event to `out`. With `poll`, the backend clock is
/// sampled after each event the way a host timer would.
pub fn replay<W: Write>(
    events: Vec<PlayerEvent>,
    config: &CliConfig,
    poll: bool,
    out: &mut W,
) -> Result<ReplaySummary> {
    let backend = SimulatedBackend::new(config.backend.clock_seconds);
    let queue = config.build_queue()?;
    let mut controller = PlayerController::with_config(backend, queue, config.controller_config());

    let total = events.len();
    let mut step_count = 0;
    let mut failures = 0;
    let mut violations = Vec::new();

    for (index, event) in events.into_iter().enumerate() {
        if let PlayerEvent::TrackSelected { video_id, .. } = &event {
            sync_queue(controller.queue_mut(), video_id);
        }

        let mut outcome = controller.dispatch(event);
        if poll {
            let polled = controller.poll_time();
            outcome.steps.extend(polled.steps);
            outcome.failures += polled.failures;
            outcome.violations.extend(polled.violations);
        }

        let line = ReplayLine {
            index,
            steps: &outcome.steps,
            failures: outcome.failures,
            state: controller.state(),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;

        step_count += outcome.steps.len();
        failures += outcome.failures;
        violations.extend(outcome.violations.iter().map(ToString::to_string));
    }

    tracing::info!(events = total, steps = step_count, "Replay finished");

    Ok(ReplaySummary {
        events: total,
        steps: step_count,
        failures,
        violations,
        calls: controller.backend().calls().to_vec(),
        state: controller.state().clone(),
    })
}

/// Point the playlist at a directly selected track so next/previous
/// continue from it. Ids outside the playlist leave it untouched.
fn sync_queue(queue: &mut PlaylistQueue, video_id: &VideoId) {
    if let Some(index) = queue.tracks().iter().position(|t| t == video_id) {
        queue.jump_to(index);
    }
}

/// First invariant violation found by `check`
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    pub index: usize,
    pub event: PlayerEvent,
    pub violation: InvariantViolation,
}

/// Result of running the reducer alone over a script
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Events applied before stopping
    pub applied: usize,
    pub state: PlayerState,
    pub failure: Option<CheckFailure>,
}

/// Apply events with the bare reducer, stopping at the first violation
///
/// Commands are discarded, so no queue or backend is involved.
pub fn check(events: &[PlayerEvent], initial_volume: u8) -> CheckReport {
    let mut state = PlayerState::with_volume(initial_volume);

    for (index, event) in events.iter().enumerate() {
        state = reduce(&state, event.clone()).state;

        if let Err(violation) = check_invariants(&state) {
            tracing::error!(index, event = event.name(), %violation, "Invariant violated");
            return CheckReport {
                applied: index + 1,
                state,
                failure: Some(CheckFailure {
                    index,
                    event: event.clone(),
                    violation,
                }),
            };
        }
    }

    CheckReport {
        applied: events.len(),
        state,
        failure: None,
    }
}
