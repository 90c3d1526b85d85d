//! Player controller - the single dispatch point
//!
//! Owns the one live `PlayerState`, applies events strictly one at a time in
//! arrival order, runs the resulting commands, and queues any follow-up
//! events behind whatever is already pending.

use crate::backend::MediaBackend;
use crate::queue::QueueProvider;
use crate::runner::CommandRunner;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tubedeck_core::{
    check_invariants, reduce, InvariantViolation, ObservedPlayback, PlayerCommand, PlayerEvent,
    PlayerState,
};

/// Configuration for the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Initial volume (0-100, default: 100)
    pub initial_volume: u8,

    /// Run the invariant checker after each step (default: debug builds only)
    pub check_invariants: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            check_invariants: cfg!(debug_assertions),
        }
    }
}

/// One event applied during a dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedStep {
    pub event: PlayerEvent,
    pub commands: Vec<PlayerCommand>,
}

/// Everything that happened while draining one dispatch
#[derive(Debug, Default, PartialEq)]
pub struct DispatchOutcome {
    /// Applied events in order, the dispatched one first
    pub steps: Vec<AppliedStep>,

    /// Commands the backend rejected
    pub failures: usize,

    /// Invariant violations seen (only when checking is enabled)
    pub violations: Vec<InvariantViolation>,
}

impl DispatchOutcome {
    /// All commands emitted, in execution order
    pub fn commands(&self) -> impl Iterator<Item = &PlayerCommand> {
        self.steps.iter().flat_map(|s| s.commands.iter())
    }

    fn absorb(&mut self, other: DispatchOutcome) {
        self.steps.extend(other.steps);
        self.failures += other.failures;
        self.violations.extend(other.violations);
    }
}

/// Serializes events into the reducer and commands out to the backend
pub struct PlayerController<B, Q> {
    state: PlayerState,
    runner: CommandRunner<B, Q>,
    pending: VecDeque<PlayerEvent>,
    check_invariants: bool,

    /// Request id of the last `Load` handed to the backend, 0 before any
    sent_load: u64,
}

impl<B: MediaBackend, Q: QueueProvider> PlayerController<B, Q> {
    /// Create a controller with default configuration
    pub fn new(backend: B, queue: Q) -> Self {
        Self::with_config(backend, queue, ControllerConfig::default())
    }

    pub fn with_config(backend: B, queue: Q, config: ControllerConfig) -> Self {
        Self {
            state: PlayerState::with_volume(config.initial_volume),
            runner: CommandRunner::new(backend, queue),
            pending: VecDeque::new(),
            check_invariants: config.check_invariants,
            sent_load: 0,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        self.runner.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.runner.backend_mut()
    }

    pub fn queue(&self) -> &Q {
        self.runner.queue()
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        self.runner.queue_mut()
    }

    /// Apply an event and everything it causes
    ///
    /// Follow-up events from the runner (queue answers, repeat-one restarts)
    /// are applied after the event that produced them, before returning.
    pub fn dispatch(&mut self, event: PlayerEvent) -> DispatchOutcome {
        self.pending.push_back(event);
        let mut outcome = DispatchOutcome::default();

        while let Some(event) = self.pending.pop_front() {
            tracing::debug!(event = event.name(), "Applying event");
            let transition = reduce(&self.state, event.clone());

            if self.check_invariants {
                if let Err(violation) = check_invariants(&transition.state) {
                    tracing::error!(%violation, event = event.name(), "Player invariant violated");
                    outcome.violations.push(violation);
                }
            }

            self.state = transition.state;
            if transition
                .commands
                .iter()
                .any(|c| matches!(c, PlayerCommand::Load { .. }))
            {
                self.sent_load = self.state.load_request_id;
            }
            let report = self.runner.run(&transition.commands);
            outcome.failures += report.failures.len();
            self.pending.extend(report.follow_up);
            outcome.steps.push(AppliedStep {
                event,
                commands: transition.commands,
            });
        }

        outcome
    }

    /// Sample the backend clock and fire the A-B loop boundary if crossed
    ///
    /// Meant to be called from the caller's timer (every 250 ms or so while
    /// playing).
    pub fn poll_time(&mut self) -> DispatchOutcome {
        let Some(current_time) = self.runner.backend().current_time() else {
            return DispatchOutcome::default();
        };

        let mut outcome = self.dispatch(PlayerEvent::TimeTick { current_time });

        let slice = self.state.slice_repeat;
        let crossed = slice.active
            && slice.is_set()
            && slice.end.is_some_and(|end| self.state.current_time >= end);
        if crossed {
            outcome.absorb(self.dispatch(PlayerEvent::SliceBoundaryReached));
        }

        outcome
    }

    /// Backend callback: the player instance is ready
    pub fn on_ready(&mut self, duration: f64) -> DispatchOutcome {
        self.dispatch(PlayerEvent::PlayerReady { duration })
    }

    /// Backend callback: raw playback state code changed
    ///
    /// Unknown codes are ignored.
    pub fn on_state_code(&mut self, code: i32, duration: Option<f64>) -> DispatchOutcome {
        match ObservedPlayback::from_code(code) {
            Some(state) => self.dispatch(PlayerEvent::PlayerStateChanged { state, duration }),
            None => {
                tracing::debug!(code, "Ignoring unknown backend state code");
                DispatchOutcome::default()
            }
        }
    }

    /// Backend callback: the requested media could not be loaded
    ///
    /// The failure is attributed to the last load sent to the backend, so a
    /// selection that has not reached the backend yet is left alone.
    pub fn on_error(&mut self, reason: impl Into<String>) -> DispatchOutcome {
        self.dispatch(PlayerEvent::LoadFailed {
            request_id: self.sent_load,
            reason: reason.into(),
        })
    }
}
