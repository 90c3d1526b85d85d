//! Command runner
//!
//! Executes reducer commands in emission order: backend commands go to the
//! media backend, next/previous requests go to the queue provider. Anything
//! that must flow back into the reducer is returned as follow-up events.

use crate::backend::MediaBackend;
use crate::error::BackendError;
use crate::queue::{QueueProvider, RepeatMode};
use crate::volume::perceptual_volume;
use tubedeck_core::{PlayerCommand, PlayerEvent, VideoId};

/// What happened while running one batch of commands
#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
    /// Commands the backend or queue accepted
    pub executed: usize,

    /// Commands the backend rejected, with the reason
    pub failures: Vec<(PlayerCommand, BackendError)>,

    /// Events to feed back into the reducer, in order
    pub follow_up: Vec<PlayerEvent>,
}

/// Drives a media backend and a queue provider from reducer commands
pub struct CommandRunner<B, Q> {
    backend: B,
    queue: Q,
}

impl<B: MediaBackend, Q: QueueProvider> CommandRunner<B, Q> {
    pub fn new(backend: B, queue: Q) -> Self {
        Self { backend, queue }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    /// Execute a batch of commands
    ///
    /// A rejected command is logged and recorded; the rest of the batch still
    /// runs.
    pub fn run(&mut self, commands: &[PlayerCommand]) -> RunReport {
        let mut report = RunReport::default();

        for command in commands {
            tracing::debug!(?command, "Executing command");
            match self.execute(command, &mut report.follow_up) {
                Ok(()) => report.executed += 1,
                Err(e) => {
                    tracing::warn!(?command, error = %e, "Backend rejected command");
                    report.failures.push((command.clone(), e));
                }
            }
        }

        report
    }

    fn execute(
        &mut self,
        command: &PlayerCommand,
        follow_up: &mut Vec<PlayerEvent>,
    ) -> Result<(), BackendError> {
        match command {
            PlayerCommand::Play => self.backend.play(),
            PlayerCommand::Pause => self.backend.pause(),
            PlayerCommand::Seek { seconds } => self.backend.seek(*seconds),
            PlayerCommand::Load {
                video_id,
                autoplay: true,
            } => self.backend.load(video_id),
            PlayerCommand::Load {
                video_id,
                autoplay: false,
            } => self.backend.cue(video_id),
            PlayerCommand::SetVolume { volume } => {
                self.backend.set_volume(perceptual_volume(*volume))
            }
            PlayerCommand::RequestNextTrack => {
                if self.queue.repeat_mode() == RepeatMode::One {
                    // Restart the current track instead of advancing
                    follow_up.push(PlayerEvent::UserSeek { seconds: 0.0 });
                    follow_up.push(PlayerEvent::UserPlay);
                } else {
                    let next = self.queue.next();
                    forward_selection(next, "next", follow_up);
                }
                Ok(())
            }
            PlayerCommand::RequestPreviousTrack => {
                let previous = self.queue.previous();
                forward_selection(previous, "previous", follow_up);
                Ok(())
            }
        }
    }
}

fn forward_selection(answer: Option<VideoId>, direction: &str, follow_up: &mut Vec<PlayerEvent>) {
    match answer {
        Some(video_id) => {
            tracing::debug!(%video_id, direction, "Queue selected track");
            follow_up.push(PlayerEvent::TrackSelected {
                video_id,
                autoplay: true,
            });
        }
        None => tracing::debug!(direction, "Queue has no track"),
    }
}
