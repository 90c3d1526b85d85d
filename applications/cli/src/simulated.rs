/// In-memory media backend for script replay
use serde::Serialize;
use tubedeck_core::VideoId;
use tubedeck_shell::{BackendResult, MediaBackend};

/// A backend call as recorded by `SimulatedBackend`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum BackendCall {
    Play,
    Pause,
    Seek { seconds: f64 },
    Load { video_id: VideoId },
    Cue { video_id: VideoId },
    SetVolume { level: f64 },
}

/// Records every call and reports a clock that only moves on seek
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    calls: Vec<BackendCall>,
    clock: Option<f64>,
}

impl SimulatedBackend {
    pub fn new(clock: Option<f64>) -> Self {
        Self {
            calls: Vec::new(),
            clock,
        }
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }
}

impl MediaBackend for SimulatedBackend {
    fn play(&mut self) -> BackendResult<()> {
        self.calls.push(BackendCall::Play);
        Ok(())
    }

    fn pause(&mut self) -> BackendResult<()> {
        self.calls.push(BackendCall::Pause);
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> BackendResult<()> {
        self.calls.push(BackendCall::Seek { seconds });
        self.clock = Some(seconds);
        Ok(())
    }

    fn load(&mut self, video_id: &VideoId) -> BackendResult<()> {
        self.calls.push(BackendCall::Load {
            video_id: video_id.clone(),
        });
        self.clock = Some(0.0);
        Ok(())
    }

    fn cue(&mut self, video_id: &VideoId) -> BackendResult<()> {
        self.calls.push(BackendCall::Cue {
            video_id: video_id.clone(),
        });
        self.clock = Some(0.0);
        Ok(())
    }

    fn set_volume(&mut self, level: f64) -> BackendResult<()> {
        self.calls.push(BackendCall::SetVolume { level });
        Ok(())
    }

    fn current_time(&self) -> Option<f64> {
        self.clock
    }
}
