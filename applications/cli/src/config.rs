/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tubedeck_core::VideoId;
use tubedeck_queue::PlaylistQueue;
use tubedeck_shell::{ControllerConfig, RepeatMode};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tubedeck.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub queue: QueueSettings,

    #[serde(default)]
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_initial_volume")]
    pub initial_volume: u32,

    #[serde(default = "default_check_invariants")]
    pub check_invariants: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueueSettings {
    #[serde(default)]
    pub tracks: Vec<String>,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: RepeatMode,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Position the simulated backend reports before any seek
    #[serde(default)]
    pub clock_seconds: Option<f64>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            check_invariants: default_check_invariants(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `tubedeck.toml` in the
    /// working directory is used when present. `TUBEDECK_*` variables
    /// override both, with `__` between section and key
    /// (`TUBEDECK_PLAYBACK__INITIAL_VOLUME=40`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUBEDECK")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("queue.tracks")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playback.initial_volume > 100 {
            return Err(CliError::Config(format!(
                "Initial volume must be between 0 and 100, got {}",
                self.playback.initial_volume
            )));
        }

        if let Some(position) = self.queue.tracks.iter().position(|t| t.trim().is_empty()) {
            return Err(CliError::Config(format!(
                "Track {} in queue.tracks is empty",
                position
            )));
        }

        if let Some(clock) = self.backend.clock_seconds {
            if !clock.is_finite() || clock < 0.0 {
                return Err(CliError::Config(format!(
                    "Backend clock must be a non-negative number, got {}",
                    clock
                )));
            }
        }

        Ok(())
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            initial_volume: self.playback.initial_volume.min(100) as u8,
            check_invariants: self.playback.check_invariants,
        }
    }

    /// Build the playlist described by the `queue` section
    pub fn build_queue(&self) -> Result<PlaylistQueue> {
        let tracks = self
            .queue
            .tracks
            .iter()
            .map(|t| VideoId::new(t.trim()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut queue = PlaylistQueue::new(tracks).with_repeat(self.queue.repeat);
        queue.set_shuffle(self.queue.shuffle);
        Ok(queue)
    }
}

// Default values
fn default_initial_volume() -> u32 {
    100
}

fn default_check_invariants() -> bool {
    true
}
