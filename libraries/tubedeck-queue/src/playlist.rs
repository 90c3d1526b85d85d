//! Playlist queue
//!
//! Index-based navigation over a fixed track list. Shuffle only reorders the
//! play order, so turning it off restores the original sequence with the
//! current track still selected.

use crate::shuffle::shuffled_order;
use rand::Rng;
use tubedeck_core::VideoId;
use tubedeck_shell::{QueueProvider, RepeatMode};

/// Ordered list of videos with shuffle and repeat
#[derive(Debug, Clone, Default)]
pub struct PlaylistQueue {
    tracks: Vec<VideoId>,

    /// Play order as indices into `tracks`
    order: Vec<usize>,

    /// Position in `order` of the current track
    position: Option<usize>,

    shuffled: bool,
    repeat: RepeatMode,
}

impl PlaylistQueue {
    /// Create a queue with nothing selected yet
    pub fn new(tracks: Vec<VideoId>) -> Self {
        let order = (0..tracks.len()).collect();
        Self {
            tracks,
            order,
            position: None,
            shuffled: false,
            repeat: RepeatMode::Off,
        }
    }

    pub fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in their original order
    pub fn tracks(&self) -> &[VideoId] {
        &self.tracks
    }

    /// Currently selected track, if any
    pub fn current(&self) -> Option<&VideoId> {
        self.position
            .and_then(|p| self.order.get(p))
            .and_then(|&i| self.tracks.get(i))
    }

    /// Index of the current track in the original order
    pub fn current_index(&self) -> Option<usize> {
        self.position.and_then(|p| self.order.get(p)).copied()
    }

    /// Tracks after the current one, in play order
    pub fn upcoming(&self) -> Vec<&VideoId> {
        let start = self.position.map_or(0, |p| p + 1);
        self.order
            .iter()
            .skip(start)
            .filter_map(|&i| self.tracks.get(i))
            .collect()
    }

    /// Replace the track list and clear the selection
    ///
    /// Shuffle and repeat settings are kept.
    pub fn replace_tracks(&mut self, tracks: Vec<VideoId>) {
        self.tracks = tracks;
        self.position = None;
        self.order = if self.shuffled {
            shuffled_order(self.tracks.len(), None, &mut rand::thread_rng())
        } else {
            (0..self.tracks.len()).collect()
        };
    }

    /// Select a track by its original index
    pub fn jump_to(&mut self, index: usize) -> Option<VideoId> {
        let position = self.order.iter().position(|&i| i == index)?;
        self.position = Some(position);
        self.current().cloned()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Turn shuffle on or off using the thread RNG
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.set_shuffle_with(enabled, &mut rand::thread_rng());
    }

    /// Turn shuffle on or off with a caller-supplied RNG
    ///
    /// The current track stays current in both directions.
    pub fn set_shuffle_with<R: Rng + ?Sized>(&mut self, enabled: bool, rng: &mut R) {
        let current = self.current_index();

        self.order = if enabled {
            shuffled_order(self.tracks.len(), current, rng)
        } else {
            (0..self.tracks.len()).collect()
        };
        self.shuffled = enabled;
        self.position = current.and_then(|c| self.order.iter().position(|&i| i == c));
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    fn select(&mut self, position: usize) -> Option<VideoId> {
        self.position = Some(position);
        self.current().cloned()
    }
}

impl QueueProvider for PlaylistQueue {
    fn next(&mut self) -> Option<VideoId> {
        if self.tracks.is_empty() {
            return None;
        }

        let next = self.position.map_or(0, |p| p + 1);
        if next < self.order.len() {
            return self.select(next);
        }

        match self.repeat {
            RepeatMode::All => {
                if self.shuffled {
                    self.order = shuffled_order(self.tracks.len(), None, &mut rand::thread_rng());
                }
                self.select(0)
            }
            RepeatMode::Off | RepeatMode::One => None,
        }
    }

    fn previous(&mut self) -> Option<VideoId> {
        let position = self.position?;

        if position > 0 {
            return self.select(position - 1);
        }

        match self.repeat {
            RepeatMode::All => self.select(self.order.len().checked_sub(1)?),
            RepeatMode::Off | RepeatMode::One => None,
        }
    }

    fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }
}
