//! Tubedeck - Playlist Queue
//!
//! A `QueueProvider` backed by an in-memory playlist.
//!
//! # Example
//!
//! ```rust
//! use tubedeck_core::VideoId;
//! use tubedeck_queue::PlaylistQueue;
//! use tubedeck_shell::{QueueProvider, RepeatMode};
//!
//! let tracks = ["a", "b"].iter().map(|id| VideoId::new(*id).unwrap()).collect();
//! let mut queue = PlaylistQueue::new(tracks).with_repeat(RepeatMode::All);
//!
//! assert_eq!(queue.next().unwrap().as_str(), "a");
//! assert_eq!(queue.next().unwrap().as_str(), "b");
//! assert_eq!(queue.next().unwrap().as_str(), "a");
//! ```

mod playlist;
mod shuffle;

pub use playlist::PlaylistQueue;
