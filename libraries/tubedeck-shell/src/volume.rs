//! Perceptual volume curve
//!
//! Maps the 0-100 volume held in player state onto a backend's linear
//! 0-100 scale with an exponential curve, so equal slider steps sound like
//! equal loudness steps.

use std::f64::consts::E;

/// Convert a 0-100 volume to the backend's linear 0-100 level
///
/// Formula: level = (e^(v/100) - 1) / (e - 1) * 100
/// - 0   → 0
/// - 50  → ~37.8
/// - 100 → 100
pub fn perceptual_volume(volume: u8) -> f64 {
    let fraction = f64::from(volume.min(100)) / 100.0;
    (fraction.exp() - 1.0) / (E - 1.0) * 100.0
}
