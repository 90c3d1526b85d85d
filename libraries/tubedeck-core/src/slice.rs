//! A-B loop bound arithmetic
//!
//! Keeps `start < end` whenever both bounds are set, with at least
//! [`MIN_SLICE_SECONDS`] between them when the media is long enough.

use crate::reducer::{clamp, upper_bound};
use crate::types::SliceRepeat;

/// Shortest loop the bound adjustments aim for
pub const MIN_SLICE_SECONDS: f64 = 1.0;

/// Move the loop start, pushing the end out of the way if needed
pub(crate) fn with_start(slice: SliceRepeat, seconds: f64, duration: f64) -> SliceRepeat {
    let start = clamp(seconds, 0.0, upper_bound(duration));

    match slice.end {
        Some(end) if start >= end => {
            let mut new_start = start;
            let mut new_end = start + MIN_SLICE_SECONDS;
            if duration > 0.0 && new_end > duration {
                new_end = duration;
                new_start = (new_end - MIN_SLICE_SECONDS).max(0.0);
            }
            let (new_start, new_end) = ordered(new_start, new_end);
            SliceRepeat {
                start: Some(new_start),
                end: Some(new_end),
                ..slice
            }
        }
        _ => SliceRepeat {
            start: Some(start),
            ..slice
        },
    }
}

/// Move the loop end, pulling the start back if needed
pub(crate) fn with_end(slice: SliceRepeat, seconds: f64, duration: f64) -> SliceRepeat {
    let end = clamp(seconds, 0.0, upper_bound(duration));

    match slice.start {
        Some(start) if end <= start => {
            let mut new_end = end;
            let mut new_start = end - MIN_SLICE_SECONDS;
            if new_start < 0.0 {
                new_start = 0.0;
                new_end = new_end.max(MIN_SLICE_SECONDS);
            }
            if duration > 0.0 && new_end > duration {
                new_end = duration;
                new_start = (new_end - MIN_SLICE_SECONDS).max(0.0);
            }
            let (new_start, new_end) = ordered(new_start, new_end);
            SliceRepeat {
                start: Some(new_start),
                end: Some(new_end),
                ..slice
            }
        }
        _ => SliceRepeat {
            end: Some(end),
            ..slice
        },
    }
}

/// Pull existing bounds inside a newly learned duration
pub(crate) fn fit_to_duration(slice: SliceRepeat, duration: f64) -> SliceRepeat {
    if slice.start.is_none() && slice.end.is_none() {
        return slice;
    }

    let mut start = slice.start.map(|s| clamp(s, 0.0, duration));
    let mut end = slice.end.map(|e| clamp(e, 0.0, duration));

    if let (Some(s), Some(e)) = (start, end) {
        if e - s < MIN_SLICE_SECONDS {
            if s + MIN_SLICE_SECONDS <= duration {
                end = Some(e.max(s + MIN_SLICE_SECONDS));
            } else {
                end = Some(duration);
                start = Some((duration - MIN_SLICE_SECONDS).max(0.0));
            }
        }
    }

    if let (Some(s), Some(e)) = (start, end) {
        let (s, e) = ordered(s, e);
        start = Some(s);
        end = Some(e);
    }

    SliceRepeat { start, end, ..slice }
}

/// Keep `start < end` once the one-second gap is below float resolution
///
/// `end` is always positive here.
fn ordered(start: f64, end: f64) -> (f64, f64) {
    if start < end {
        (start, end)
    } else {
        (just_below(end), end)
    }
}

/// Next representable value below a positive `value`
fn just_below(value: f64) -> f64 {
    if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else {
        0.0
    }
}
