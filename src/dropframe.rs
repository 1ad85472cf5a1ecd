//! NTSC drop-frame arithmetic for 29.97 fps.
//!
//! Drop-frame timecode keeps the displayed clock close to wall time despite
//! the 30000/1001 frame rate by skipping frame labels 0 and 1 at the start
//! of every minute, except minutes divisible by ten. The catalog's only
//! drop-frame rate is 29.97, so the constants here are fixed rather than
//! parameterized.

use crate::smpte::ClockFields;
use tracing::trace;

/// Frame labels skipped per dropped minute.
pub const DROPPED_PER_MINUTE: u64 = 2;

/// Real frames in a minute that drops labels: `30 * 60 - 2`.
pub const FRAMES_PER_DROP_MINUTE: u64 = 1798;

/// Real frames in a ten-minute block: `30 * 600 - 9 * 2`.
pub const FRAMES_PER_TEN_MINUTES: u64 = 17_982;

const FPS: u64 = 30;

/// Decode a raw frame count into its drop-frame clock label.
///
/// Counts are contiguous; labels are not. The count is first resolved to a
/// whole number of ten-minute blocks (which drop nothing in their first
/// minute), then to minutes within the block, and the skipped labels are
/// added back for display.
#[must_use]
pub fn decode(count: u64) -> ClockFields {
    let blocks = count / FRAMES_PER_TEN_MINUTES;
    let into_block = count % FRAMES_PER_TEN_MINUTES;

    // The first minute of each block keeps all 1800 labels.
    let (extra_minutes, rest) = if into_block < FPS * 60 {
        (0, into_block)
    } else {
        let past_first = into_block - FPS * 60;
        (
            1 + past_first / FRAMES_PER_DROP_MINUTE,
            past_first % FRAMES_PER_DROP_MINUTE,
        )
    };

    // Skipped labels reappear in the displayed frame field.
    let display = if extra_minutes > 0 {
        rest + DROPPED_PER_MINUTE
    } else {
        rest
    };

    let total_minutes = blocks * 10 + extra_minutes;
    let fields = ClockFields {
        hours: (total_minutes / 60) as u32,
        minutes: (total_minutes % 60) as u32,
        seconds: (display / FPS) as u32,
        frames: (display % FPS) as u32,
    };
    trace!(count, ?fields, "decoded drop-frame count");
    fields
}

/// Number of frame labels dropped before the minute `hours:minutes`.
///
/// This is the forward compensation subtracted when encoding a clock label
/// back into a true frame count: two labels per elapsed minute, minus the
/// exempt every-tenth minutes.
#[must_use]
pub fn dropped_before(hours: u32, minutes: u32) -> u64 {
    let total_minutes = hours as u64 * 60 + minutes as u64;
    DROPPED_PER_MINUTE * (total_minutes - total_minutes / 10)
}

/// Check whether a clock label is one of the skipped drop-frame labels.
///
/// Frames 0 and 1 of second 0 are skipped in every minute not divisible
/// by ten; they never appear in decoded output.
#[must_use]
pub fn is_dropped_label(minutes: u32, seconds: u32, frames: u32) -> bool {
    seconds == 0 && !minutes.is_multiple_of(10) && frames < DROPPED_PER_MINUTE as u32
}
