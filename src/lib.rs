//! SMPTE timecode / frame count conversion.
//!
//! This crate converts between the two representations of a video
//! timecode — the `HH:MM:SS:FF` clock form and a flat frame count — across
//! the fixed broadcast/film rates 23.976, 24, 25, 29.97 (drop-frame and
//! non-drop), and 30 fps, including the NTSC drop-frame convention that
//! skips two frame labels at the start of every minute not divisible by
//! ten.
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! // Parse at an explicit rate and extract the frame count.
//! let tc = Timecode::parse("01:00:00:00", FrameRate::Fps24).unwrap();
//! assert_eq!(tc.to_frame_count().unwrap(), 86_400);
//!
//! // Construct from a frame count; the clock form is derived on demand.
//! let tc = Timecode::from_frame_count(1_800, FrameRate::Fps29_97Df);
//! assert_eq!(tc.to_string(), "00:01:00;02");
//! ```
//!
//! # Framerate rebasing
//!
//! [`Timecode::change_framerate`] re-bases a timecode onto a new rate
//! while preserving the frames elapsed since a configured program start:
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! let tc = Timecode::parse("01:00:00:00", FrameRate::Fps24)
//!     .unwrap()
//!     .with_start_timecode("00:00:00:00");
//! let rebased = tc.change_framerate(FrameRate::Fps25).unwrap();
//! assert_eq!(rebased.to_frame_count().unwrap(), 86_400);
//! assert_eq!(rebased.to_string(), "00:57:36:00");
//! ```
//!
//! # Intervals
//!
//! ```rust
//! use smpte_timecode::{FrameRate, TimecodeInterval};
//!
//! let reel = TimecodeInterval::parse("01:00:00:00", "01:20:00:00", FrameRate::Fps25).unwrap();
//! assert!(reel.contains_str("01:10:00:00").unwrap());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod interval;
pub mod rate;
pub mod smpte;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use interval::TimecodeInterval;
pub use rate::FrameRate;
pub use smpte::{ClockFields, ResolvedTimecode, Timecode};

/// Create a timecode from clock fields and a rate.
///
/// # Example
/// ```rust
/// use smpte_timecode::{timecode, FrameRate};
///
/// let tc = timecode(1, 30, 45, 12, FrameRate::Fps24);
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
#[must_use]
pub fn timecode(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> Timecode {
    Timecode::new(hours, minutes, seconds, frames, rate)
}

/// Signed frame delta between two timecodes.
///
/// Only meaningful when both timecodes share a rate.
pub fn duration_frames(start: &Timecode, end: &Timecode) -> Result<i64> {
    Ok(end.to_frame_count()? - start.to_frame_count()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timecode_convenience() {
        let tc = timecode(1, 30, 45, 12, FrameRate::Fps24);
        assert_eq!(tc.to_string(), "01:30:45:12");
        assert_eq!(tc.frame_rate(), Some(FrameRate::Fps24));
    }

    #[test]
    fn test_timecode_convenience_drop_frame() {
        let tc = timecode(0, 1, 0, 2, FrameRate::Fps29_97Df);
        assert_eq!(tc.to_string(), "00:01:00;02");
        assert!(tc.is_drop_frame());
    }

    #[test]
    fn test_duration_frames() {
        let start = timecode(0, 0, 0, 0, FrameRate::Fps24);
        let end = timecode(0, 1, 0, 0, FrameRate::Fps24);
        assert_eq!(duration_frames(&start, &end).unwrap(), 1_440);
        assert_eq!(duration_frames(&end, &start).unwrap(), -1_440);
    }

    #[test]
    fn test_catalog_lookup_round_trip() {
        for rate in FrameRate::ALL {
            let tc = Timecode::from_frame_count(3_000, rate);
            let reparsed = Timecode::parse(&tc.to_string(), rate).unwrap();
            assert_eq!(reparsed.to_frame_count().unwrap(), 3_000, "rate {}", rate);
        }
    }
}
