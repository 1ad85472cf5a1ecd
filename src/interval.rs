//! Timecode intervals and containment queries.

use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use crate::smpte::Timecode;
use serde::{Deserialize, Serialize};

/// An ordered pair of in/out timecodes sharing a rate.
///
/// Used for containment queries only; comparisons are made on frame
/// counts, never on clock fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecodeInterval {
    tc_in: Timecode,
    tc_out: Timecode,
}

impl TimecodeInterval {
    /// Create an interval from two timecodes.
    #[must_use]
    pub fn new(tc_in: Timecode, tc_out: Timecode) -> Self {
        Self { tc_in, tc_out }
    }

    /// Create an interval by parsing two timecode strings at a shared rate.
    pub fn parse(tc_in: &str, tc_out: &str, rate: FrameRate) -> Result<Self> {
        Ok(Self {
            tc_in: Timecode::parse(tc_in, rate)?,
            tc_out: Timecode::parse(tc_out, rate)?,
        })
    }

    /// Get the in point.
    #[must_use]
    pub fn tc_in(&self) -> &Timecode {
        &self.tc_in
    }

    /// Get the out point.
    #[must_use]
    pub fn tc_out(&self) -> &Timecode {
        &self.tc_out
    }

    /// Replace the in point, returning the updated interval.
    #[must_use]
    pub fn with_tc_in(mut self, tc_in: Timecode) -> Self {
        self.tc_in = tc_in;
        self
    }

    /// Replace the out point, returning the updated interval.
    #[must_use]
    pub fn with_tc_out(mut self, tc_out: Timecode) -> Self {
        self.tc_out = tc_out;
        self
    }

    /// Check whether a timecode lies within the interval, inclusive at
    /// both ends.
    pub fn contains(&self, tc: &Timecode) -> Result<bool> {
        let lo = self.tc_in.to_frame_count()?;
        let hi = self.tc_out.to_frame_count()?;
        let probe = tc.to_frame_count()?;
        Ok((lo..=hi).contains(&probe))
    }

    /// Check whether a timecode string lies within the interval.
    ///
    /// The probe is parsed at the interval's rate; fails with an
    /// unspecified frame rate error when the interval has none.
    pub fn contains_str(&self, tc: &str) -> Result<bool> {
        let rate = self
            .tc_in
            .frame_rate()
            .ok_or_else(|| TimecodeError::unspecified_frame_rate("interval containment"))?;
        self.contains(&Timecode::parse(tc, rate)?)
    }
}
