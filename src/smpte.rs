//! SMPTE timecode engine.
//!
//! A [`Timecode`] is a value in a fixed time base, held in one of two
//! equivalent forms: a clock label (`HH:MM:SS:FF`) or a flat frame count
//! relative to `00:00:00:00`. One form is authoritative per value; the
//! other is derived on demand by pure conversion functions. Transforms
//! (`add_frames`, `change_framerate`) return new values.

use crate::dropframe;
use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The clock form of a timecode: hours, minutes, seconds, frames.
///
/// Fields are not range-validated against the rate's maximum; out-of-range
/// values are accepted at construction and only affect later arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFields {
    /// Hours.
    pub hours: u32,
    /// Minutes.
    pub minutes: u32,
    /// Seconds.
    pub seconds: u32,
    /// Frames within the second.
    pub frames: u32,
}

/// The authoritative representation held by a timecode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Form {
    /// A flat frame count relative to `00:00:00:00`.
    Raw(i64),
    /// An explicit clock label.
    Decoded(ClockFields),
}

/// Both forms of a timecode, fully computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTimecode {
    /// The clock form.
    pub fields: ClockFields,
    /// The count form.
    pub count: i64,
}

/// A SMPTE timecode value.
///
/// Constructed from a formatted string, a frame count plus rate, or
/// explicit clock fields plus rate. The no-argument [`Timecode::null`]
/// constructor produces the null timecode, which formats as `"-1"` and
/// whose frame count is `-1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timecode {
    form: Option<Form>,
    rate: Option<FrameRate>,
    drop_frame: bool,
    start_timecode: Option<String>,
}

impl Timecode {
    /// Create the null timecode.
    #[must_use]
    pub fn null() -> Self {
        Self {
            form: None,
            rate: None,
            drop_frame: false,
            start_timecode: None,
        }
    }

    /// Create a timecode from explicit clock fields and a rate.
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32, rate: FrameRate) -> Self {
        Self {
            form: Some(Form::Decoded(ClockFields {
                hours,
                minutes,
                seconds,
                frames,
            })),
            rate: Some(rate),
            drop_frame: rate.is_drop_frame(),
            start_timecode: None,
        }
    }

    /// Create a timecode from a frame count and a rate.
    ///
    /// The clock form is derived on demand.
    #[must_use]
    pub fn from_frame_count(count: u64, rate: FrameRate) -> Self {
        Self {
            form: Some(Form::Raw(count as i64)),
            rate: Some(rate),
            drop_frame: rate.is_drop_frame(),
            start_timecode: None,
        }
    }

    /// Parse a timecode string with an explicit rate.
    ///
    /// The rate's drop-frame flag takes precedence over the separator in
    /// the string, so `"00:01:00:02"` parsed at the 29.97 drop-frame rate
    /// is a drop-frame timecode.
    pub fn parse(s: &str, rate: FrameRate) -> Result<Self> {
        let (fields, _) = parse_fields(s)?;
        Ok(Self {
            form: Some(Form::Decoded(fields)),
            rate: Some(rate),
            drop_frame: rate.is_drop_frame(),
            start_timecode: None,
        })
    }

    /// Check whether a timecode string uses the drop-frame separator.
    ///
    /// A `;` anywhere in the string, independent of position, marks it as
    /// drop-frame.
    #[must_use]
    pub fn is_drop_frame_str(s: &str) -> bool {
        s.contains(';')
    }

    /// Get the rate in effect, if one was specified.
    #[must_use]
    pub fn frame_rate(&self) -> Option<FrameRate> {
        self.rate
    }

    /// Check whether this timecode uses the drop-frame convention.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// Check whether this is the null timecode.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.form.is_none()
    }

    /// Get the configured start timecode, if any.
    #[must_use]
    pub fn start_timecode(&self) -> Option<&str> {
        self.start_timecode.as_deref()
    }

    /// Set the program start timecode, returning the updated value.
    ///
    /// The start timecode anchors [`Timecode::useful_frame_count`] and
    /// [`Timecode::change_framerate`].
    #[must_use]
    pub fn with_start_timecode(mut self, start: impl Into<String>) -> Self {
        self.start_timecode = Some(start.into());
        self
    }

    /// Replace the rate in effect without rebasing, returning the updated
    /// value.
    ///
    /// The authoritative form is kept as-is, so the value's meaning shifts
    /// with the new rate. Use [`Timecode::change_framerate`] to preserve
    /// elapsed duration instead.
    #[must_use]
    pub fn with_frame_rate(mut self, rate: FrameRate) -> Self {
        self.rate = Some(rate);
        self.drop_frame = rate.is_drop_frame();
        self
    }

    /// Get the clock form of this timecode.
    ///
    /// Fails with a null timecode error on the null timecode, and with an
    /// unspecified frame rate error when the count form cannot be decoded
    /// without a rate.
    pub fn clock_fields(&self) -> Result<ClockFields> {
        match &self.form {
            None => Err(TimecodeError::null_timecode("clock form")),
            Some(Form::Decoded(fields)) => Ok(*fields),
            Some(Form::Raw(count)) => {
                let count = u64::try_from(*count).map_err(|_| TimecodeError::Underflow)?;
                let rate = self
                    .rate
                    .ok_or_else(|| TimecodeError::unspecified_frame_rate("clock form"))?;
                if self.drop_frame {
                    Ok(dropframe::decode(count))
                } else {
                    Ok(decode_non_drop(count, rate.nominal_fps() as u64))
                }
            }
        }
    }

    /// Get the count form of this timecode: frames since `00:00:00:00`.
    ///
    /// Returns `-1` for the null timecode. For drop-frame timecodes the
    /// positional value of the clock label is compensated by the number of
    /// labels dropped before it, yielding the true frame count.
    pub fn to_frame_count(&self) -> Result<i64> {
        match &self.form {
            None => Ok(-1),
            Some(Form::Raw(count)) => Ok(*count),
            Some(Form::Decoded(fields)) => {
                let rate = self
                    .rate
                    .ok_or_else(|| TimecodeError::unspecified_frame_rate("frame count"))?;
                let base = rate.nominal_fps() as i64;
                let positional = fields.hours as i64 * 3600 * base
                    + fields.minutes as i64 * 60 * base
                    + fields.seconds as i64 * base
                    + fields.frames as i64;
                if self.drop_frame {
                    Ok(positional - dropframe::dropped_before(fields.hours, fields.minutes) as i64)
                } else {
                    Ok(positional)
                }
            }
        }
    }

    /// Get the frame count elapsed since the configured start timecode.
    ///
    /// Fails with a missing start timecode error when none is configured.
    pub fn useful_frame_count(&self) -> Result<i64> {
        if self.is_null() {
            return Err(TimecodeError::null_timecode("useful frame count"));
        }
        let start = self.configured_start()?;
        let rate = self
            .rate
            .ok_or_else(|| TimecodeError::unspecified_frame_rate("useful frame count"))?;
        let start_count = Self::parse(start, rate)?.to_frame_count()?;
        Ok(self.to_frame_count()? - start_count)
    }

    /// Compute both forms of this timecode at once.
    pub fn resolve(&self) -> Result<ResolvedTimecode> {
        if self.is_null() {
            return Err(TimecodeError::null_timecode("resolved value"));
        }
        Ok(ResolvedTimecode {
            fields: self.clock_fields()?,
            count: self.to_frame_count()?,
        })
    }

    /// Add a signed number of frames, returning the new value.
    ///
    /// Fails with an underflow error when the result would be negative.
    /// The null timecode is returned unchanged.
    pub fn add_frames(&self, frames: i64) -> Result<Self> {
        if self.is_null() {
            return Ok(self.clone());
        }
        let count = self.to_frame_count()? + frames;
        if count < 0 {
            return Err(TimecodeError::Underflow);
        }
        Ok(Self {
            form: Some(Form::Raw(count)),
            rate: self.rate,
            drop_frame: self.drop_frame,
            start_timecode: self.start_timecode.clone(),
        })
    }

    /// Re-base this timecode onto a new rate, preserving elapsed frames
    /// since the configured start timecode.
    ///
    /// The duration since start is invariant across the change; the
    /// absolute count and clock label are not, because the new rate
    /// addresses the start timecode at a different frame density.
    /// Requires a non-empty start timecode, set via
    /// [`Timecode::with_start_timecode`].
    pub fn change_framerate(&self, rate: FrameRate) -> Result<Self> {
        if self.is_null() {
            return Err(TimecodeError::null_timecode("framerate change"));
        }
        let start = self.configured_start()?;
        let old_rate = self
            .rate
            .ok_or_else(|| TimecodeError::unspecified_frame_rate("framerate change"))?;

        let start_at_old = Self::parse(start, old_rate)?.to_frame_count()?;
        let useful = self.to_frame_count()? - start_at_old;
        let start_at_new = Self::parse(start, rate)?.to_frame_count()?;
        debug!(%old_rate, new_rate = %rate, useful, "rebasing timecode");

        Ok(Self {
            form: Some(Form::Raw(useful + start_at_new)),
            rate: Some(rate),
            drop_frame: rate.is_drop_frame(),
            start_timecode: self.start_timecode.clone(),
        })
    }

    /// Get the seconds/frames separator for display.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }

    fn configured_start(&self) -> Result<&str> {
        self.start_timecode
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(TimecodeError::MissingStartTimecode)
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for Timecode {
    /// Format as `HH:MM:SS:FF` (or `HH:MM:SS;FF` for drop-frame), with
    /// two-digit zero-padded fields. The null timecode, and any value
    /// whose clock form cannot be derived, renders as `-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clock_fields() {
            Ok(c) => write!(
                f,
                "{:02}:{:02}:{:02}{}{:02}",
                c.hours,
                c.minutes,
                c.seconds,
                self.separator(),
                c.frames
            ),
            Err(_) => write!(f, "-1"),
        }
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Parse a timecode string without a rate.
    ///
    /// The drop-frame flag is inferred from the separator; the rate is
    /// left unspecified, so count conversions fail until one is supplied
    /// with [`Timecode::with_frame_rate`].
    fn from_str(s: &str) -> Result<Self> {
        let (fields, drop_frame) = parse_fields(s)?;
        Ok(Self {
            form: Some(Form::Decoded(fields)),
            rate: None,
            drop_frame,
            start_timecode: None,
        })
    }
}

impl PartialEq for Timecode {
    /// Two non-null timecodes are equal when their rates, drop-frame
    /// flags, and resolved frame counts agree, regardless of which form
    /// is authoritative. Null equals only null.
    fn eq(&self, other: &Self) -> bool {
        if self.is_null() || other.is_null() {
            return self.is_null() && other.is_null();
        }
        if self.rate != other.rate || self.drop_frame != other.drop_frame {
            return false;
        }
        match (self.to_frame_count(), other.to_frame_count()) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.form == other.form,
        }
    }
}

/// Decode a frame count positionally in the given integer base.
fn decode_non_drop(count: u64, base: u64) -> ClockFields {
    let per_hour = 3600 * base;
    let per_minute = 60 * base;
    let rem = count % per_hour;
    ClockFields {
        hours: (count / per_hour) as u32,
        minutes: (rem / per_minute) as u32,
        seconds: (rem % per_minute / base) as u32,
        frames: (rem % base) as u32,
    }
}

/// Split a timecode string into clock fields and a drop-frame flag.
///
/// Fields are consumed positionally: a field that fails integer parsing is
/// an invalid field error, a missing or extra field is an invalid format
/// error.
fn parse_fields(s: &str) -> Result<(ClockFields, bool)> {
    let s = s.trim();
    let drop_frame = s.contains(';');
    let mut parts = s.split([':', ';']);

    let mut values = [0u32; 4];
    for (value, name) in values
        .iter_mut()
        .zip(["hours", "minutes", "seconds", "frames"])
    {
        let field = parts.next().ok_or_else(|| {
            TimecodeError::invalid_format(format!("Expected four fields, missing {}: {:?}", name, s))
        })?;
        *value = field
            .parse()
            .map_err(|_| TimecodeError::invalid_field(name, field))?;
    }
    if parts.next().is_some() {
        return Err(TimecodeError::invalid_format(format!(
            "Expected exactly four fields: {:?}",
            s
        )));
    }

    Ok((
        ClockFields {
            hours: values[0],
            minutes: values[1],
            seconds: values[2],
            frames: values[3],
        },
        drop_frame,
    ))
}
