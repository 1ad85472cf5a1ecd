//! The fixed framerate catalog.
//!
//! Six broadcast/film rates are supported: 23.976, 24, 25, 29.97 drop-frame,
//! 29.97 non-drop-frame, and 30 fps. Each rate carries its nominal value and
//! drop-frame flag; the catalog is closed by construction.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed broadcast/film frame rate.
///
/// The two 29.97 variants share a nominal value and differ only in the
/// drop-frame convention. Timecode arithmetic uses the integer counting
/// base from [`FrameRate::nominal_fps`], which is always 24, 25, or 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps (NTSC film)
    Fps23_976,
    /// 24 fps (film/Blu-ray)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps drop-frame (NTSC)
    Fps29_97Df,
    /// 29.97 fps non-drop-frame (NTSC)
    Fps29_97Ndf,
    /// 30 fps
    Fps30,
}

impl FrameRate {
    /// All catalog entries, in lookup order.
    ///
    /// The drop-frame 29.97 entry precedes the non-drop one, so a lookup
    /// by the bare value `29.97` resolves to the drop-frame rate.
    pub const ALL: [FrameRate; 6] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97Df,
        Self::Fps29_97Ndf,
        Self::Fps30,
    ];

    /// Get the nominal frame rate as a floating point value.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Fps23_976 => 23.976,
            Self::Fps24 => 24.0,
            Self::Fps25 => 25.0,
            Self::Fps29_97Df | Self::Fps29_97Ndf => 29.97,
            Self::Fps30 => 30.0,
        }
    }

    /// Get the rate as an integer-scaled key (thousandths of a frame per
    /// second): `23976`, `24000`, `25000`, `29970`, `30000`.
    #[must_use]
    pub fn millifps(&self) -> u32 {
        match self {
            Self::Fps23_976 => 23_976,
            Self::Fps24 => 24_000,
            Self::Fps25 => 25_000,
            Self::Fps29_97Df | Self::Fps29_97Ndf => 29_970,
            Self::Fps30 => 30_000,
        }
    }

    /// Get the integer counting base used for timecode arithmetic.
    ///
    /// 23.976 and 24 both count in base 24; both 29.97 variants and 30
    /// count in base 30.
    #[must_use]
    pub fn nominal_fps(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97Df | Self::Fps29_97Ndf | Self::Fps30 => 30,
        }
    }

    /// Check whether this rate uses the drop-frame convention.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97Df)
    }

    /// Look up a catalog entry by its nominal floating value.
    ///
    /// This is an exact-equality linear scan over [`FrameRate::ALL`];
    /// callers must pass the canonical literal (`23.976`, `24.0`, `25.0`,
    /// `29.97`, `30.0`). Returns the first match, so `29.97` yields the
    /// drop-frame variant. An absent match is not an error.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.as_f64() == value)
    }

    /// Look up a catalog entry by its integer-scaled key.
    ///
    /// `29970` yields the drop-frame variant, as with [`FrameRate::from_value`].
    #[must_use]
    pub fn from_millifps(millifps: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.millifps() == millifps)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps23_976 => write!(f, "23.976"),
            Self::Fps24 => write!(f, "24"),
            Self::Fps25 => write!(f, "25"),
            Self::Fps29_97Df | Self::Fps29_97Ndf => write!(f, "29.97"),
            Self::Fps30 => write!(f, "30"),
        }
    }
}

impl FromStr for FrameRate {
    type Err = TimecodeError;

    /// Parse a decimal rate string such as `"25"` or `"29.97"`.
    ///
    /// Fails with an invalid field error when the text is not a number,
    /// and with an invalid format error when the value is not in the
    /// catalog.
    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| TimecodeError::invalid_field("frame rate", s))?;
        Self::from_value(value)
            .ok_or_else(|| TimecodeError::invalid_format(format!("Unknown frame rate: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_value() {
        assert_eq!(FrameRate::from_value(23.976), Some(FrameRate::Fps23_976));
        assert_eq!(FrameRate::from_value(24.0), Some(FrameRate::Fps24));
        assert_eq!(FrameRate::from_value(25.0), Some(FrameRate::Fps25));
        assert_eq!(FrameRate::from_value(30.0), Some(FrameRate::Fps30));
        assert_eq!(FrameRate::from_value(12.5), None);
        assert_eq!(FrameRate::from_value(-1.0), None);
    }

    #[test]
    fn test_from_value_prefers_drop_frame() {
        // Both 29.97 entries share the value; the drop-frame one comes first.
        assert_eq!(FrameRate::from_value(29.97), Some(FrameRate::Fps29_97Df));
    }

    #[test]
    fn test_from_millifps() {
        assert_eq!(FrameRate::from_millifps(23_976), Some(FrameRate::Fps23_976));
        assert_eq!(
            FrameRate::from_millifps(29_970),
            Some(FrameRate::Fps29_97Df)
        );
        assert_eq!(FrameRate::from_millifps(50_000), None);
    }

    #[test]
    fn test_nominal_fps() {
        assert_eq!(FrameRate::Fps23_976.nominal_fps(), 24);
        assert_eq!(FrameRate::Fps24.nominal_fps(), 24);
        assert_eq!(FrameRate::Fps25.nominal_fps(), 25);
        assert_eq!(FrameRate::Fps29_97Df.nominal_fps(), 30);
        assert_eq!(FrameRate::Fps29_97Ndf.nominal_fps(), 30);
        assert_eq!(FrameRate::Fps30.nominal_fps(), 30);
    }

    #[test]
    fn test_is_drop_frame() {
        assert!(FrameRate::Fps29_97Df.is_drop_frame());
        assert!(!FrameRate::Fps29_97Ndf.is_drop_frame());
        assert!(!FrameRate::Fps24.is_drop_frame());
    }

    #[test]
    fn test_display() {
        assert_eq!(FrameRate::Fps23_976.to_string(), "23.976");
        assert_eq!(FrameRate::Fps29_97Df.to_string(), "29.97");
        assert_eq!(FrameRate::Fps29_97Ndf.to_string(), "29.97");
        assert_eq!(FrameRate::Fps30.to_string(), "30");
    }

    #[test]
    fn test_from_str() {
        let rate: FrameRate = "29.97".parse().unwrap();
        assert_eq!(rate, FrameRate::Fps29_97Df);

        let rate: FrameRate = "24".parse().unwrap();
        assert_eq!(rate, FrameRate::Fps24);

        assert!(matches!(
            "abc".parse::<FrameRate>(),
            Err(TimecodeError::InvalidField { .. })
        ));
        assert!(matches!(
            "48".parse::<FrameRate>(),
            Err(TimecodeError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let rate = FrameRate::Fps29_97Df;
        let json = serde_json::to_string(&rate).unwrap();
        let decoded: FrameRate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, decoded);
    }
}
