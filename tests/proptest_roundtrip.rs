//! Property-based tests for timecode conversion.
//!
//! Uses proptest to verify round-trip correctness of the count/clock
//! conversions, the drop-frame exemption rule, and the framerate
//! rebasing invariant.

use proptest::prelude::*;
use smpte_timecode::{dropframe, FrameRate, Timecode};

fn any_rate() -> impl Strategy<Value = FrameRate> {
    prop::sample::select(FrameRate::ALL.to_vec())
}

// =============================================================================
// Count <-> Clock Round-Trip Tests
// =============================================================================

proptest! {
    /// Decoding a count and re-encoding it yields the same count, for
    /// every rate over one hour of material.
    #[test]
    fn roundtrip_count_over_one_hour(rate in any_rate(), count in 0u64..108_000) {
        let count = count % (3_600 * rate.nominal_fps() as u64);
        let tc = Timecode::from_frame_count(count, rate);
        let resolved = tc.resolve().unwrap();
        prop_assert_eq!(resolved.count, count as i64);

        let reencoded = Timecode::new(
            resolved.fields.hours,
            resolved.fields.minutes,
            resolved.fields.seconds,
            resolved.fields.frames,
            rate,
        );
        prop_assert_eq!(reencoded.to_frame_count().unwrap(), count as i64);
    }

    /// Formatting and re-parsing preserves the count.
    #[test]
    fn roundtrip_through_string(rate in any_rate(), count in 0u64..108_000) {
        let count = count % (3_600 * rate.nominal_fps() as u64);
        let tc = Timecode::from_frame_count(count, rate);
        let reparsed = Timecode::parse(&tc.to_string(), rate).unwrap();
        prop_assert_eq!(reparsed.to_frame_count().unwrap(), count as i64);
        prop_assert_eq!(reparsed.to_string(), tc.to_string());
    }

    /// Round trips hold well past the first hour for the drop-frame rate.
    #[test]
    fn roundtrip_drop_frame_full_day(count in 0u64..2_589_408) {
        let tc = Timecode::from_frame_count(count, FrameRate::Fps29_97Df);
        let reparsed = Timecode::parse(&tc.to_string(), FrameRate::Fps29_97Df).unwrap();
        prop_assert_eq!(reparsed.to_frame_count().unwrap(), count as i64);
    }
}

// =============================================================================
// Drop-Frame Exemption
// =============================================================================

proptest! {
    /// Decoded drop-frame labels never land on a skipped label: frames 0
    /// and 1 of second 0 appear only in minutes divisible by ten.
    #[test]
    fn decoded_labels_are_never_dropped(count in 0u64..2_589_408) {
        let fields = Timecode::from_frame_count(count, FrameRate::Fps29_97Df)
            .clock_fields()
            .unwrap();
        prop_assert!(
            !dropframe::is_dropped_label(fields.minutes, fields.seconds, fields.frames),
            "count {} decoded to dropped label {:?}", count, fields
        );
    }

    /// The count of labels dropped before a minute matches the decode:
    /// positional value minus compensation equals the original count.
    #[test]
    fn compensation_matches_decode(count in 0u64..2_589_408) {
        let f = dropframe::decode(count);
        let positional =
            (f.hours as u64 * 3_600 + f.minutes as u64 * 60 + f.seconds as u64) * 30
                + f.frames as u64;
        prop_assert_eq!(positional - dropframe::dropped_before(f.hours, f.minutes), count);
    }
}

// =============================================================================
// Framerate Rebasing Invariant
// =============================================================================

proptest! {
    /// `change_framerate` preserves the frame count elapsed since the
    /// configured start timecode, for every pair of rates.
    #[test]
    fn rebasing_preserves_useful_frames(
        old_rate in any_rate(),
        new_rate in any_rate(),
        count in 0u64..500_000,
    ) {
        let start = "01:00:00:00";
        let start_at_old = Timecode::parse(start, old_rate).unwrap().to_frame_count().unwrap();
        let start_at_new = Timecode::parse(start, new_rate).unwrap().to_frame_count().unwrap();

        let tc = Timecode::from_frame_count(count, old_rate).with_start_timecode(start);
        let rebased = tc.change_framerate(new_rate).unwrap();

        prop_assert_eq!(
            rebased.to_frame_count().unwrap() - start_at_new,
            count as i64 - start_at_old
        );
        prop_assert_eq!(rebased.frame_rate(), Some(new_rate));
    }
}
