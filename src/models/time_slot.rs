//! Time slot value type
//!
//! A half-open interval within a single day, minute granularity. All times
//! are naive wall-clock values; no timezone handling.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Half-open `[start, end)` time interval within one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    /// Start of the slot (inclusive)
    #[schema(value_type = String, example = "09:00")]
    pub start: NaiveTime,
    /// End of the slot (exclusive)
    #[schema(value_type = String, example = "11:00")]
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot from two `HH:MM` 24-hour strings.
    ///
    /// Rejects malformed times and any slot where the end does not come
    /// strictly after the start (no overnight wraparound).
    pub fn parse(raw_start: &str, raw_end: &str) -> AppResult<Self> {
        let start = parse_hhmm(raw_start)
            .ok_or_else(|| AppError::Validation(format!("Start time must be HH:MM, got '{}'", raw_start)))?;
        let end = parse_hhmm(raw_end)
            .ok_or_else(|| AppError::Validation(format!("End time must be HH:MM, got '{}'", raw_end)))?;

        if end <= start {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        Ok(Self { start, end })
    }

    /// Half-open overlap test: `[9:00,11:00)` and `[11:00,13:00)` do not
    /// overlap, `[9:00,11:00)` and `[10:00,12:00)` do.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Strict `HH:MM` parser: exactly two digits, two digits, in 24-hour range.
/// Seconds are not accepted.
fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    let (h, m) = raw.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(start, end).expect("valid slot")
    }

    #[test]
    fn parses_valid_times() {
        let s = slot("09:00", "11:30");
        assert_eq!(s.to_string(), "09:00-11:30");
        assert_eq!(s, slot("09:00", "11:30"));
    }

    #[test]
    fn rejects_malformed_times() {
        for (a, b) in [
            ("9:00", "11:00"),
            ("09:00", "11:0"),
            ("24:00", "25:00"),
            ("09:60", "11:00"),
            ("0900", "1100"),
            ("", "11:00"),
            ("09:00:00", "11:00"),
            ("ab:cd", "11:00"),
        ] {
            assert!(TimeSlot::parse(a, b).is_err(), "expected rejection of ({}, {})", a, b);
        }
    }

    #[test]
    fn rejects_empty_and_inverted_slots() {
        assert!(TimeSlot::parse("11:00", "09:00").is_err());
        assert!(TimeSlot::parse("11:00", "11:00").is_err());
        // No overnight wraparound
        assert!(TimeSlot::parse("23:00", "01:00").is_err());
    }

    #[test]
    fn overlap_is_half_open() {
        let morning = slot("09:00", "11:00");
        let adjacent = slot("11:00", "13:00");
        let overlapping = slot("10:00", "12:00");

        assert!(!morning.overlaps(&adjacent));
        assert!(morning.overlaps(&overlapping));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (slot("09:00", "11:00"), slot("10:00", "12:00")),
            (slot("09:00", "11:00"), slot("11:00", "13:00")),
            (slot("09:00", "17:00"), slot("10:00", "11:00")),
            (slot("09:00", "11:00"), slot("09:00", "11:00")),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "overlap({}, {})", a, b);
        }
    }

    #[test]
    fn containment_and_identity_overlap() {
        let outer = slot("08:00", "18:00");
        let inner = slot("10:00", "11:00");
        assert!(outer.overlaps(&inner));
        assert!(outer.overlaps(&outer));
    }
}
