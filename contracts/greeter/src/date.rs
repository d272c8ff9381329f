// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Human-readable rendering of block timestamps.
//!
//! The rendering is fixed to what a JavaScript engine running in UTC prints for
//! `date.toDateString() + " " + date.toTimeString()`:
//!
//! ```text
//! Fri Jan 01 2021 00:00:00 GMT+0000 (Coordinated Universal Time)
//! ```

use core::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

const NANOS_PER_MILLI: u64 = 1_000_000;

const INVALID_DATE: &str = "Invalid Date";

const UTC_ZONE: &str = "GMT+0000 (Coordinated Universal Time)";

/// A wall-clock instant at millisecond precision, displayed in the canonical update-date form.
/// Instants outside the representable range display as `Invalid Date Invalid Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateDate(Option<DateTime<Utc>>);

impl UpdateDate {
    /// Converts a block timestamp in nanoseconds, truncating to whole milliseconds.
    pub fn from_nanos(nanos: u64) -> Self {
        Self::from_millis(nanos / NANOS_PER_MILLI)
    }

    pub fn from_millis(millis: u64) -> Self {
        let instant = i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis);
        Self(instant)
    }

    /// Calendar part, e.g. `Fri Jan 01 2021`.
    pub fn date_string(&self) -> String {
        match self.0 {
            Some(instant) => format!(
                "{} {:04}",
                instant.format("%a %b %d"),
                instant.year()
            ),
            None => INVALID_DATE.to_owned(),
        }
    }

    /// Clock part, e.g. `00:00:00 GMT+0000 (Coordinated Universal Time)`.
    pub fn time_string(&self) -> String {
        match self.0 {
            Some(instant) => format!(
                "{:02}:{:02}:{:02} {UTC_ZONE}",
                instant.hour(),
                instant.minute(),
                instant.second()
            ),
            None => INVALID_DATE.to_owned(),
        }
    }
}

impl fmt::Display for UpdateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_year_2021() {
        let date = UpdateDate::from_nanos(1_609_459_200_000_000_000);
        assert_eq!(date.date_string(), "Fri Jan 01 2021");
        assert_eq!(
            date.time_string(),
            "00:00:00 GMT+0000 (Coordinated Universal Time)"
        );
        assert_eq!(
            date.to_string(),
            "Fri Jan 01 2021 00:00:00 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_epoch() {
        assert_eq!(
            UpdateDate::from_nanos(0).to_string(),
            "Thu Jan 01 1970 00:00:00 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_truncates_to_millis() {
        // 1677654321987.654321 ms
        let date = UpdateDate::from_nanos(1_677_654_321_987_654_321);
        assert_eq!(date, UpdateDate::from_millis(1_677_654_321_987));
        assert_eq!(
            date.to_string(),
            "Wed Mar 01 2023 07:05:21 GMT+0000 (Coordinated Universal Time)"
        );

        // sub-second remainders never round up
        assert_eq!(
            UpdateDate::from_millis(1_699_999_999_999).to_string(),
            "Tue Nov 14 2023 22:13:19 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            UpdateDate::from_millis(951_782_400_000).date_string(),
            "Tue Feb 29 2000"
        );
    }

    #[test]
    fn test_largest_timestamp() {
        assert_eq!(
            UpdateDate::from_nanos(u64::MAX).to_string(),
            "Sun Jul 21 2554 23:34:33 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[test]
    fn test_out_of_range() {
        let date = UpdateDate::from_millis(u64::MAX);
        assert_eq!(date.to_string(), "Invalid Date Invalid Date");
    }
}
