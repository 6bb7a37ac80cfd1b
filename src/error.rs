// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the sankranti crate.
//!
//! Errors arise when validating caller input (year ranges, epochs, day
//! counts, explicit calendar dates) and at the CSV persistence boundary.

use std::io;

/// Error type for all fallible operations in the sankranti crate.
#[derive(Debug, thiserror::Error)]
pub enum SankrantiError {
    /// Returned when a year range is empty (`start > end`).
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange {
        /// First year of the requested range.
        start: i32,
        /// Last year of the requested range.
        end: i32,
    },

    /// Returned when an epoch is built from a non-finite reference JD or a
    /// non-positive mean year.
    #[error("invalid epoch: {reason}")]
    InvalidEpoch {
        /// Which epoch parameter was rejected.
        reason: String,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of its month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// Number of days in that month.
        max_day: u8,
    },

    /// Returned when a Julian Day is not finite or too large to map to a
    /// calendar year.
    #[error("julian day {jd} is outside the supported range")]
    JulianDayOutOfRange {
        /// The rejected day count.
        jd: f64,
    },

    /// Returned when a persisted date string cannot be split unambiguously
    /// into signed year, month and day.
    #[error("malformed date record at line {line}: {value:?} ({reason})")]
    MalformedDateRecord {
        /// 1-based data line (0 when parsed outside of a file).
        line: u64,
        /// The offending field value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Returned when a CSV header matches neither known record layout.
    #[error("unrecognised record header: {header}")]
    UnknownFormat {
        /// The header row, comma-joined.
        header: String,
    },

    /// Wraps an error from the `csv` crate.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Wraps a standard I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SankrantiError {
    /// Attach a 1-based line number to a [`SankrantiError::MalformedDateRecord`].
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn at_line(self, at: u64) -> Self {
        match self {
            SankrantiError::MalformedDateRecord { value, reason, .. } => {
                SankrantiError::MalformedDateRecord {
                    line: at,
                    value,
                    reason,
                }
            }
            other => other,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SankrantiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year_range() {
        let err = SankrantiError::InvalidYearRange {
            start: 2026,
            end: 2024,
        };
        assert_eq!(
            err.to_string(),
            "invalid year range: start 2026 is after end 2024"
        );
    }

    #[test]
    fn error_invalid_day() {
        let err = SankrantiError::InvalidDay {
            year: 1900,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 1900-02 (max 28)");
    }

    #[test]
    fn error_malformed_record_line_is_attached() {
        let err = SankrantiError::MalformedDateRecord {
            line: 0,
            value: "--1400-12-10".to_string(),
            reason: "expected [-]YEAR-MM-DD",
        }
        .at_line(7);
        assert!(matches!(
            err,
            SankrantiError::MalformedDateRecord { line: 7, .. }
        ));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn at_line_leaves_other_variants() {
        let err = SankrantiError::InvalidMonth { month: 13 }.at_line(3);
        assert!(matches!(err, SankrantiError::InvalidMonth { month: 13 }));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<SankrantiError>();
    }
}
