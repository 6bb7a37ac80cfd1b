// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates on the Julian Day axis.
//!
//! [`CalendarDate`] is a `(year, month, day)` triple in **astronomical year
//! numbering** (year 0 exists, 1 BCE = 0, 2 BCE = −1, …).  Dates before
//! 1582-10-15 are reckoned in the Julian calendar, dates from it onward in
//! the Gregorian calendar, matching the switch built into the conversion:
//!
//! | JD (after +0.5 shift) | Branch |
//! |-----------------------|--------|
//! | `z < 2 299 161` | Julian, no correction |
//! | `z ≥ 2 299 161` | Gregorian century correction |
//!
//! Every integer-division step is an explicit `f64::floor`, so the result
//! does not depend on how a particular integer type rounds negative
//! operands.  For the generator's domain all intermediates are positive and
//! floor coincides with truncation toward zero.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SankrantiError};
use crate::{JulianDate, Time};

/// First day number (after the +0.5 shift) handled by the Gregorian branch.
pub const GREGORIAN_SWITCH_DAY: f64 = 2_299_161.0;

/// Length of each month in a common (non-leap) year, January first.
pub const COMMON_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Largest `|JD|` accepted by [`CalendarDate::try_from_julian_day`].
///
/// About ±1.9 billion years, inside `i32` and far below the point where
/// `f64` loses whole days.
pub const JULIAN_DAY_LIMIT: f64 = 7.0e11;

/// A calendar date in astronomical year numbering.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// First day of the Gregorian calendar, 1582-10-15.
    pub const GREGORIAN_REFORM: Self = Self {
        year: 1582,
        month: 10,
        day: 15,
    };

    /// Creates a validated date.
    ///
    /// The day is checked against the month length of the calendar in force
    /// on that date (Julian before 1582-10-15, Gregorian from it).
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`SankrantiError::InvalidDay`] if `day` is 0 or past the end
    /// of the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SankrantiError::InvalidMonth { month });
        }
        let date = Self { year, month, day };
        let max_day = days_in_month(year, month, date.is_gregorian());
        if !(1..=max_day).contains(&day) {
            return Err(SankrantiError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(date)
    }

    /// Converts a Julian Day to the calendar date containing it.
    ///
    /// Civil days start at midnight, i.e. at `JD n + 0.5`.  The day-of-month
    /// carries the fraction of the day internally; that fraction is
    /// truncated, so every instant within a civil day maps to that day.
    ///
    /// Valid for `|jd| <= JULIAN_DAY_LIMIT`.  Outside that domain the year
    /// no longer fits in `i32` and the result is meaningless; use
    /// [`try_from_julian_day`](Self::try_from_julian_day) for untrusted input.
    pub fn from_julian_day(jd: JulianDate) -> Self {
        let shifted = jd.value() + 0.5;
        let z = shifted.floor();
        let f = shifted - z;

        let a = if z < GREGORIAN_SWITCH_DAY {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        Self {
            year: year as i32,
            month: month as u8,
            day: day.trunc() as u8,
        }
    }

    /// Checked variant of [`from_julian_day`](Self::from_julian_day).
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::JulianDayOutOfRange`] if `jd` is not finite
    /// or its magnitude exceeds [`JULIAN_DAY_LIMIT`].
    pub fn try_from_julian_day(jd: JulianDate) -> Result<Self> {
        let value = jd.value();
        if !(-JULIAN_DAY_LIMIT..=JULIAN_DAY_LIMIT).contains(&value) {
            return Err(SankrantiError::JulianDayOutOfRange { jd: value });
        }
        Ok(Self::from_julian_day(jd))
    }

    /// Julian Day of the midnight that starts this date (always `n + 0.5`).
    pub fn to_julian_day(&self) -> JulianDate {
        let (mut y, mut m) = (f64::from(self.year), f64::from(self.month));
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }
        let b = if self.is_gregorian() {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };
        let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
            + f64::from(self.day)
            + b
            - 1524.5;
        Time::new(jd)
    }

    /// Parses the historical `"[-]YEAR-MM-DD"` string form.
    ///
    /// A single leading `-` is the year's sign; the remainder must be exactly
    /// three dash-separated decimal fields.  `"-1400-12-10"` and
    /// `"1400-12-10"` therefore parse to different years.
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::MalformedDateRecord`] (with `line = 0`) for
    /// any string that does not split into a valid date.
    pub fn parse_legacy(value: &str) -> Result<Self> {
        let malformed = |reason: &'static str| SankrantiError::MalformedDateRecord {
            line: 0,
            value: value.to_string(),
            reason,
        };

        let trimmed = value.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut fields = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed("expected [-]YEAR-MM-DD"));
        };

        let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !(is_number(y) && is_number(m) && is_number(d)) {
            return Err(malformed("non-numeric field"));
        }

        let magnitude: i32 = y.parse().map_err(|_| malformed("year out of range"))?;
        let year = if negative { -magnitude } else { magnitude };
        let month: u8 = m.parse().map_err(|_| malformed("month out of range"))?;
        let day: u8 = d.parse().map_err(|_| malformed("day out of range"))?;

        Self::new(year, month, day).map_err(|_| malformed("no such calendar date"))
    }

    /// The historical `"[-]YEAR-MM-DD"` string form.
    ///
    /// Display only: the year is unpadded and its sign shares the `-`
    /// delimiter, so the triple is the source of truth.
    pub fn legacy_string(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Whether this date is reckoned in the Gregorian calendar.
    #[inline]
    pub fn is_gregorian(&self) -> bool {
        *self >= Self::GREGORIAN_REFORM
    }

    /// Astronomical year (may be zero or negative).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1..=31.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

/// Whether `year` is a leap year in the Julian or Gregorian calendar.
pub fn is_leap_year(year: i32, gregorian: bool) -> bool {
    let divisible = |n: i32| year.rem_euclid(n) == 0;
    if gregorian {
        divisible(4) && (!divisible(100) || divisible(400))
    } else {
        divisible(4)
    }
}

/// Number of days in `month` of `year`.
///
/// `month` must be in 1..=12.
pub fn days_in_month(year: i32, month: u8, gregorian: bool) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year, gregorian) {
        29
    } else {
        COMMON_MONTH_DAYS[usize::from(month - 1)]
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = SankrantiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_legacy(s)
    }
}

impl From<JulianDate> for CalendarDate {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_day(jd)
    }
}

impl From<CalendarDate> for JulianDate {
    fn from(date: CalendarDate) -> Self {
        date.to_julian_day()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn convert(jd: f64) -> CalendarDate {
        CalendarDate::from_julian_day(JulianDate::new(jd))
    }

    #[test]
    fn huge_julian_days_are_rejected() {
        for jd in [1e12, -1e12, 1e20, -1e20, f64::NAN, f64::INFINITY] {
            let err = CalendarDate::try_from_julian_day(JulianDate::new(jd)).unwrap_err();
            assert!(
                matches!(err, SankrantiError::JulianDayOutOfRange { .. }),
                "{jd}: {err}"
            );
        }
    }

    #[test]
    fn domain_edges_give_valid_dates() {
        for jd in [JULIAN_DAY_LIMIT, -JULIAN_DAY_LIMIT, 0.0, -0.5] {
            let d = CalendarDate::try_from_julian_day(JulianDate::new(jd)).unwrap();
            assert!(
                CalendarDate::new(d.year(), d.month(), d.day()).is_ok(),
                "{jd} gave {d:?}"
            );
        }
        let far = CalendarDate::try_from_julian_day(JulianDate::new(JULIAN_DAY_LIMIT)).unwrap();
        assert!(far.year() > 1_900_000_000);
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(convert(2_451_545.0), ymd(2000, 1, 1));
    }

    #[test]
    fn calibration_point_2024() {
        assert_eq!(convert(2_460_324.0 + 0.38541666666 + 0.5), ymd(2024, 1, 15));
    }

    #[test]
    fn midnight_belongs_to_the_new_day() {
        assert_eq!(convert(2_460_324.5), ymd(2024, 1, 15));
        assert_eq!(convert(2_460_324.499_999), ymd(2024, 1, 14));
    }

    #[test]
    fn fraction_is_truncated_not_rounded() {
        // 23:59 on 2024-01-15
        assert_eq!(convert(2_460_325.499), ymd(2024, 1, 15));
    }

    #[test]
    fn switchover_both_sides() {
        let julian = convert(2_299_159.5);
        let gregorian = convert(2_299_160.5);
        assert_eq!(julian, ymd(1582, 10, 4));
        assert_eq!(gregorian, ymd(1582, 10, 15));
        assert!(!julian.is_gregorian());
        assert!(gregorian.is_gregorian());
    }

    #[test]
    fn far_past_uses_julian_branch() {
        // Known value from the millennia dataset: loop year −1399.
        assert_eq!(convert(1_210_052.354_868), ymd(-1400, 12, 10));
    }

    #[test]
    fn julian_calendar_epoch() {
        // JD 0.0 is noon of −4712-01-01 (Julian).
        assert_eq!(convert(0.0), ymd(-4712, 1, 1));
    }

    #[test]
    fn far_future() {
        // 12026-01-01 (Gregorian)
        let date = ymd(12026, 1, 1);
        assert_eq!(convert(date.to_julian_day().value() + 0.25), date);
    }

    #[test]
    fn to_julian_day_known_values() {
        assert_eq!(ymd(2000, 1, 1).to_julian_day().value(), 2_451_544.5);
        assert_eq!(ymd(1582, 10, 15).to_julian_day().value(), 2_299_160.5);
        assert_eq!(ymd(1582, 10, 4).to_julian_day().value(), 2_299_159.5);
        assert_eq!(ymd(-4712, 1, 1).to_julian_day().value(), -0.5);
    }

    #[test]
    fn roundtrip_across_both_calendars() {
        let mut jd = 1_000_000.5;
        while jd < 6_500_000.0 {
            let date = convert(jd);
            assert!((1..=12).contains(&date.month()), "{jd} -> {date}");
            assert!(CalendarDate::new(date.year(), date.month(), date.day()).is_ok());
            assert_eq!(date.to_julian_day().value(), jd, "{date}");
            jd += 9_973.0;
        }
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000, true));
        assert!(!is_leap_year(1900, true));
        assert!(is_leap_year(1500, false));
        assert!(is_leap_year(0, false));
        assert!(is_leap_year(-1400, false));
        assert!(!is_leap_year(-1399, false));
    }

    #[test]
    fn new_validates_against_calendar_in_force() {
        assert!(CalendarDate::new(1500, 2, 29).is_ok());
        assert!(matches!(
            CalendarDate::new(1700, 2, 29),
            Err(SankrantiError::InvalidDay { max_day: 28, .. })
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(SankrantiError::InvalidMonth { month: 13 })
        ));
        assert!(CalendarDate::new(2024, 4, 0).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn legacy_string_format() {
        assert_eq!(ymd(2026, 1, 14).legacy_string(), "2026-01-14");
        assert_eq!(ymd(-1400, 12, 10).legacy_string(), "-1400-12-10");
        assert_eq!(ymd(5, 1, 2).to_string(), "5-01-02");
    }

    #[test]
    fn parse_legacy_distinguishes_sign() {
        let negative = CalendarDate::parse_legacy("-1400-12-10").unwrap();
        let positive = CalendarDate::parse_legacy("1400-12-10").unwrap();
        assert_eq!(negative, ymd(-1400, 12, 10));
        assert_eq!(positive, ymd(1400, 12, 10));
        assert_ne!(negative, positive);
    }

    #[test]
    fn parse_legacy_via_from_str() {
        let date: CalendarDate = "2026-01-14".parse().unwrap();
        assert_eq!(date, ymd(2026, 1, 14));
    }

    #[test]
    fn parse_legacy_rejects_ambiguous_strings() {
        for bad in [
            "",
            "-",
            "--1400-12-10",
            "1400-12",
            "1400-12-10-01",
            "-1400--12-10",
            "1400-1a-10",
            "+1400-12-10",
            "1400-13-01",
            "1400-02-30",
            "99999999999-01-01",
        ] {
            let err = CalendarDate::parse_legacy(bad).unwrap_err();
            assert!(
                matches!(err, SankrantiError::MalformedDateRecord { .. }),
                "{bad:?} gave {err}"
            );
        }
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(ymd(-1400, 12, 10) < ymd(-1399, 1, 1));
        assert!(ymd(1582, 10, 4) < CalendarDate::GREGORIAN_REFORM);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_named_fields() {
        let json = serde_json::to_string(&ymd(-1400, 12, 10)).unwrap();
        assert_eq!(json, r#"{"year":-1400,"month":12,"day":10}"#);
    }
}
