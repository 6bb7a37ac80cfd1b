// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year-by-year generation of event dates.
//!
//! This module provides:
//! - [`YearRange`]: a closed, non-empty interval of calendar years
//! - [`SankrantiIter`]: a lazy iterator yielding one [`SankrantiRecord`] per
//!   year, in strictly increasing year order
//!
//! Each record is computed independently from the [`EpochConfig`]; no state
//! is carried between years.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::epoch::EpochConfig;
use crate::error::{Result, SankrantiError};
use crate::JulianDate;

/// Closed interval `[start, end]` of calendar years.
///
/// ```
/// use sankranti::YearRange;
///
/// let range = YearRange::new(-1399, 12026).unwrap();
/// assert_eq!(range.len(), 13_426);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// The full historical span, 1400 BCE (year −1399) to 12026 CE.
    pub const MILLENNIA: Self = Self {
        start: -1399,
        end: 12026,
    };

    /// Last year of the contemporary window (−1399 to 2500).
    pub const CONTEMPORARY_END: i32 = 2500;

    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::InvalidYearRange`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(SankrantiError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The contemporary window: [`MILLENNIA`](Self::MILLENNIA) cut at 2500.
    pub const fn contemporary() -> Self {
        Self {
            start: Self::MILLENNIA.start,
            end: Self::CONTEMPORARY_END,
        }
    }

    /// First year, inclusive.
    #[inline]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Last year, inclusive.
    #[inline]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Number of years in the range (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    /// Returns `false`: a constructed range holds at least one year.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `year` lies within the range.
    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Years of the range in increasing order.
    #[inline]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::MILLENNIA
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// One generated year: the loop year, its event instant, and its date.
///
/// `year` is the calendar year the instant was extrapolated for.
/// `date.year()` may differ from it when the event falls in the December
/// before that year (e.g. year −1399 → −1400-12-10).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SankrantiRecord {
    pub year: i32,
    pub jd: JulianDate,
    pub date: CalendarDate,
}

impl SankrantiRecord {
    /// Builds the record for `year` under `epoch`.
    pub fn for_year(epoch: &EpochConfig, year: i32) -> Self {
        let jd = epoch.jd_for_year(year);
        let date = CalendarDate::from_julian_day(jd);
        trace!(year, jd = jd.value(), %date, "computed record");
        Self { year, jd, date }
    }
}

/// Lazy iterator over the records of a [`YearRange`].
#[derive(Debug, Clone)]
pub struct SankrantiIter {
    epoch: EpochConfig,
    years: RangeInclusive<i32>,
}

impl SankrantiIter {
    /// Creates an iterator over `range` under `epoch`.
    pub fn new(epoch: EpochConfig, range: YearRange) -> Self {
        debug!(
            %range,
            n_years = range.len(),
            reference_year = epoch.reference_year(),
            mean_year = epoch.mean_year().value(),
            "generating records"
        );
        Self {
            epoch,
            years: range.years(),
        }
    }
}

impl Iterator for SankrantiIter {
    type Item = SankrantiRecord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.years
            .next()
            .map(|year| SankrantiRecord::for_year(&self.epoch, year))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.years.size_hint()
    }
}

impl DoubleEndedIterator for SankrantiIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.years
            .next_back()
            .map(|year| SankrantiRecord::for_year(&self.epoch, year))
    }
}

impl ExactSizeIterator for SankrantiIter {}

impl FusedIterator for SankrantiIter {}

/// Eagerly computes every record of `range`.
pub fn sankranti_dates(epoch: &EpochConfig, range: YearRange) -> Vec<SankrantiRecord> {
    SankrantiIter::new(*epoch, range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn range_rejects_reversed_bounds() {
        assert!(matches!(
            YearRange::new(10, 9),
            Err(SankrantiError::InvalidYearRange { start: 10, end: 9 })
        ));
    }

    #[test]
    fn single_year_range() {
        let range = YearRange::new(2024, 2024).unwrap();
        assert_eq!(range.len(), 1);
        let records = sankranti_dates(&EpochConfig::default(), range);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2024);
        assert_eq!(records[0].date, ymd(2024, 1, 15));
    }

    #[test]
    fn range_len_and_contains() {
        let range = YearRange::MILLENNIA;
        assert_eq!(range.len(), 13_426);
        assert!(range.contains(-1399));
        assert!(range.contains(12026));
        assert!(!range.contains(12027));
        assert!(!range.is_empty());
        assert_eq!(YearRange::contemporary().end(), 2500);
        assert_eq!(range.to_string(), "-1399..=12026");
    }

    #[test]
    fn range_len_does_not_overflow() {
        let range = YearRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(range.len() as u64, 1u64 << 32);
    }

    #[test]
    fn iterator_is_exact_size_and_ordered() {
        let range = YearRange::new(2020, 2030).unwrap();
        let iter = SankrantiIter::new(EpochConfig::default(), range);
        assert_eq!(iter.len(), 11);
        let years: Vec<i32> = iter.map(|r| r.year).collect();
        assert_eq!(years, (2020..=2030).collect::<Vec<_>>());
    }

    #[test]
    fn iterator_from_both_ends() {
        let range = YearRange::new(2024, 2026).unwrap();
        let mut iter = SankrantiIter::new(EpochConfig::default(), range);
        assert_eq!(iter.next_back().map(|r| r.date), Some(ymd(2026, 1, 14)));
        assert_eq!(iter.next().map(|r| r.date), Some(ymd(2024, 1, 15)));
        assert_eq!(iter.len(), 1);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn loop_year_may_differ_from_date_year() {
        let record = SankrantiRecord::for_year(&EpochConfig::default(), -1399);
        assert_eq!(record.year, -1399);
        assert_eq!(record.date, ymd(-1400, 12, 10));
    }

    #[test]
    fn record_jd_follows_epoch() {
        let epoch = EpochConfig::default();
        let record = SankrantiRecord::for_year(&epoch, 2100);
        assert_eq!(record.jd, epoch.jd_for_year(2100));
        assert_eq!(record.date, record.jd.calendar_date());
    }
}
