// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Projection of dates onto a seasonal drift axis.
//!
//! The chart consumes `(year, relative_day, label)` triples.  The relative
//! day counts from January 1 = 1 on a fixed 365-day table, except that
//! December maps to `day − 31` (Dec 31 = 0, Dec 21 = −10), so December sits
//! directly below January instead of after November.
//!
//! | Date | Relative day |
//! |------|--------------|
//! | Dec 11 | −20 |
//! | Dec 21 | −10 |
//! | Jan 1 | 1 |
//! | Jan 14 | 14 |
//! | Jun 2 | 153 |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, COMMON_MONTH_DAYS};
use crate::generator::{SankrantiRecord, YearRange};
use crate::record::StoredRecord;

/// Relative day of the winter-solstice reference line (Dec 21).
pub const WINTER_SOLSTICE_RELATIVE_DAY: i32 = -10;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Position of `date` on the drift axis.
pub fn relative_day(date: &CalendarDate) -> i32 {
    let day = i32::from(date.day());
    if date.month() == 12 {
        return day - 31;
    }
    let before: i32 = COMMON_MONTH_DAYS
        .iter()
        .take(usize::from(date.month().saturating_sub(1)))
        .map(|&d| i32::from(d))
        .sum();
    before + day
}

/// Three-letter English month abbreviation, `None` outside 1..=12.
pub fn month_abbr(month: u8) -> Option<&'static str> {
    MONTH_ABBR.get(usize::from(month.checked_sub(1)?)).copied()
}

/// Hover label such as `"Jan 14"` (day unpadded).
pub fn formatted_day(date: &CalendarDate) -> String {
    match month_abbr(date.month()) {
        Some(abbr) => format!("{abbr} {}", date.day()),
        None => format!("{:02}-{}", date.month(), date.day()),
    }
}

/// One point of the drift line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriftPoint {
    pub year: i32,
    pub relative_day: i32,
    pub label: String,
}

impl DriftPoint {
    /// Projects `date`, generated for loop year `year`.
    pub fn new(year: i32, date: &CalendarDate) -> Self {
        Self {
            year,
            relative_day: relative_day(date),
            label: formatted_day(date),
        }
    }
}

impl From<&SankrantiRecord> for DriftPoint {
    fn from(record: &SankrantiRecord) -> Self {
        Self::new(record.year, &record.date)
    }
}

impl From<&StoredRecord> for DriftPoint {
    fn from(record: &StoredRecord) -> Self {
        Self::new(record.year, &record.date)
    }
}

/// Projects records onto the drift axis, preserving their order.
pub fn drift_points<'a, I, R>(records: I) -> Vec<DriftPoint>
where
    I: IntoIterator<Item = &'a R>,
    R: 'a,
    &'a R: Into<DriftPoint>,
{
    records.into_iter().map(Into::into).collect()
}

/// Points whose year lies in `range`, order preserved.
pub fn filter_years(points: &[DriftPoint], range: YearRange) -> Vec<DriftPoint> {
    points
        .iter()
        .filter(|p| range.contains(p.year))
        .cloned()
        .collect()
}

/// A vertical annotation on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalMarker {
    pub year: i32,
    pub label: &'static str,
    pub color: &'static str,
}

/// The eras annotated on the drift chart.
pub const HISTORICAL_MARKERS: [HistoricalMarker; 6] = [
    HistoricalMarker {
        year: -1399,
        label: "Vedanga Jyotisha (Uttarayan in Dhanishta)",
        color: "#E67E22",
    },
    HistoricalMarker {
        year: -45,
        label: "Julian Calendar",
        color: "#C0392B",
    },
    HistoricalMarker {
        year: 325,
        label: "Siddhantic Era (Uttarayan in Makar)",
        color: "#E67E22",
    },
    HistoricalMarker {
        year: 1582,
        label: "Gregorian Calendar",
        color: "#C0392B",
    },
    HistoricalMarker {
        year: 2026,
        label: "Present Day (Uttarayan in Moola/Dhanu)",
        color: "#27AE60",
    },
    HistoricalMarker {
        year: 12026,
        label: "10 Millenia Future (June Drift)",
        color: "#2980B9",
    },
];

/// A marker anchored at the drift line's height for its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMarker {
    pub marker: HistoricalMarker,
    pub relative_day: i32,
}

/// Anchors each marker to the relative day of its year.
///
/// Markers whose year has no point are anchored at 0.
pub fn resolve_markers(points: &[DriftPoint], markers: &[HistoricalMarker]) -> Vec<ResolvedMarker> {
    markers
        .iter()
        .map(|&marker| ResolvedMarker {
            marker,
            relative_day: points
                .iter()
                .find(|p| p.year == marker.year)
                .map_or(0, |p| p.relative_day),
        })
        .collect()
}
