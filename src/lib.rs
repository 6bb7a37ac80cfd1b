// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sankranti
//!
//! Long-term calendar drift of a sidereal-year anniversary (Makar
//! Sankranti), computed on the Julian Day axis.
//!
//! The event instant for calendar year `y` is a pure linear extrapolation
//! from one calibrated epoch by a fixed mean year, and each instant is
//! converted to a calendar date with the Julian/Gregorian switch at
//! 1582-10-15.  No ephemeris is involved: the mean sidereal year is applied
//! uniformly across the whole multi-millennial span.
//!
//! # Core types
//!
//! - [`Time<S>`]: day-counter instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: type alias for `Time<JD>`.
//! - [`CalendarDate`]: `(year, month, day)` in astronomical year numbering.
//! - [`EpochConfig`]: immutable reference epoch and mean year length.
//! - [`YearRange`]: closed interval of calendar years.
//! - [`SankrantiIter`]: lazy, year-ordered stream of [`SankrantiRecord`]s.
//! - [`DriftPoint`]: `(year, relative_day, label)` triple for charting.
//!
//! # Quick example
//!
//! ```
//! use sankranti::{sankranti_dates, CalendarDate, EpochConfig, YearRange};
//!
//! let epoch = EpochConfig::makar_sankranti();
//! let records = sankranti_dates(&epoch, YearRange::new(2024, 2026).unwrap());
//! assert_eq!(records[0].date, CalendarDate::new(2024, 1, 15).unwrap());
//! assert_eq!(records[2].date.to_string(), "2026-01-14");
//! ```

mod calendar;
mod drift;
mod epoch;
mod error;
mod generator;
pub(crate) mod instant;
mod julian_date_ext;
pub mod record;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    days_in_month, is_leap_year, CalendarDate, GREGORIAN_SWITCH_DAY, JULIAN_DAY_LIMIT,
};
pub use drift::{
    drift_points, filter_years, formatted_day, month_abbr, relative_day, resolve_markers,
    DriftPoint, HistoricalMarker, ResolvedMarker, HISTORICAL_MARKERS,
    WINTER_SOLSTICE_RELATIVE_DAY,
};
pub use epoch::{
    EpochConfig, MAKAR_SANKRANTI_REFERENCE_JD, MAKAR_SANKRANTI_REFERENCE_YEAR, SIDEREAL_YEAR,
};
pub use error::{Result, SankrantiError};
pub use generator::{sankranti_dates, SankrantiIter, SankrantiRecord, YearRange};
pub use instant::{Time, TimeScale};
pub use record::{RecordFormat, StoredRecord};
pub use scales::{JD, MJD};

/// Julian Day: continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date: `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
