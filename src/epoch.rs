// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference epoch for the mean-year extrapolation.
//!
//! An [`EpochConfig`] anchors the whole sequence: one calibrated instant
//! (`reference_jd`) for one calendar year (`reference_year`), plus a fixed
//! mean year length applied uniformly across the span.  There are no
//! correction terms; the model is
//!
//! ```text
//! jd(y) = reference_jd + (y − reference_year) · mean_year
//! ```

use chrono::{DateTime, Utc};
use qtty::Days;

use crate::error::{Result, SankrantiError};
use crate::JulianDate;

/// Mean sidereal year in days.
pub const SIDEREAL_YEAR: Days = Days::new(365.256_363);

/// Calendar year of the calibrated Makar Sankranti instant.
pub const MAKAR_SANKRANTI_REFERENCE_YEAR: i32 = 2024;

/// Calibrated Makar Sankranti instant for 2024 (2024-01-15T09:15Z).
pub const MAKAR_SANKRANTI_REFERENCE_JD: JulianDate =
    JulianDate::new(2_460_324.0 + 0.385_416_666_66 + 0.5);

/// Immutable epoch configuration passed to the generator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EpochConfig {
    reference_year: i32,
    reference_jd: JulianDate,
    mean_year: Days,
}

impl EpochConfig {
    /// Creates an epoch from a calibrated instant and a mean year length.
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::InvalidEpoch`] if `reference_jd` is not
    /// finite or `mean_year` is not a finite positive number of days.
    pub fn new(reference_year: i32, reference_jd: JulianDate, mean_year: Days) -> Result<Self> {
        if !reference_jd.is_finite() {
            return Err(SankrantiError::InvalidEpoch {
                reason: format!("reference JD must be finite, got {}", reference_jd.value()),
            });
        }
        let days = mean_year.value();
        if !(days.is_finite() && days > 0.0) {
            return Err(SankrantiError::InvalidEpoch {
                reason: format!("mean year must be a positive number of days, got {days}"),
            });
        }
        Ok(Self {
            reference_year,
            reference_jd,
            mean_year,
        })
    }

    /// Creates an epoch whose calibrated instant is given in UTC.
    ///
    /// # Errors
    ///
    /// Same as [`EpochConfig::new`].
    pub fn from_utc(reference_year: i32, instant: DateTime<Utc>, mean_year: Days) -> Result<Self> {
        Self::new(reference_year, JulianDate::from_utc(instant), mean_year)
    }

    /// The calibrated Makar Sankranti epoch on the mean sidereal year.
    pub const fn makar_sankranti() -> Self {
        Self {
            reference_year: MAKAR_SANKRANTI_REFERENCE_YEAR,
            reference_jd: MAKAR_SANKRANTI_REFERENCE_JD,
            mean_year: SIDEREAL_YEAR,
        }
    }

    /// Calendar year anchored by [`reference_jd`](Self::reference_jd).
    #[inline]
    pub const fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Calibrated instant for the reference year.
    #[inline]
    pub const fn reference_jd(&self) -> JulianDate {
        self.reference_jd
    }

    /// Fixed increment between consecutive years.
    #[inline]
    pub const fn mean_year(&self) -> Days {
        self.mean_year
    }

    /// Julian Day of the event in calendar year `year`.
    #[inline]
    pub fn jd_for_year(&self, year: i32) -> JulianDate {
        let offset = f64::from(year) - f64::from(self.reference_year);
        self.reference_jd + Days::new(offset * self.mean_year.value())
    }

    /// Days per year by which the event moves on a Julian-year axis.
    ///
    /// Positive means the event falls later in the calendar each year.
    #[inline]
    pub fn drift_per_julian_year(&self) -> Days {
        self.mean_year - JulianDate::JULIAN_YEAR
    }
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self::makar_sankranti()
    }
}
