// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use qtty::*;

use super::calendar::CalendarDate;
use super::instant::Time;
use super::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Midnight starting 1582-10-15, the first Gregorian day (JD 2 299 160.5).
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// Calendar date containing this instant.
    ///
    /// Convenience wrapper for [`CalendarDate::from_julian_day`].
    #[inline]
    pub fn calendar_date(&self) -> CalendarDate {
        CalendarDate::from_julian_day(*self)
    }

    /// Midnight that starts `date`.
    #[inline]
    pub fn from_calendar_date(date: CalendarDate) -> Self {
        date.to_julian_day()
    }

    /// Julian years elapsed since `other` (positive when `self` is later).
    #[inline]
    pub fn julian_years_since(&self, other: Self) -> f64 {
        (*self - other).value() / Self::JULIAN_YEAR.value()
    }
}
