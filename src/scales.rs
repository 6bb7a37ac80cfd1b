// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values in
//! that counter relate to the absolute **Julian Day** axis.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day | 0.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |
//!
//! The drift model works on a mean-year extrapolation, not on an
//! ephemeris, so no physical scale (TT, TDB, UT) is distinguished here:
//! a Julian Day is simply a continuous day count.

use super::instant::TimeScale;
use qtty::Days;

/// Julian Day: the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date, JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Time;

    #[test]
    fn jd_is_identity() {
        assert_eq!(JD::to_jd(Days::new(2_451_545.0)), Days::new(2_451_545.0));
        assert_eq!(JD::from_jd(Days::new(2_451_545.0)), Days::new(2_451_545.0));
    }

    #[test]
    fn mjd_offset_roundtrip() {
        let jd = Days::new(2_460_324.5);
        let mjd = MJD::from_jd(jd);
        assert_eq!(mjd, Days::new(60_324.0));
        assert_eq!(MJD::to_jd(mjd), jd);
    }

    #[test]
    fn mjd_time_converts_to_jd() {
        let mjd = Time::<MJD>::new(51_544.5);
        let jd = mjd.to::<JD>();
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }
}
