// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Convert command: a single Julian Day to a calendar date.

use anyhow::{Context, Result};

use sankranti::{formatted_day, relative_day, CalendarDate, JulianDate, ModifiedJulianDate, JD};

use crate::cli::ConvertArgs;

pub fn run(args: ConvertArgs) -> Result<()> {
    let jd: JulianDate = if args.mjd {
        ModifiedJulianDate::new(args.value).to::<JD>()
    } else {
        JulianDate::new(args.value)
    };

    let date = CalendarDate::try_from_julian_day(jd)
        .with_context(|| format!("cannot convert {}", args.value))?;
    let calendar = if date.is_gregorian() {
        "Gregorian"
    } else {
        "Julian"
    };
    println!(
        "{date} ({}, {calendar} calendar, relative day {})",
        formatted_day(&date),
        relative_day(&date)
    );
    Ok(())
}
