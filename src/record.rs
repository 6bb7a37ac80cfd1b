// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! CSV persistence of generated dates.
//!
//! Two layouts are understood:
//!
//! | Format | Header | Date encoding |
//! |--------|--------|---------------|
//! | [`RecordFormat::Structured`] | `Year,Date_Year,Month,Day` | signed year, month and day in separate columns |
//! | [`RecordFormat::Legacy`] | `Year,Sankranti_Date` | one `[-]YEAR-MM-DD` string |
//!
//! The structured layout is the source of truth.  The legacy layout exists
//! for compatibility with previously published datasets; its strings are
//! parsed strictly and anything that does not split into a signed year,
//! month and day is reported as
//! [`SankrantiError::MalformedDateRecord`].
//!
//! Readers auto-detect the layout from the header row.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::drift::{DriftPoint, ResolvedMarker};
use crate::error::{Result, SankrantiError};
use crate::generator::SankrantiRecord;

/// Header of the structured layout.
pub const STRUCTURED_HEADER: [&str; 4] = ["Year", "Date_Year", "Month", "Day"];

/// Header of the legacy single-string layout.
pub const LEGACY_HEADER: [&str; 2] = ["Year", "Sankranti_Date"];

/// Header of the drift-line export.
pub const DRIFT_HEADER: [&str; 3] = ["Year", "Relative_Day", "Formatted_Day"];

/// Header of the resolved-marker export.
pub const MARKER_HEADER: [&str; 4] = ["Year", "Relative_Day", "Label", "Color"];

/// On-disk layout of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordFormat {
    #[default]
    Structured,
    Legacy,
}

impl RecordFormat {
    /// Identifies the layout from a header row.
    ///
    /// # Errors
    ///
    /// Returns [`SankrantiError::UnknownFormat`] if the header matches
    /// neither layout.
    pub fn detect(header: &csv::StringRecord) -> Result<Self> {
        if header.iter().eq(STRUCTURED_HEADER) {
            Ok(Self::Structured)
        } else if header.iter().eq(LEGACY_HEADER) {
            Ok(Self::Legacy)
        } else {
            Err(SankrantiError::UnknownFormat {
                header: header.iter().collect::<Vec<_>>().join(","),
            })
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => f.write_str("structured"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!(
                "unknown record format '{other}' (expected 'structured' or 'legacy')"
            )),
        }
    }
}

/// A persisted record: the loop year and its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredRecord {
    pub year: i32,
    pub date: CalendarDate,
}

impl From<SankrantiRecord> for StoredRecord {
    fn from(record: SankrantiRecord) -> Self {
        Self {
            year: record.year,
            date: record.date,
        }
    }
}

impl From<&SankrantiRecord> for StoredRecord {
    fn from(record: &SankrantiRecord) -> Self {
        Self::from(*record)
    }
}

// ── Writers ───────────────────────────────────────────────────────────────

/// Writes records in `format`, returning the number of data rows.
pub fn write_records<W, I>(writer: W, records: I, format: RecordFormat) -> Result<usize>
where
    W: io::Write,
    I: IntoIterator<Item = StoredRecord>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0usize;
    match format {
        RecordFormat::Structured => {
            wtr.write_record(STRUCTURED_HEADER)?;
            for record in records {
                wtr.write_record([
                    record.year.to_string(),
                    record.date.year().to_string(),
                    record.date.month().to_string(),
                    record.date.day().to_string(),
                ])?;
                rows += 1;
            }
        }
        RecordFormat::Legacy => {
            wtr.write_record(LEGACY_HEADER)?;
            for record in records {
                wtr.write_record([record.year.to_string(), record.date.legacy_string()])?;
                rows += 1;
            }
        }
    }
    wtr.flush()?;
    debug!(rows, %format, "wrote records");
    Ok(rows)
}

/// Writes records to a file at `path`, replacing any existing file.
pub fn write_records_path<P, I>(path: P, records: I, format: RecordFormat) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = StoredRecord>,
{
    let file = File::create(path.as_ref())?;
    write_records(BufWriter::new(file), records, format)
}

/// Writes the drift line as `Year,Relative_Day,Formatted_Day`.
pub fn write_drift_points<W: io::Write>(writer: W, points: &[DriftPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(DRIFT_HEADER)?;
    for point in points {
        wtr.write_record([
            point.year.to_string(),
            point.relative_day.to_string(),
            point.label.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes resolved markers as `Year,Relative_Day,Label,Color`.
pub fn write_markers<W: io::Write>(writer: W, markers: &[ResolvedMarker]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(MARKER_HEADER)?;
    for resolved in markers {
        wtr.write_record([
            resolved.marker.year.to_string(),
            resolved.relative_day.to_string(),
            resolved.marker.label.to_string(),
            resolved.marker.color.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

// ── Readers ───────────────────────────────────────────────────────────────

/// Reads records in either layout, preserving file order.
///
/// # Errors
///
/// - [`SankrantiError::UnknownFormat`] for an unrecognised header.
/// - [`SankrantiError::MalformedDateRecord`] for a row whose year or date
///   cannot be parsed; `line` is the 1-based data row.
/// - [`SankrantiError::Csv`] for structural CSV problems (e.g. a row with
///   the wrong number of fields).
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<StoredRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let format = RecordFormat::detect(rdr.headers()?)?;
    if format == RecordFormat::Legacy {
        warn!("reading legacy single-string dates; negative years are parsed by leading sign");
    }

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row = row?;
        let line = index as u64 + 1;
        let record = match format {
            RecordFormat::Structured => parse_structured(&row),
            RecordFormat::Legacy => parse_legacy(&row),
        }
        .map_err(|e| e.at_line(line))?;
        records.push(record);
    }
    debug!(rows = records.len(), %format, "read records");
    Ok(records)
}

/// Reads records from the file at `path`.
pub fn read_records_path<P: AsRef<Path>>(path: P) -> Result<Vec<StoredRecord>> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}

fn field<'r>(row: &'r csv::StringRecord, index: usize) -> &'r str {
    row.get(index).unwrap_or_default()
}

fn parse_int<T: FromStr>(value: &str, reason: &'static str) -> Result<T> {
    value
        .parse()
        .map_err(|_| SankrantiError::MalformedDateRecord {
            line: 0,
            value: value.to_string(),
            reason,
        })
}

fn parse_structured(row: &csv::StringRecord) -> Result<StoredRecord> {
    let year = parse_int(field(row, 0), "year is not an integer")?;
    let date_year = parse_int(field(row, 1), "date year is not an integer")?;
    let month = parse_int(field(row, 2), "month is not an integer")?;
    let day = parse_int(field(row, 3), "day is not an integer")?;
    let date = CalendarDate::new(date_year, month, day).map_err(|_| {
        SankrantiError::MalformedDateRecord {
            line: 0,
            value: format!("{date_year},{month},{day}"),
            reason: "no such calendar date",
        }
    })?;
    Ok(StoredRecord { year, date })
}

fn parse_legacy(row: &csv::StringRecord) -> Result<StoredRecord> {
    let year = parse_int(field(row, 0), "year is not an integer")?;
    let date = CalendarDate::parse_legacy(field(row, 1))?;
    Ok(StoredRecord { year, date })
}
