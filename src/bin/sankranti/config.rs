// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use qtty::Days;
use serde::Deserialize;

use sankranti::{EpochConfig, JulianDate, RecordFormat, YearRange};

/// Default dataset path, matching the historical file name.
pub const DEFAULT_OUTPUT: &str = "makar_sankranti_dates_1400BC_12026AD.csv";

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SankrantiConfig {
    /// Reference epoch.
    #[serde(default)]
    pub epoch: EpochToml,

    /// Year range.
    #[serde(default)]
    pub range: RangeToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpochToml {
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    /// Calibrated instant as a Julian Day.
    #[serde(default)]
    pub reference_jd: Option<f64>,
    /// Calibrated instant as an RFC 3339 timestamp.
    #[serde(default)]
    pub reference_utc: Option<String>,
    #[serde(default = "default_mean_year_days")]
    pub mean_year_days: f64,
}

impl Default for EpochToml {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            reference_jd: None,
            reference_utc: None,
            mean_year_days: default_mean_year_days(),
        }
    }
}

fn default_reference_year() -> i32 {
    sankranti::MAKAR_SANKRANTI_REFERENCE_YEAR
}
fn default_mean_year_days() -> f64 {
    sankranti::SIDEREAL_YEAR.value()
}

impl EpochToml {
    /// Builds the library epoch; the calibrated Makar Sankranti instant is
    /// used when neither `reference_jd` nor `reference_utc` is given.
    pub fn build(&self) -> Result<EpochConfig> {
        let mean_year = Days::new(self.mean_year_days);
        let epoch = match (&self.reference_jd, &self.reference_utc) {
            (Some(_), Some(_)) => {
                bail!("set only one of [epoch].reference_jd and [epoch].reference_utc")
            }
            (Some(jd), None) => {
                EpochConfig::new(self.reference_year, JulianDate::new(*jd), mean_year)?
            }
            (None, Some(utc)) => {
                let instant = DateTime::parse_from_rfc3339(utc)
                    .with_context(|| format!("invalid [epoch].reference_utc: {utc}"))?
                    .with_timezone(&Utc);
                EpochConfig::from_utc(self.reference_year, instant, mean_year)?
            }
            (None, None) => EpochConfig::new(
                self.reference_year,
                sankranti::MAKAR_SANKRANTI_REFERENCE_JD,
                mean_year,
            )?,
        };
        Ok(epoch)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_start_year() -> i32 {
    YearRange::MILLENNIA.start()
}
fn default_end_year() -> i32 {
    YearRange::MILLENNIA.end()
}

impl RangeToml {
    /// Builds the year range, letting CLI values override the file.
    pub fn build(&self, start: Option<i32>, end: Option<i32>) -> Result<YearRange> {
        let range = YearRange::new(
            start.unwrap_or(self.start_year),
            end.unwrap_or(self.end_year),
        )?;
        Ok(range)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub format: RecordFormat,
}

/// Loads the configuration file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<SankrantiConfig> {
    let Some(path) = path else {
        return Ok(SankrantiConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SankrantiConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: SankrantiConfig = toml::from_str("").unwrap();
        let epoch = config.epoch.build().unwrap();
        assert_eq!(epoch, EpochConfig::makar_sankranti());
        assert_eq!(config.range.build(None, None).unwrap(), YearRange::MILLENNIA);
        assert_eq!(config.output.format, RecordFormat::Structured);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn full_file() {
        let config: SankrantiConfig = toml::from_str(
            r#"
            [epoch]
            reference_year = 2000
            reference_jd = 2451560.5
            mean_year_days = 365.2422

            [range]
            start_year = -500
            end_year = 2500

            [output]
            path = "out.csv"
            format = "legacy"
            "#,
        )
        .unwrap();
        let epoch = config.epoch.build().unwrap();
        assert_eq!(epoch.reference_year(), 2000);
        assert_eq!(epoch.reference_jd().value(), 2_451_560.5);
        assert_eq!(epoch.mean_year().value(), 365.2422);
        let range = config.range.build(None, Some(100)).unwrap();
        assert_eq!((range.start(), range.end()), (-500, 100));
        assert_eq!(config.output.format, RecordFormat::Legacy);
        assert_eq!(config.output.path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn reference_utc() {
        let config: SankrantiConfig = toml::from_str(
            r#"
            [epoch]
            reference_utc = "2024-01-15T09:15:00Z"
            "#,
        )
        .unwrap();
        let epoch = config.epoch.build().unwrap();
        let expected = sankranti::MAKAR_SANKRANTI_REFERENCE_JD.value();
        assert!((epoch.reference_jd().value() - expected).abs() < 1e-6);
    }

    #[test]
    fn conflicting_reference_is_rejected() {
        let config: SankrantiConfig = toml::from_str(
            r#"
            [epoch]
            reference_jd = 2460324.5
            reference_utc = "2024-01-15T00:00:00Z"
            "#,
        )
        .unwrap();
        assert!(config.epoch.build().is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SankrantiConfig>("[range]\nfirst_year = 1\n").is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let config = SankrantiConfig::default();
        assert!(config.range.build(Some(3000), Some(2000)).is_err());
    }

    #[test]
    fn non_positive_mean_year_is_rejected() {
        let config: SankrantiConfig = toml::from_str("[epoch]\nmean_year_days = 0.0\n").unwrap();
        assert!(config.epoch.build().is_err());
    }

    #[test]
    fn missing_file_has_context() {
        let err = load(Some(Path::new("/nonexistent/sankranti.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
