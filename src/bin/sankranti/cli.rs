// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Makar Sankranti calendar-drift calculator.
#[derive(Parser)]
#[command(
    name = "sankranti",
    version,
    about = "Calendar drift of Makar Sankranti across the millennia"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute one date per year and write the CSV dataset.
    Generate(GenerateArgs),
    /// Project a dataset onto the drift axis for charting.
    Drift(DriftArgs),
    /// Convert a single Julian Day to a calendar date.
    Convert(ConvertArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First year, astronomical numbering (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i32>,

    /// Last year, inclusive (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i32>,

    /// Output CSV path (overrides config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the legacy `Year,Sankranti_Date` layout.
    #[arg(long)]
    pub legacy: bool,
}

/// Arguments for the `drift` subcommand.
#[derive(clap::Args)]
pub struct DriftArgs {
    /// Dataset written by `generate` (either layout).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only years from this one onward.
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Keep only years up to this one, inclusive.
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Also write the historical markers, anchored to the drift line.
    #[arg(long)]
    pub markers: Option<PathBuf>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Julian Day (or MJD with --mjd); may be fractional or negative.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Interpret the value as a Modified Julian Date.
    #[arg(long)]
    pub mjd: bool,
}
