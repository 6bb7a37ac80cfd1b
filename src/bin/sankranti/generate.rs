// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generate command: one date per year, written as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sankranti::record::write_records_path;
use sankranti::{RecordFormat, SankrantiIter, SankrantiRecord, StoredRecord};

use crate::cli::GenerateArgs;
use crate::config::{self, DEFAULT_OUTPUT};

/// Number of leading/trailing entries echoed after writing.
const PREVIEW: usize = 5;

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Resolve configuration
    let config = config::load(args.config.as_deref())?;
    let epoch = config.epoch.build()?;
    let range = config.range.build(args.start, args.end)?;
    let format = if args.legacy {
        RecordFormat::Legacy
    } else {
        config.output.format
    };
    let output = args
        .output
        .or(config.output.path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    // 2. Stream records to disk
    info!(%range, %format, path = %output.display(), "generating dates");
    let records = SankrantiIter::new(epoch, range);
    let rows = write_records_path(&output, records.clone().map(StoredRecord::from), format)
        .with_context(|| format!("failed to write CSV: {}", output.display()))?;
    info!(rows, "dataset written");

    // 3. Preview
    println!("CSV generated: {}", output.display());
    println!("First {PREVIEW} entries:");
    for record in records.clone().take(PREVIEW) {
        print_record(&record);
    }
    println!("Last {PREVIEW} entries:");
    let mut tail: Vec<SankrantiRecord> = records.rev().take(PREVIEW).collect();
    tail.reverse();
    for record in &tail {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &SankrantiRecord) {
    println!("  {:>6}  {}", record.year, record.date);
}
