// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Drift command: project a dataset onto the chart axis.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sankranti::record::{read_records_path, write_drift_points, write_markers};
use sankranti::{drift_points, filter_years, resolve_markers, YearRange, HISTORICAL_MARKERS};

use crate::cli::DriftArgs;

/// Run the drift projection.
pub fn run(args: DriftArgs) -> Result<()> {
    let _cmd = info_span!("drift").entered();

    // 1. Read dataset
    info!(path = %args.input.display(), "reading dataset");
    let records = read_records_path(&args.input)
        .with_context(|| format!("failed to read dataset: {}", args.input.display()))?;

    // 2. Project and window
    let mut points = drift_points(&records);
    if args.from.is_some() || args.to.is_some() {
        let window = YearRange::new(
            args.from.unwrap_or(i32::MIN),
            args.to.unwrap_or(i32::MAX),
        )?;
        points = filter_years(&points, window);
        info!(%window, n_points = points.len(), "applied year window");
    }

    // 3. Write outputs
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_drift_points(writer, &points).context("failed to write drift points")?;

    if let Some(path) = &args.markers {
        let resolved = resolve_markers(&points, &HISTORICAL_MARKERS);
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        write_markers(BufWriter::new(file), &resolved).context("failed to write markers")?;
        info!(path = %path.display(), n_markers = resolved.len(), "markers written");
    }
    Ok(())
}
