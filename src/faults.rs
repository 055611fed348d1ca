// KSIM-PLOT: Charts for Disk-Scheduling and Page-Replacement Simulation Results
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Page faults as a function of the number of frames, for a single experiment file.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    chart::{self, ChartSize, ChartSpec, Series},
    columns::Field,
    error::{Error, Result},
    records::FrameFaults,
    table::RawTable,
};

/// Suffix appended to the input path (without extension) to name the figure.
pub const OUTPUT_SUFFIX: &str = "_fallos_vs_marcos.png";

/// Figure path next to `input`: `runs/lru.csv` becomes `runs/lru_fallos_vs_marcos.png`.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    let mut name: OsString = input.as_ref().with_extension("").into_os_string();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Extract the `(frames, faults)` pairs of a raw table, in file order.
///
/// Both columns (or one of their synonyms) are required. Rows where either value is not a
/// number are dropped.
pub fn frame_faults(table: &RawTable, origin: impl AsRef<Path>) -> Result<Vec<FrameFaults>> {
    let columns = table.columns::<Field>();
    let missing = columns.missing(&[Field::Frames, Field::Faults]);
    if !missing.is_empty() {
        return Err(Error::MissingColumns {
            path: origin.as_ref().to_path_buf(),
            missing: missing.iter().map(ToString::to_string).collect(),
            found: table.headers.clone(),
        });
    }

    Ok(table
        .rows
        .iter()
        .filter_map(|row| {
            Some(FrameFaults {
                frames: columns.number(Field::Frames, row)?,
                faults: columns.number(Field::Faults, row)?,
            })
        })
        .collect())
}

pub fn load_frame_faults(path: impl AsRef<Path>) -> Result<Vec<FrameFaults>> {
    let path = path.as_ref();
    let table = RawTable::from_path(path)?;
    frame_faults(&table, path)
}

/// The pairs as a single series, sorted by frames. The sort is stable.
pub fn faults_series(points: &[FrameFaults]) -> Series {
    let mut sorted = points.iter().map(|p| (p.frames, p.faults)).collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    Series::new("faults", sorted)
}

pub fn faults_spec(size: ChartSize) -> ChartSpec {
    ChartSpec::new("Page Faults vs Frame Count", "Frames", "Page faults")
        .size(size)
        .legend(false)
}

/// Draw the faults over the frame count into `out`.
///
/// Returns `None` without writing anything if there are no points.
pub fn plot_frame_faults(
    points: &[FrameFaults],
    out: impl AsRef<Path>,
    size: ChartSize,
    html: bool,
) -> Result<Option<PathBuf>> {
    let series = faults_series(points);
    let (Some(first), Some(last)) = (series.points.first(), series.points.last()) else {
        log::warn!("Nothing to plot.");
        return Ok(None);
    };
    log::info!(
        "{} point(s), frames {}..={}: {} fault(s) with the fewest frames, {} with the most",
        series.points.len(),
        first.0,
        last.0,
        first.1,
        last.1
    );

    let out = out.as_ref();
    let spec = faults_spec(size);
    chart::render_lines(&[series.clone()], &spec, out)?;
    if html {
        chart::write_html_lines(&[series], &spec, chart::html_path(out));
    }
    Ok(Some(out.to_path_buf()))
}
