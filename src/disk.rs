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
//! Disk head traces: loading, summary statistics and the step plot of the head position.
use std::path::{Path, PathBuf};

use crate::{
    chart::{self, ChartSize, ChartSpec},
    columns::DiskField,
    error::{Error, Result},
    records::DiskEvent,
    table::RawTable,
};

/// Default output file of the disk plot.
pub const DEFAULT_OUTPUT: &str = "disk_plot.png";

/// Build the head movements from a raw table.
///
/// Requires a time (`t`/`step`) and a target (`to`/`cylinder`) column. A missing `from` is the
/// previous target, and a missing `distance` is derived from `from` and `to`. Rows without a
/// valid time or target are dropped, as are rows whose derived distance does not fit an `i64`.
pub fn disk_events(table: &RawTable, origin: impl AsRef<Path>) -> Result<Vec<DiskEvent>> {
    let columns = table.columns::<DiskField>();
    let missing = columns.missing(&[DiskField::T, DiskField::To]);
    if !missing.is_empty() {
        return Err(Error::MissingColumns {
            path: origin.as_ref().to_path_buf(),
            missing: missing.iter().map(ToString::to_string).collect(),
            found: table.headers.clone(),
        });
    }

    let mut events: Vec<DiskEvent> = Vec::with_capacity(table.rows.len());
    let mut dropped = 0;
    // cylinder of the previous row with a valid target, even if that row was dropped
    let mut head: Option<i64> = None;
    for row in table.rows.iter() {
        let (Some(t), Some(to)) = (
            columns.integer(DiskField::T, row),
            columns.integer(DiskField::To, row),
        ) else {
            dropped += 1;
            continue;
        };
        let from = columns
            .integer(DiskField::From, row)
            .or(head)
            .unwrap_or(to);
        head = Some(to);
        let Some(distance) = columns
            .integer(DiskField::Distance, row)
            .or_else(|| to.checked_sub(from).and_then(i64::checked_abs))
        else {
            dropped += 1;
            continue;
        };
        events.push(DiskEvent {
            t,
            from,
            to,
            distance,
        });
    }

    if dropped > 0 {
        log::warn!(
            "Dropped {dropped} row(s) of {:?} without a valid time, cylinder or distance.",
            origin.as_ref()
        );
    }
    Ok(events)
}

/// Load a disk trace. A file without any content is an empty trace.
pub fn load_disk_trace(path: impl AsRef<Path>) -> Result<Vec<DiskEvent>> {
    let path = path.as_ref();
    match RawTable::from_path(path) {
        Ok(table) => disk_events(&table, path),
        Err(Error::EmptyCsv(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Summary of a disk trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskStats {
    pub moves: usize,
    /// Total number of cylinders crossed. Wide enough to sum any number of `i64` distances.
    pub total_distance: i128,
    pub mean_distance: f64,
    pub min_cylinder: i64,
    pub max_cylinder: i64,
}

/// Compute the summary of `events`, `None` for an empty trace.
pub fn disk_stats(events: &[DiskEvent]) -> Option<DiskStats> {
    if events.is_empty() {
        return None;
    }
    let total_distance = events.iter().map(|e| i128::from(e.distance)).sum::<i128>();
    let cylinders = events.iter().flat_map(|e| [e.from, e.to]);
    Some(DiskStats {
        moves: events.len(),
        total_distance,
        mean_distance: total_distance as f64 / events.len() as f64,
        min_cylinder: cylinders.clone().min().unwrap_or_default(),
        max_cylinder: cylinders.max().unwrap_or_default(),
    })
}

/// `(t, to)` of each event, in trace order.
pub fn head_positions(events: &[DiskEvent]) -> Vec<(f64, f64)> {
    events.iter().map(|e| (e.t as f64, e.to as f64)).collect()
}

pub fn disk_spec(size: ChartSize) -> ChartSpec {
    ChartSpec::new("Disk head movement", "t", "cylinder")
        .size(size)
        .markers(false)
        .legend(false)
}

/// Draw the head position over time as a post step function into `out`.
///
/// Returns `None` without writing anything if there are no events.
pub fn plot_disk_trace(
    events: &[DiskEvent],
    out: impl AsRef<Path>,
    size: ChartSize,
    html: bool,
) -> Result<Option<PathBuf>> {
    let Some(stats) = disk_stats(events) else {
        log::warn!("No data.");
        return Ok(None);
    };
    log::info!(
        "{} head movement(s), {} cylinder(s) in total ({:.2} per move), cylinders {}..={}",
        stats.moves,
        stats.total_distance,
        stats.mean_distance,
        stats.min_cylinder,
        stats.max_cylinder
    );

    let out = out.as_ref();
    let points = head_positions(events);
    let spec = disk_spec(size);
    chart::render_steps("to", &points, &spec, out)?;
    if html {
        chart::write_html_steps("to", &points, &spec, chart::html_path(out));
    }
    Ok(Some(out.to_path_buf()))
}
