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
//! Comparison of page-replacement results across policies and frame counts.
//!
//! The results of a directory of CSV exports are normalized ([`normalize`]), concatenated
//! ([`aggregate`]), written back as one combined table ([`summary`]), and plotted as one line per
//! policy ([`plot_memory_results`]).
use std::path::{Path, PathBuf};

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    chart::{self, ChartSize, ChartSpec, Series},
    columns::Field,
    error::Result,
    records::{MemoryRecord, Metric},
};

pub mod aggregate;
pub mod normalize;
pub mod summary;

pub use aggregate::{read_all_results, Aggregate, SUMMARY_FILE_NAME};
pub use normalize::{miss_rate, normalize};

/// Partition `rows` by policy and build one series per policy, with points sorted by `x`.
///
/// Rows lacking either value are left out. Series are ordered by policy name (human order), and
/// the sort is stable, so points with equal `x` keep their relative order. `rows` itself is not
/// touched.
pub fn series_by_policy<'a>(
    rows: impl IntoIterator<Item = &'a MemoryRecord>,
    x: Metric,
    y: Metric,
) -> Vec<Series> {
    rows.into_iter()
        .filter_map(|r| Some((r.policy.as_str(), (x.of(r)?, y.of(r)?))))
        .into_group_map()
        .into_iter()
        .sorted_by(|a, b| human_sort::compare(a.0, b.0))
        .map(|(policy, mut points)| {
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
            Series::new(policy, points)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
/// The charts produced from an [`Aggregate`].
pub enum MemoryPlot {
    FaultsVsFrames,
    TimeVsFrames,
    MissRateVsFrames,
}

impl MemoryPlot {
    /// Quantity on the y axis. The x axis is always the number of frames.
    pub fn metric(self) -> Metric {
        match self {
            Self::FaultsVsFrames => Metric::Faults,
            Self::TimeVsFrames => Metric::TotalTimeMs,
            Self::MissRateVsFrames => Metric::MissRate,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::FaultsVsFrames => "Page Faults vs Frames",
            Self::TimeVsFrames => "Total Time vs Frames",
            Self::MissRateVsFrames => "Miss Rate vs Frames",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::FaultsVsFrames => "mem_faults_vs_frames.png",
            Self::TimeVsFrames => "mem_time_vs_frames.png",
            Self::MissRateVsFrames => "mem_missrate_vs_frames.png",
        }
    }

    /// Whether `aggregate` has the data for this plot. Logs the reason if not.
    pub fn is_available(self, aggregate: &Aggregate) -> bool {
        let available = match self {
            Self::FaultsVsFrames => aggregate.has(Field::Faults),
            Self::TimeVsFrames => aggregate.has(Field::TotalTimeMs),
            Self::MissRateVsFrames => aggregate.rows_with(Metric::MissRate).next().is_some(),
        };
        if !available {
            match self {
                Self::MissRateVsFrames => log::info!(
                    "Cannot compute '{}' (missing 'accesses' or 'faults'), skipping {}.",
                    self.metric(),
                    self.title()
                ),
                _ => log::info!(
                    "No '{}' column, skipping {}.",
                    self.metric(),
                    self.title()
                ),
            }
        }
        available
    }

    pub fn spec(self, size: ChartSize) -> ChartSpec {
        ChartSpec::new(self.title(), Metric::Frames.label(), self.metric().label()).size(size)
    }

    /// The series of this plot, one per policy.
    pub fn series(self, aggregate: &Aggregate) -> Vec<Series> {
        series_by_policy(
            aggregate.rows_with(self.metric()),
            Metric::Frames,
            self.metric(),
        )
    }
}

/// Draw every available [`MemoryPlot`] of `aggregate` into `output_dir`. With `html`, an
/// interactive copy is written next to each PNG. Returns the written PNG files.
pub fn plot_memory_results(
    aggregate: &Aggregate,
    output_dir: impl AsRef<Path>,
    size: ChartSize,
    html: bool,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for plot in MemoryPlot::iter().filter(|p| p.is_available(aggregate)) {
        let series = plot.series(aggregate);
        if series.iter().all(Series::is_empty) {
            log::info!("Nothing to plot for {}.", plot.title());
            continue;
        }

        let out = output_dir.as_ref().join(plot.file_name());
        let spec = plot.spec(size);
        chart::render_lines(&series, &spec, &out)?;
        if html {
            chart::write_html_lines(&series, &spec, chart::html_path(&out));
        }
        written.push(out);
    }

    Ok(written)
}
