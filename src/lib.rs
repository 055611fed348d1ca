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
//! Library for turning the CSV exports of the disk-scheduling and page-replacement simulators
//! into charts.
//!
//! The binaries `plot_memory`, `fallos_vs_marcos` and `plot_disk` are thin wrappers around the
//! [`memory`], [`faults`] and [`disk`] modules.

pub mod chart;
pub mod columns;
pub mod disk;
pub mod error;
pub mod faults;
pub mod memory;
pub mod records;
pub mod table;
pub mod util;

pub use error::{Error, Result};

pub mod prelude {
    pub use super::{
        chart::{ChartSize, ChartSpec, Series},
        columns::{DiskField, Field},
        error::{Error, Result},
        memory::{Aggregate, MemoryPlot},
        records::{DiskEvent, FrameFaults, MemoryRecord, Metric},
        table::RawTable,
    };
}

#[cfg(test)]
mod test;
