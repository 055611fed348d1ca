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
//! Module defining the typed records read from the simulator CSV exports.

/// Policy name used for rows of files without a policy column.
pub const UNKNOWN_POLICY: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
/// One row of a page-replacement result table, after normalization.
pub struct MemoryRecord {
    /// Replacement policy, [`UNKNOWN_POLICY`] if the file does not name one.
    pub policy: String,
    /// Number of physical frames of the experiment.
    pub frames: f64,
    pub faults: Option<f64>,
    pub accesses: Option<f64>,
    pub total_time_ms: Option<f64>,
    /// `faults / accesses`, missing if either is missing or `accesses` is zero.
    pub miss_rate: Option<f64>,
    /// File name the row was read from.
    pub source_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
/// Numeric quantity of a [`MemoryRecord`] that can be put on a chart axis.
pub enum Metric {
    Frames,
    Faults,
    Accesses,
    TotalTimeMs,
    MissRate,
}

impl Metric {
    /// Value of this metric for `record`.
    pub fn of(self, record: &MemoryRecord) -> Option<f64> {
        match self {
            Self::Frames => Some(record.frames),
            Self::Faults => record.faults,
            Self::Accesses => record.accesses,
            Self::TotalTimeMs => record.total_time_ms,
            Self::MissRate => record.miss_rate,
        }
    }

    /// Axis label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Frames => "frames",
            Self::Faults => "Page Faults",
            Self::Accesses => "Accesses",
            Self::TotalTimeMs => "Total Time (ms)",
            Self::MissRate => "Miss Rate (faults/accesses)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One movement of the disk head.
pub struct DiskEvent {
    /// Time (or step) at which the head arrives at `to`.
    pub t: i64,
    /// Cylinder the head moves from.
    pub from: i64,
    /// Cylinder the head moves to.
    pub to: i64,
    /// Number of cylinders crossed.
    pub distance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Number of page faults observed for a given number of frames.
pub struct FrameFaults {
    pub frames: f64,
    pub faults: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn metric_values() {
        let record = MemoryRecord {
            policy: "lru".to_string(),
            frames: 4.0,
            faults: Some(10.0),
            accesses: None,
            total_time_ms: Some(1.5),
            miss_rate: None,
            source_file: "lru.csv".to_string(),
        };
        assert_eq!(Metric::Frames.of(&record), Some(4.0));
        assert_eq!(Metric::Faults.of(&record), Some(10.0));
        assert_eq!(Metric::Accesses.of(&record), None);
        assert_eq!(Metric::TotalTimeMs.of(&record), Some(1.5));
        assert_eq!(Metric::MissRate.of(&record), None);
        assert_eq!(Metric::TotalTimeMs.to_string(), "total_time_ms");
    }
}
