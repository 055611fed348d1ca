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
//! Turns one raw result table into typed [`MemoryRecord`]s.
use std::path::Path;

use crate::{
    columns::{ColumnMap, Field},
    error::Result,
    records::{MemoryRecord, UNKNOWN_POLICY},
    table::RawTable,
};

/// Normalized content of a single result file.
#[derive(Debug, Clone)]
pub struct ResultTable {
    /// Fields that the file provides.
    pub columns: ColumnMap<Field>,
    /// Rows with a valid `frames` value, in file order.
    pub rows: Vec<MemoryRecord>,
    /// Number of rows dropped because `frames` was missing or not a number.
    pub dropped: usize,
}

impl ResultTable {
    pub fn has(&self, field: Field) -> bool {
        self.columns.contains(field)
    }
}

/// Fraction of accesses that were faults.
///
/// Missing if either input is missing, if there were no accesses, or if the quotient is not a
/// finite number.
pub fn miss_rate(faults: Option<f64>, accesses: Option<f64>) -> Option<f64> {
    let (faults, accesses) = (faults?, accesses?);
    if accesses == 0.0 {
        return None;
    }
    Some(faults / accesses).filter(|rate| rate.is_finite())
}

/// Resolve the columns of `table`, coerce the numeric ones and derive the miss rate.
pub fn normalize(table: &RawTable, source_file: &str) -> ResultTable {
    let columns = table.columns::<Field>();
    let mut dropped = 0;

    let rows = table
        .rows
        .iter()
        .filter_map(|row| {
            let Some(frames) = columns.number(Field::Frames, row) else {
                dropped += 1;
                return None;
            };
            let policy = columns
                .cell(Field::Policy, row)
                .filter(|p| !p.is_empty())
                .unwrap_or(UNKNOWN_POLICY)
                .to_string();
            let faults = columns.number(Field::Faults, row);
            let accesses = columns.number(Field::Accesses, row);
            Some(MemoryRecord {
                policy,
                frames,
                faults,
                accesses,
                total_time_ms: columns.number(Field::TotalTimeMs, row),
                miss_rate: miss_rate(faults, accesses),
                source_file: source_file.to_string(),
            })
        })
        .collect();

    ResultTable {
        columns,
        rows,
        dropped,
    }
}

/// Load and normalize a result file. The provenance of each row is the file name.
pub fn load_result_file(path: impl AsRef<Path>) -> Result<ResultTable> {
    let path = path.as_ref();
    let table = RawTable::from_path(path)?;
    let source_file = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    Ok(normalize(&table, &source_file))
}
