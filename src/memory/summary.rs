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
//! Writer for the combined summary CSV.
use std::{fs, io, path::Path};

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    columns::Field,
    error::{Error, Result},
    records::MemoryRecord,
};

use super::aggregate::Aggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
/// Columns of the summary, in output order.
pub enum SummaryColumn {
    Policy,
    Frames,
    Faults,
    Accesses,
    MissRate,
    TotalTimeMs,
    SourceFile,
}

impl SummaryColumn {
    fn is_present(self, aggregate: &Aggregate) -> bool {
        match self {
            Self::Policy | Self::Frames | Self::MissRate | Self::SourceFile => true,
            Self::Faults => aggregate.has(Field::Faults),
            Self::Accesses => aggregate.has(Field::Accesses),
            Self::TotalTimeMs => aggregate.has(Field::TotalTimeMs),
        }
    }

    fn value(self, record: &MemoryRecord) -> String {
        let number = |x: Option<f64>| x.map(format_number).unwrap_or_default();
        match self {
            Self::Policy => record.policy.clone(),
            Self::Frames => format_number(record.frames),
            Self::Faults => number(record.faults),
            Self::Accesses => number(record.accesses),
            Self::MissRate => number(record.miss_rate),
            Self::TotalTimeMs => number(record.total_time_ms),
            Self::SourceFile => record.source_file.clone(),
        }
    }
}

/// Integral values are written without a fractional part.
pub fn format_number(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        x.to_string()
    }
}

/// The summary columns that `aggregate` provides. `miss_rate` is always included, left blank
/// where it cannot be derived.
pub fn summary_columns(aggregate: &Aggregate) -> Vec<SummaryColumn> {
    SummaryColumn::iter()
        .filter(|c| c.is_present(aggregate))
        .collect()
}

/// Write all rows of `aggregate`, in their original order, as CSV.
pub fn write_summary<W: io::Write>(aggregate: &Aggregate, writer: W) -> csv::Result<()> {
    let columns = summary_columns(aggregate);
    let mut csv = csv::WriterBuilder::new().from_writer(writer);

    csv.write_record(columns.iter().map(|c| c.to_string()))?;
    for record in aggregate.rows.iter() {
        csv.write_record(columns.iter().map(|c| c.value(record)).collect_vec())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the summary into the file at `path`, replacing it if it exists.
pub fn write_summary_file(aggregate: &Aggregate, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    write_summary(aggregate, file).map_err(|e| Error::csv_write(path, e))?;
    log::info!("Combined summary: {}", path.display());
    Ok(())
}
