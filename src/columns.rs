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
//! Module resolving the heterogeneous CSV headers written by the simulators onto canonical
//! field names.
//!
//! Each logical field has an ordered list of accepted header names. Headers are compared after
//! trimming and lowercasing, and the first synonym (in list order) found among the headers wins.
//! Fields without any matching header are simply absent from the resulting [`ColumnMap`].
use std::{collections::BTreeMap, fmt};

use csv::StringRecord;
use itertools::Itertools;
use strum::IntoEnumIterator;

/// A logical column that may appear in the input under several names.
pub trait LogicalField: Copy + Ord + IntoEnumIterator + fmt::Display {
    /// Accepted (lowercase) header names, in priority order. The first entry is the canonical
    /// name.
    fn synonyms(self) -> &'static [&'static str];
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
/// Fields of a page-replacement result table.
pub enum Field {
    Policy,
    Frames,
    Faults,
    Accesses,
    TotalTimeMs,
}

impl Field {
    /// Whether the field is coerced to a number after renaming.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Policy)
    }
}

impl LogicalField for Field {
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Policy => &["policy", "algo", "replacement"],
            Self::Frames => &["frames", "num_frames", "nframes", "marcos", "n_frames"],
            Self::Faults => &["faults", "page_faults", "misses", "fallos", "pf", "faltas"],
            Self::Accesses => &["accesses", "refs", "references", "naccess"],
            Self::TotalTimeMs => &["total_time_ms", "time_ms", "time", "total_ms"],
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
/// Fields of a disk head trace. Both the movement log (`t,from,to,distance`) and the head path
/// export (`step,cylinder,req_id`) resolve onto these.
pub enum DiskField {
    T,
    From,
    To,
    Distance,
}

impl LogicalField for DiskField {
    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::T => &["t", "step", "time"],
            Self::From => &["from"],
            Self::To => &["to", "cylinder"],
            Self::Distance => &["distance", "dist"],
        }
    }
}

/// Canonical form of a header cell: trimmed and lowercased.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parse a cell as a number. Anything that does not parse to a finite value is missing.
pub fn coerce_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Parse a cell as an integer, also accepting integral floats such as `5.0`.
pub fn coerce_integer(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    cell.parse::<i64>().ok().or_else(|| {
        coerce_number(cell)
            .filter(|x| x.fract() == 0.0 && x.abs() < i64::MAX as f64)
            .map(|x| x as i64)
    })
}

/// Mapping from each resolved logical field to the index of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap<F: LogicalField> {
    columns: BTreeMap<F, usize>,
}

impl<F: LogicalField> Default for ColumnMap<F> {
    fn default() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }
}

impl<F: LogicalField> ColumnMap<F> {
    /// Resolve all fields of `F` against the given header row.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let headers = headers
            .iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect_vec();

        let columns = F::iter()
            .filter_map(|field| {
                field
                    .synonyms()
                    .iter()
                    .find_map(|synonym| headers.iter().position(|h| h == synonym))
                    .map(|idx| (field, idx))
            })
            .collect();

        Self { columns }
    }

    /// Column index of `field`, if it was resolved.
    pub fn index(&self, field: F) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: F) -> bool {
        self.columns.contains_key(&field)
    }

    /// All resolved fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.columns.keys().copied()
    }

    /// The fields of `required` that could not be resolved.
    pub fn missing(&self, required: &[F]) -> Vec<F> {
        required
            .iter()
            .copied()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    /// Raw (trimmed) cell of `field` in `row`. Short rows yield `None`.
    pub fn cell<'r>(&self, field: F, row: &'r StringRecord) -> Option<&'r str> {
        self.index(field).and_then(|idx| row.get(idx)).map(str::trim)
    }

    /// Cell of `field` coerced to a number.
    pub fn number(&self, field: F, row: &StringRecord) -> Option<f64> {
        self.cell(field, row).and_then(coerce_number)
    }

    /// Cell of `field` coerced to an integer.
    pub fn integer(&self, field: F, row: &StringRecord) -> Option<i64> {
        self.cell(field, row).and_then(coerce_integer)
    }
}
