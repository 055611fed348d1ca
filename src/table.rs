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
//! Untyped CSV tables as written by the simulators.
use std::{fs, io::Read, path::Path};

use csv::StringRecord;

use crate::{
    columns::{ColumnMap, LogicalField},
    error::{Error, Result},
};

/// A CSV file loaded as strings, before any column is resolved.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Read a CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        log::debug!("Loading: {path:?}");
        let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(file, path)
    }

    /// Read a CSV from any reader. `origin` is only used for error messages.
    ///
    /// Rows may have fewer (or more) cells than the header; missing cells are treated as
    /// missing values later on.
    pub fn from_reader(reader: impl Read, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let mut csv = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv
            .headers()
            .map_err(|e| Error::csv(origin, e))?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        if headers.iter().all(String::is_empty) {
            return Err(Error::EmptyCsv(origin.to_path_buf()));
        }

        let rows = csv
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::csv(origin, e))?;

        Ok(Self { headers, rows })
    }

    /// Resolve the logical fields of `F` against the header row.
    pub fn columns<F: LogicalField>(&self) -> ColumnMap<F> {
        ColumnMap::resolve(&self.headers)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
