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
//! Error type shared by all tools.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File not found: {0:?}")]
    NotFound(PathBuf),
    #[error("Could not read the CSV {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Could not write the CSV {path:?}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("The CSV {0:?} has no header row.")]
    EmptyCsv(PathBuf),
    #[error(
        "Missing required column(s) [{}] in {path:?}. Columns found: {found:?}",
        .missing.join(", ")
    )]
    MissingColumns {
        path: PathBuf,
        missing: Vec<String>,
        found: Vec<String>,
    },
    #[error("No CSV files found matching: {0}")]
    NoInputFiles(String),
    #[error("Invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("None of the {0} CSV file(s) could be loaded.")]
    NoValidFiles(usize),
    #[error("Could not render {path:?}: {reason}")]
    Render { path: PathBuf, reason: String },
}

impl Error {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error raised while reading `path`.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error raised while writing `path`.
    pub fn csv_write(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_columns_message_lists_found_columns() {
        let err = Error::MissingColumns {
            path: PathBuf::from("run.csv"),
            missing: vec!["frames".to_string(), "faults".to_string()],
            found: vec!["a".to_string(), "b".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("[frames, faults]"));
        assert!(msg.contains("\"a\", \"b\""));
    }

    #[test]
    fn no_input_files_names_pattern() {
        let err = Error::NoInputFiles("results/mem/*.csv".to_string());
        assert_eq!(
            err.to_string(),
            "No CSV files found matching: results/mem/*.csv"
        );
    }
}
