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
//! Concatenation of all result files of a directory into one table.
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{
    columns::Field,
    error::{Error, Result},
    records::{MemoryRecord, Metric},
};

use super::normalize::{load_result_file, ResultTable};

/// File name of the combined summary written next to the inputs. It is never read back.
pub const SUMMARY_FILE_NAME: &str = "_summary.csv";

/// All rows of all loadable result files.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Rows in the order of the files, and in file order within each file.
    pub rows: Vec<MemoryRecord>,
    /// Fields provided by at least one contributing file.
    pub fields: BTreeSet<Field>,
    /// Names of the contributing files.
    pub sources: Vec<String>,
}

/// Row count and mean miss rate of a single policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyStats {
    pub policy: String,
    pub rows: usize,
    pub mean_miss_rate: Option<f64>,
}

impl Aggregate {
    /// Append all rows of a normalized file.
    pub fn push(&mut self, table: ResultTable) {
        if let Some(source) = table.rows.first().map(|r| r.source_file.clone()) {
            self.sources.push(source);
        }
        self.fields.extend(table.columns.fields());
        self.rows.extend(table.rows);
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Whether a miss rate can be derived at all, i.e., some file provides both `faults` and
    /// `accesses`.
    pub fn has_miss_rate(&self) -> bool {
        self.has(Field::Faults) && self.has(Field::Accesses)
    }

    /// Rows for which `metric` is present.
    pub fn rows_with(&self, metric: Metric) -> impl Iterator<Item = &MemoryRecord> + '_ {
        self.rows.iter().filter(move |r| metric.of(r).is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-policy statistics, ordered by policy name.
    pub fn policy_stats(&self) -> Vec<PolicyStats> {
        self.rows
            .iter()
            .map(|r| (r.policy.as_str(), r))
            .into_group_map()
            .into_iter()
            .sorted_by(|a, b| human_sort::compare(a.0, b.0))
            .map(|(policy, rows)| {
                let rates = rows.iter().filter_map(|r| r.miss_rate).collect_vec();
                let mean_miss_rate = (!rates.is_empty())
                    .then(|| rates.iter().sum::<f64>() / rates.len() as f64);
                PolicyStats {
                    policy: policy.to_string(),
                    rows: rows.len(),
                    mean_miss_rate,
                }
            })
            .collect()
    }
}

/// All files matching the glob `pattern`, in sorted order, except the summary file.
///
/// Fails if nothing matches.
pub fn find_result_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let files = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Cannot access {:?}: {}", e.path(), e.error());
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| !is_summary_file(path))
        .collect_vec();

    if files.is_empty() {
        return Err(Error::NoInputFiles(pattern.to_string()));
    }
    Ok(files)
}

fn is_summary_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == SUMMARY_FILE_NAME)
}

/// Load and concatenate `files`. Files that cannot be read, or that contribute no row with a
/// valid `frames` value, are skipped with a warning. Fails only if no file contributes.
pub fn aggregate_files<P: AsRef<Path>>(files: &[P]) -> Result<Aggregate> {
    let mut aggregate = Aggregate::default();

    for path in files.iter().map(AsRef::as_ref) {
        match load_result_file(path) {
            Ok(table) if table.rows.is_empty() => {
                log::warn!("Skipping {path:?}: no row with a valid 'frames' value.");
            }
            Ok(table) => {
                if table.dropped > 0 {
                    log::debug!(
                        "Dropped {} row(s) without 'frames' from {path:?}",
                        table.dropped
                    );
                }
                log::info!("Loaded {} row(s) from {path:?}", table.rows.len());
                aggregate.push(table);
            }
            Err(e) => log::warn!("Could not read {path:?}: {e}"),
        }
    }

    if aggregate.is_empty() {
        return Err(Error::NoValidFiles(files.len()));
    }
    Ok(aggregate)
}

/// Find all files matching `pattern` and aggregate them.
pub fn read_all_results(pattern: &str) -> Result<Aggregate> {
    let files = find_result_files(pattern)?;
    aggregate_files(&files)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;
    use crate::records::UNKNOWN_POLICY;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_files_names_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.csv", dir.path().display());
        match find_result_files(&pattern) {
            Err(Error::NoInputFiles(p)) => assert_eq!(p, pattern),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn summary_file_is_not_an_input() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "lru.csv", "frames,faults\n1,2\n");
        write(dir.path(), SUMMARY_FILE_NAME, "policy,frames\nlru,1\n");
        write(dir.path(), "notes.txt", "hello");
        let files = find_result_files(&format!("{}/*.csv", dir.path().display())).unwrap();
        assert_eq!(files, vec![dir.path().join("lru.csv")]);
    }

    #[test]
    fn unreadable_and_empty_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "a.csv", "policy,frames,faults\nlru,1,5\nlru,2,3\n");
        let empty = write(dir.path(), "b.csv", "");
        let no_frames = write(dir.path(), "c.csv", "policy,faults\nlru,3\n");
        let missing = dir.path().join("d.csv");

        let agg = aggregate_files(&[good, empty, no_frames, missing]).unwrap();
        assert_eq!(agg.rows.len(), 2);
        assert_eq!(agg.sources, vec!["a.csv".to_string()]);
        assert!(agg.has(Field::Faults));
        assert!(!agg.has(Field::Accesses));
        assert!(!agg.has_miss_rate());
    }

    #[test]
    fn fails_if_nothing_loads() {
        let dir = tempfile::tempdir().unwrap();
        let only = write(dir.path(), "a.csv", "policy,faults\nlru,3\n");
        assert!(matches!(
            aggregate_files(&[only]),
            Err(Error::NoValidFiles(1))
        ));
    }

    #[test]
    fn heterogeneous_files_are_concatenated() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.csv", "algo,marcos,fallos,refs\nfifo,3,9,12\n");
        let b = write(dir.path(), "b.csv", "frames,time\n4,1.5\n");
        let agg = aggregate_files(&[a, b]).unwrap();

        assert_eq!(agg.rows.len(), 2);
        assert_eq!(agg.rows[0].policy, "fifo");
        assert_eq!(agg.rows[0].miss_rate, Some(0.75));
        assert_eq!(agg.rows[1].policy, UNKNOWN_POLICY);
        assert_eq!(agg.rows[1].total_time_ms, Some(1.5));
        assert!(agg.has_miss_rate());
        assert_eq!(agg.rows_with(Metric::TotalTimeMs).count(), 1);
        assert_eq!(agg.rows_with(Metric::MissRate).count(), 1);
    }

    #[test]
    fn stats_per_policy() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(
            dir.path(),
            "a.csv",
            "policy,frames,faults,accesses\nlru10,1,1,4\nlru2,1,1,2\nlru2,2,0,2\nlru10,2,1,0\n",
        );
        let agg = aggregate_files(&[a]).unwrap();
        assert_eq!(
            agg.policy_stats(),
            vec![
                PolicyStats {
                    policy: "lru2".to_string(),
                    rows: 2,
                    mean_miss_rate: Some(0.25),
                },
                PolicyStats {
                    policy: "lru10".to_string(),
                    rows: 2,
                    mean_miss_rate: Some(0.25),
                },
            ]
        );
    }
}
