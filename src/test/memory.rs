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
//! Combining a directory of page-replacement results.

use std::fs;

use pretty_assertions::assert_eq;

use crate::{
    chart::{ChartSize, Series},
    error::Error,
    memory::{self, summary, MemoryPlot, SUMMARY_FILE_NAME},
    util::PathBufExt,
};

use super::write_file;

fn pattern(dir: &tempfile::TempDir) -> String {
    dir.path().then("*.csv").to_string_lossy().to_string()
}

#[test]
fn every_row_of_every_file() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..4 {
        let rows = (1..=5)
            .map(|f| format!("lru,{f},{}\n", 100 - 10 * f))
            .collect::<String>();
        write_file(&dir, &format!("run_{i}.csv"), &format!("policy,frames,faults\n{rows}"));
    }

    let results = memory::read_all_results(&pattern(&dir)).unwrap();
    assert_eq!(results.rows.len(), 20);
    assert_eq!(
        results.sources,
        vec!["run_0.csv", "run_1.csv", "run_2.csv", "run_3.csv"]
    );
    for i in 0..4 {
        let name = format!("run_{i}.csv");
        assert_eq!(
            results.rows.iter().filter(|r| r.source_file == name).count(),
            5
        );
    }
}

#[test]
fn summary_keeps_row_order() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "a.csv",
        "algo,marcos,fallos,refs\nlru,30,30,100\nlru,10,50,100\n",
    );
    write_file(&dir, "b.csv", "policy,frames,faults\nfifo,20,70\n");

    let results = memory::read_all_results(&pattern(&dir)).unwrap();
    let summary_path = dir.path().then(SUMMARY_FILE_NAME);
    summary::write_summary_file(&results, &summary_path).unwrap();

    assert_eq!(
        fs::read_to_string(&summary_path).unwrap(),
        "policy,frames,faults,accesses,miss_rate,source_file\n\
         lru,30,30,100,0.3,a.csv\n\
         lru,10,50,100,0.5,a.csv\n\
         fifo,20,70,,,b.csv\n"
    );

    // the plotted series are sorted, the summary is not
    assert_eq!(
        MemoryPlot::FaultsVsFrames.series(&results),
        vec![
            Series::new("fifo", vec![(20.0, 70.0)]),
            Series::new("lru", vec![(10.0, 50.0), (30.0, 30.0)]),
        ]
    );
    assert_eq!(
        MemoryPlot::MissRateVsFrames.series(&results),
        vec![Series::new("lru", vec![(10.0, 0.5), (30.0, 0.3)])]
    );
}

#[test]
fn summary_is_never_an_input() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a.csv", "policy,frames,faults\nlru,1,9\n");

    let results = memory::read_all_results(&pattern(&dir)).unwrap();
    summary::write_summary_file(&results, dir.path().then(SUMMARY_FILE_NAME)).unwrap();

    // a second run sees the same input
    let again = memory::read_all_results(&pattern(&dir)).unwrap();
    assert_eq!(again.rows, results.rows);
    assert_eq!(again.sources, vec!["a.csv"]);
}

#[test]
fn skips_unusable_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a_empty.csv", "");
    write_file(&dir, "b_no_frames.csv", "policy,faults\nlru,3\n");
    write_file(&dir, "c_good.csv", "policy,frames,time_ms\nclock,4,12.5\n");

    let results = memory::read_all_results(&pattern(&dir)).unwrap();
    assert_eq!(results.sources, vec!["c_good.csv"]);
    assert_eq!(results.rows.len(), 1);
    assert_eq!(results.rows[0].total_time_ms, Some(12.5));

    // no figure needs faults here
    assert!(!MemoryPlot::FaultsVsFrames.is_available(&results));
    assert!(!MemoryPlot::MissRateVsFrames.is_available(&results));
    assert!(MemoryPlot::TimeVsFrames.is_available(&results));
}

#[test]
fn no_input_files() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = pattern(&dir);
    match memory::read_all_results(&pattern) {
        Err(Error::NoInputFiles(p)) => assert_eq!(p, pattern),
        r => panic!("unexpected result: {r:?}"),
    }
}

#[test]
fn only_summary_present() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, SUMMARY_FILE_NAME, "policy,frames\nlru,1\n");
    assert!(matches!(
        memory::read_all_results(&pattern(&dir)),
        Err(Error::NoInputFiles(_))
    ));
}

#[test]
fn no_valid_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a.csv", "policy,faults\nlru,3\n");
    write_file(&dir, "b.csv", "");
    assert!(matches!(
        memory::read_all_results(&pattern(&dir)),
        Err(Error::NoValidFiles(2))
    ));
}

#[test]
#[ignore = "rasterizing text needs system fonts"]
fn writes_all_figures() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "mem.csv",
        "policy,frames,faults,accesses,total_time_ms\n\
         lru,1,90,100,3.0\nlru,2,60,100,2.5\nfifo,1,95,100,3.1\nfifo,2,70,100,2.7\n",
    );
    let figs = dir.path().then("figs");
    crate::util::ensure_dir(&figs).unwrap();

    let results = memory::read_all_results(&pattern(&dir)).unwrap();
    let written =
        memory::plot_memory_results(&results, &figs, ChartSize::default(), true).unwrap();

    assert_eq!(written.len(), 3);
    for name in [
        "mem_faults_vs_frames.png",
        "mem_time_vs_frames.png",
        "mem_missrate_vs_frames.png",
        "mem_faults_vs_frames.html",
    ] {
        assert!(figs.join(name).is_file(), "{name} missing");
    }
}
