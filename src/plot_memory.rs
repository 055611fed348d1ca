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
//! Compares the page-replacement results exported to `results/mem/*.csv`.
//!
//! Writes the combined table to `results/mem/_summary.csv` and up to three figures to `figs/`:
//! faults, total time, and miss rate, each over the number of frames with one line per policy.
use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use ksim_plot::{
    chart::ChartSize,
    memory::{self, summary, SUMMARY_FILE_NAME},
    util::{self, PathBufExt},
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Directory holding the exported result CSVs.
    #[arg(short, long, default_value = "results/mem")]
    data_path: PathBuf,
    /// Directory to write the figures to.
    #[arg(short, long, default_value = "figs")]
    output_path: PathBuf,
    /// Pattern of the result files inside the data directory.
    #[arg(short, long, default_value = "*.csv")]
    pattern: String,
    /// Width of the figures in pixels.
    #[arg(long, default_value_t = ChartSize::LARGE.width)]
    width: u32,
    /// Height of the figures in pixels.
    #[arg(long, default_value_t = ChartSize::LARGE.height)]
    height: u32,
    /// Also write an interactive HTML version of every figure.
    #[arg(long)]
    html: bool,
}

fn main() {
    util::init_logging();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e:#}");
        process::exit(1)
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    util::ensure_dir(&args.data_path)?;
    util::ensure_dir(&args.output_path)?;

    let pattern = args
        .data_path
        .clone()
        .then(&args.pattern)
        .to_string_lossy()
        .to_string();
    let results = memory::read_all_results(&pattern).with_context(|| {
        format!("Make sure the simulator exported its results to {pattern:?} first.")
    })?;

    // combined table for traceability
    let summary_path = args.data_path.clone().then(SUMMARY_FILE_NAME);
    summary::write_summary_file(&results, &summary_path)?;
    for stats in results.policy_stats() {
        match stats.mean_miss_rate {
            Some(rate) => log::info!(
                "{}: {} row(s), mean miss rate {rate:.4}",
                stats.policy,
                stats.rows
            ),
            None => log::info!("{}: {} row(s)", stats.policy, stats.rows),
        }
    }

    let size = ChartSize::new(args.width, args.height);
    let written = memory::plot_memory_results(&results, &args.output_path, size, args.html)?;

    log::info!(
        "Done. Wrote {} figure(s) to {:?} and the combined table to {:?}.",
        written.len(),
        args.output_path,
        summary_path
    );
    Ok(())
}
