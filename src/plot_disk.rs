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
//! Plots the disk head position over time from a scheduler dump (`t,from,to,distance`) or a
//! head path export (`step,cylinder,req_id`).
use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use ksim_plot::{chart::ChartSize, disk, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Disk trace CSV.
    dump: Option<PathBuf>,
    /// Output PNG.
    #[arg(default_value = disk::DEFAULT_OUTPUT)]
    out: PathBuf,
    /// Width of the figure in pixels.
    #[arg(long, default_value_t = ChartSize::LARGE.width)]
    width: u32,
    /// Height of the figure in pixels.
    #[arg(long, default_value_t = ChartSize::LARGE.height)]
    height: u32,
    /// Also write an interactive HTML version of the figure.
    #[arg(long)]
    html: bool,
}

fn main() {
    util::init_logging();

    let args = Args::parse();
    let Some(dump) = args.dump.clone() else {
        util::exit_with_usage::<Args>("Expected a disk trace with the header t,from,to,distance");
    };

    if let Err(e) = run(&args, dump) {
        log::error!("{e:#}");
        process::exit(1)
    }
}

fn run(args: &Args, dump: PathBuf) -> anyhow::Result<()> {
    let events = disk::load_disk_trace(&dump).with_context(|| format!("Cannot plot {dump:?}"))?;
    let size = ChartSize::new(args.width, args.height);
    disk::plot_disk_trace(&events, &args.out, size, args.html)?;
    Ok(())
}
