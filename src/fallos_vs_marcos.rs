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
//! Plots the page faults of one experiment file over the number of frames. The figure is saved
//! next to the input as `<input>_fallos_vs_marcos.png`.
use std::{path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use ksim_plot::{chart::ChartSize, faults, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// CSV file with the columns `frames,faults` (or synonyms such as `marcos,fallos`).
    archivo: Option<PathBuf>,
    /// Width of the figure in pixels.
    #[arg(long, default_value_t = ChartSize::SMALL.width)]
    width: u32,
    /// Height of the figure in pixels.
    #[arg(long, default_value_t = ChartSize::SMALL.height)]
    height: u32,
    /// Also write an interactive HTML version of the figure.
    #[arg(long)]
    html: bool,
}

fn main() {
    util::init_logging();

    let args = Args::parse();
    let Some(input) = args.archivo.clone() else {
        util::exit_with_usage::<Args>("The CSV must have the columns: frames,faults");
    };

    if let Err(e) = run(&args, input) {
        log::error!("{e:#}");
        process::exit(1)
    }
}

fn run(args: &Args, input: PathBuf) -> anyhow::Result<()> {
    let points = faults::load_frame_faults(&input)
        .with_context(|| format!("Cannot plot {input:?}"))?;

    let out = faults::output_path(&input);
    let size = ChartSize::new(args.width, args.height);
    faults::plot_frame_faults(&points, &out, size, args.html)?;
    Ok(())
}
