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
//! Utility module collection of functions
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use clap::CommandFactory;
use log::LevelFilter;

use crate::error::{Error, Result};

/// Logging configuration read from the working directory.
pub const LOG_CONFIG: &str = "log4rs.yml";

/// Initialize logging from `log4rs.yml`. Without a (valid) config file, log to stderr at `info`
/// level, or as set in `RUST_LOG`.
pub fn init_logging() {
    let from_file = Path::new(LOG_CONFIG).exists()
        && match log4rs::init_file(LOG_CONFIG, Default::default()) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Ignoring {LOG_CONFIG}: {e}");
                false
            }
        };
    if !from_file {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(LevelFilter::Info);
        if let Ok(filters) = env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        // fails only if a logger is already installed
        let _ = builder.try_init();
    }
}

/// Print the usage line of the command `C` and `hint` to stderr, then exit with status 1.
pub fn exit_with_usage<C: CommandFactory>(hint: &str) -> ! {
    eprintln!("{}", C::command().render_usage());
    eprintln!("{hint}");
    process::exit(1)
}

/// Create `dir` (and its parents) if it does not exist yet.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        log::debug!("Creating {dir:?}");
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub trait PathBufExt: Sized {
    fn then(self, p: impl AsRef<Path>) -> PathBuf;
}

impl PathBufExt for PathBuf {
    fn then(mut self, p: impl AsRef<Path>) -> PathBuf {
        self.push(p);
        self
    }
}

impl PathBufExt for &Path {
    fn then(self, p: impl AsRef<Path>) -> PathBuf {
        let mut path = self.to_path_buf();
        path.push(p);
        path
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_then() {
        let base = PathBuf::from("results");
        assert_eq!(base.clone().then("mem"), PathBuf::from("results/mem"));
        assert_eq!(
            base.as_path().then("mem").then("*.csv"),
            PathBuf::from("results/mem/*.csv")
        );
    }

    #[test]
    fn ensure_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("results").join("mem");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // existing directories are fine
        ensure_dir(&nested).unwrap();
    }
}
