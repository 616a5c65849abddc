//! File logging for the CLI.
//!
//! Logs go to `~/.jot/jot.log` so stdout stays reserved for the
//! confirmation line. If the file can't be opened, logging is skipped.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::core::config::jot_home;

const LOG_FILE_NAME: &str = "jot.log";

/// Returns `~/.jot/jot.log`.
pub fn log_path() -> Option<PathBuf> {
    jot_home().map(|d| d.join(LOG_FILE_NAME))
}

/// Installs the global file logger. Returns false if logging stays off.
pub fn init(level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }
    match log_path() {
        Some(path) => init_at(&path, level),
        None => false,
    }
}

fn init_at(path: &Path, level: LevelFilter) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(log_file) => WriteLogger::init(level, log_config, log_file).is_ok(),
        Err(_) => false,
    }
}
