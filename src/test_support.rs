//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;
use tempfile::TempDir;

/// A scratch notes directory, removed when dropped.
pub fn notes_dir() -> TempDir {
    tempfile::tempdir().expect("create temp notes dir")
}

/// Shorthand for a known-valid calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
