//! # Journal Files
//!
//! One Markdown file per year under the notes directory, split into date
//! sections:
//!
//! ```text
//! notes/
//! └── 2025.md
//!     # 08/14/2025
//!
//!     * Chris: sync
//!     * DT-99
//!         * sync
//!
//!     # 08/15/2025
//!
//!     * buy milk
//! ```
//!
//! Files are append-only. A missing header is always added at EOF, even when
//! the date is earlier than the last section in the file, so backdated notes
//! land at the end under their own header.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use log::{debug, info};

use crate::core::date::HEADER_FORMAT;
use crate::core::render::render;

/// Result of appending one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub path: PathBuf,
    pub lines_written: usize,
}

/// Path of the year-file for `date`, e.g. `notes/2025.md`.
pub fn year_file_path(notes_dir: &Path, date: NaiveDate) -> PathBuf {
    notes_dir.join(format!("{:04}.md", date.year()))
}

/// The section header line for `date`, e.g. `# 08/14/2025`.
pub fn date_header(date: NaiveDate) -> String {
    format!("# {}", date.format(HEADER_FORMAT))
}

/// Creates the notes directory and an empty year-file if either is missing.
pub fn ensure_year_file(notes_dir: &Path, date: NaiveDate) -> io::Result<PathBuf> {
    fs::create_dir_all(notes_dir)?;
    let path = year_file_path(notes_dir, date);
    if !path.exists() {
        // No title line, the first thing in the file is a date header
        OpenOptions::new().create(true).append(true).open(&path)?;
        debug!("Created year file {}", path.display());
    }
    Ok(path)
}

/// Appends a header for `date` unless one is already present anywhere.
pub fn ensure_date_header(path: &Path, date: NaiveDate) -> io::Result<()> {
    let content = read_or_empty(path)?;

    if has_header(&content, date) {
        debug!("Header for {} already present in {}", date, path.display());
        return Ok(());
    }

    let mut block = String::new();
    if !content.is_empty() {
        if !content.ends_with('\n') {
            block.push('\n');
        }
        block.push('\n');
    }
    block.push_str(&date_header(date));
    block.push_str("\n\n");

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())?;
    debug!("Appended header for {} to {}", date, path.display());
    Ok(())
}

/// Appends each line plus a newline at EOF.
///
/// Lines belong to whichever header was written last, so call
/// [`ensure_date_header`] for the same date first.
pub fn append_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    Ok(())
}

/// Renders a note and appends it under the header for `date`, creating the
/// year-file and header as needed.
pub fn append_note<S: AsRef<str>>(
    notes_dir: &Path,
    date: NaiveDate,
    message: &str,
    tags: &[S],
) -> io::Result<AppendOutcome> {
    let path = ensure_year_file(notes_dir, date)?;
    ensure_date_header(&path, date)?;

    let lines = render(message, tags);
    append_lines(&path, &lines)?;
    info!("Appended {} line(s) for {} to {}", lines.len(), date, path.display());

    Ok(AppendOutcome {
        path,
        lines_written: lines.len(),
    })
}

/// Whether `content` has a line that is exactly the header for `date`,
/// allowing extra spaces after `#` and trailing whitespace.
fn has_header(content: &str, date: NaiveDate) -> bool {
    let formatted = date.format(HEADER_FORMAT).to_string();
    content.lines().any(|line| {
        line.strip_prefix('#').is_some_and(|rest| {
            rest.starts_with([' ', '\t'])
                && rest.trim_start_matches([' ', '\t']).trim_end_matches([' ', '\t', '\r'])
                    == formatted
        })
    })
}

fn read_or_empty(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}
