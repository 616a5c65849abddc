//! # Core Journal Logic
//!
//! Everything jot does apart from argument parsing lives here.
//!
//! ```text
//!   main.rs (clap)
//!       │  date, message, tags, notes_dir
//!       ▼
//!   ┌──────────────────────────────────────────┐
//!   │ journal::append_note                     │
//!   │   ensure_year_file  → notes/2025.md      │
//!   │   ensure_date_header → "# 08/14/2025"    │
//!   │   render            → bullet lines       │  (pure, no I/O)
//!   │   append_lines      → EOF                │
//!   └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tag`]: ticket vs. person tag classification
//! - [`render`]: message + tags → lines
//! - [`journal`]: year-files, date headers, appending
//! - [`date`]: parsing user-typed dates
//! - [`config`]: `~/.jot/config.toml` and override resolution

pub mod config;
pub mod date;
pub mod journal;
pub mod render;
pub mod tag;

// Re-export commonly used types for convenience
pub use journal::{AppendOutcome, append_note};
pub use render::render;
pub use tag::{TagKind, classify};
