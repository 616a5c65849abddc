//! # Tag Classification
//!
//! A tag is either a free-text person/topic label or an issue-tracker
//! ticket id. The shape of the text alone decides which.
//!
//! ```text
//! "Chris"    → Person
//! "alice"    → Person
//! "DT-1234"  → Ticket
//! "D-1"      → Person   (one letter is not enough)
//! "dt-1234"  → Person   (lowercase)
//! ```
//!
//! Only ASCII letters and digits count. Ticket ids come from issue trackers,
//! which never issue non-ASCII numerals, so `DT-١٢` stays a person tag.

use once_cell::sync::Lazy;
use regex::Regex;

static TICKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,}-[0-9]+$").expect("valid ticket regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// Rendered inline: `* TAG: message`.
    Person,
    /// Rendered as a parent bullet with the message nested under it.
    Ticket,
}

/// Classifies a (already trimmed) tag by its shape.
pub fn classify(tag: &str) -> TagKind {
    if TICKET_RE.is_match(tag) {
        TagKind::Ticket
    } else {
        TagKind::Person
    }
}
