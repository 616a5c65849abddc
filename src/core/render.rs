//! # Note Rendering
//!
//! Turns a message plus zero or more tags into the bullet lines that get
//! appended to the journal. No I/O.
//!
//! ```text
//! render("sync", ["DT-99", "Chris", "alice"])
//!
//! * Chris: sync
//! * alice: sync
//! * DT-99
//!     * sync
//! ```
//!
//! Person tags come first, then tickets. Each group is sorted on its own,
//! so the order tags were given in never changes the output.

use crate::core::tag::{TagKind, classify};

/// Indent for the message nested under a ticket bullet.
const SUB_BULLET_INDENT: &str = "    ";

/// Renders one note into journal lines.
///
/// The caller trims the raw message. Tags are trimmed here and blank ones
/// are dropped.
pub fn render<S: AsRef<str>>(message: &str, tags: &[S]) -> Vec<String> {
    let tags: Vec<&str> = tags
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.is_empty() {
        return vec![bullet(message)];
    }

    let (mut tickets, mut people): (Vec<&str>, Vec<&str>) = tags
        .into_iter()
        .partition(|t| classify(t) == TagKind::Ticket);
    people.sort_unstable();
    tickets.sort_unstable();

    let mut lines = Vec::with_capacity(people.len() + tickets.len() * 2);
    for person in people {
        lines.push(bullet(&format!("{person}: {message}")));
    }
    for ticket in tickets {
        lines.push(bullet(ticket));
        lines.push(format!("{SUB_BULLET_INDENT}{}", bullet(message)));
    }
    lines
}

fn bullet(text: &str) -> String {
    format!("* {text}").trim_end().to_string()
}
