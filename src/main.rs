use chrono::NaiveDate;
use clap::Parser;
use jot::core::config::{self, EnvOverrides, parse_level};
use jot::core::date::{parse_date, today};
use jot::core::journal::{AppendOutcome, append_note};
use log::LevelFilter;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "jot",
    about = "Append date-scoped markdown notes into <YEAR>.md files"
)]
struct Args {
    /// The note message text
    #[arg(value_parser = parse_message)]
    message: String,

    /// Tag to prefix or group the note by (repeatable). Ticket-like tags
    /// (e.g. DT-1234) nest the message under the ticket; anything else
    /// renders as "* TAG: message"
    #[arg(short = 't', long = "tag")]
    tags: Vec<String>,

    /// Backdate in YYYY-MM-DD, MM/DD/YYYY, or MMDDYYYY [default: today]
    #[arg(short, long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Directory where <YEAR>.md lives [default: ./notes]
    #[arg(short, long)]
    notes_dir: Option<String>,

    /// Log verbosity for ~/.jot/jot.log
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LevelFilter>,
}

fn parse_message(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("message cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    parse_level(s).ok_or_else(|| {
        format!("unsupported log level `{s}`; expected off|error|warn|info|debug|trace")
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("jot: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = config::load_config()?;
    let cwd = std::env::current_dir()?;
    let resolved = config::resolve(
        &file_config,
        args.notes_dir.as_deref(),
        args.log_level,
        &EnvOverrides::from_env(),
        &cwd,
    );

    jot::logging::init(resolved.log_level);
    log::debug!("Resolved config: {:?}", resolved);

    let date = args.date.unwrap_or_else(today);
    let outcome = append_note(&resolved.notes_dir, date, &args.message, args.tags.as_slice())?;

    println!("{}", confirmation(&outcome));
    Ok(())
}

/// The single line printed after a successful append.
fn confirmation(outcome: &AppendOutcome) -> String {
    format!(
        "Appended {} line(s) to {}",
        outcome.lines_written,
        outcome.path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_message_trims() {
        assert_eq!(parse_message("  hi ").unwrap(), "hi");
    }

    #[test]
    fn test_parse_message_rejects_blank() {
        assert!(parse_message("").is_err());
        assert!(parse_message("   ").is_err());
        assert!(parse_message(" \t\n").is_err());
    }

    #[test]
    fn test_repeated_tag_flags_collect_in_order() {
        let args = Args::try_parse_from(["jot", "m", "-t", "A", "--tag", "B"]).unwrap();
        assert_eq!(args.message, "m");
        assert_eq!(args.tags, vec!["A", "B"]);
        assert!(args.date.is_none());
        assert!(args.notes_dir.is_none());
    }

    #[test]
    fn test_blank_message_is_usage_error() {
        assert!(Args::try_parse_from(["jot", "   "]).is_err());
    }

    #[test]
    fn test_date_flag_parses_each_format() {
        let expected = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        for input in ["2025-08-14", "08/14/2025", "08142025"] {
            let args = Args::try_parse_from(["jot", "m", "-d", input]).unwrap();
            assert_eq!(args.date, Some(expected));
        }
    }

    #[test]
    fn test_bad_date_is_usage_error() {
        let err = Args::try_parse_from(["jot", "m", "-d", "yesterday"])
            .err()
            .expect("bad date should be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::try_parse_from(["jot", "m", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
        assert!(Args::try_parse_from(["jot", "m", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_confirmation_line() {
        let outcome = AppendOutcome {
            path: PathBuf::from("/notes/2025.md"),
            lines_written: 2,
        };
        assert_eq!(confirmation(&outcome), "Appended 2 line(s) to /notes/2025.md");
    }
}
