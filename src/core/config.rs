//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub notes_dir: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Notes directory name, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "notes";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const NOTES_DIR_ENV: &str = "JOT_NOTES_DIR";
pub const LOG_LEVEL_ENV: &str = "JOT_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub notes_dir: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.jot/`, where the config and log file live.
pub fn jot_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jot"))
}

/// Returns the path to `~/.jot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    jot_home().map(|d| d.join("config.toml"))
}

/// Load config from `~/.jot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JotConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<JotConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(JotConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# jot configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# notes_dir = "~/notes"      # Or set JOT_NOTES_DIR. Default: ./notes
# log_level = "info"         # off, error, warn, info, debug, trace. Or set JOT_LOG
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values taken from `JOT_NOTES_DIR` and `JOT_LOG`.
///
/// Read once by the binary and handed to [`resolve`], so resolution only
/// depends on its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub notes_dir: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            notes_dir: std::env::var(NOTES_DIR_ENV).ok(),
            log_level: std::env::var(LOG_LEVEL_ENV).ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Relative notes directories are joined onto `cwd`.
pub fn resolve(
    config: &JotConfig,
    cli_notes_dir: Option<&str>,
    cli_log_level: Option<LevelFilter>,
    env: &EnvOverrides,
    cwd: &Path,
) -> ResolvedConfig {
    // Notes dir: CLI → env → config → default
    let notes_dir = cli_notes_dir
        .or(env.notes_dir.as_deref())
        .or(config.general.notes_dir.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_NOTES_DIR);

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .or_else(|| env.log_level.as_deref().and_then(parse_level))
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        notes_dir: absolutize(&expand_tilde(notes_dir), cwd),
        log_level,
    }
}

/// Parses a log level name, case-insensitively. `warning` is accepted for `warn`.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        other => {
            warn!("Ignoring unknown log level `{}`", other);
            None
        }
    }
}

/// Expands a leading `~` or `~/` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
