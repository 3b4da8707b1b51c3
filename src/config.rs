//! Formatter configuration.
//!
//! Settings are resolved in order of precedence:
//! 1. Command-line flags (applied by the binary)
//! 2. The `CHARTFMT_MODE` environment variable
//! 3. A TOML config file, when one is given
//! 4. Built-in defaults

use crate::error::{ChartfmtError, Result};
use crate::format::{FormatMode, NumberFormatter, ZeroDisplay, DEFAULT_MAX_FRACTION_DIGITS};
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the configured mode.
pub const MODE_ENV: &str = "CHARTFMT_MODE";

/// Resolved formatter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Format mode.
    pub mode: FormatMode,
    /// How zero values are labelled.
    pub zero: ZeroDisplay,
    /// Fraction digit cap in short mode.
    pub max_fraction_digits: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: FormatMode::Normal,
            zero: ZeroDisplay::Blank,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

/// Settings as written in a config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Format mode name.
    pub mode: Option<FormatMode>,
    /// `blank` or `show`.
    pub zero: Option<ZeroDisplay>,
    /// Fraction digit cap in short mode.
    pub max_fraction_digits: Option<u8>,
}

impl FileConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChartfmtError::file_open(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|source| ChartfmtError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Merge file settings and an environment mode over the defaults.
    pub fn resolve(file: FileConfig, env_mode: Option<&str>) -> Result<Self> {
        let defaults = Self::default();

        let mode = match env_mode.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse()?,
            None => file.mode.unwrap_or(defaults.mode),
        };

        let config = Self {
            mode,
            zero: file.zero.unwrap_or(defaults.zero),
            max_fraction_digits: file
                .max_fraction_digits
                .unwrap_or(defaults.max_fraction_digits),
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Mode named by `CHARTFMT_MODE`, unparsed.
    pub fn env_mode() -> Option<String> {
        std::env::var(MODE_ENV).ok()
    }

    /// Load the optional config file and apply an environment mode.
    ///
    /// Callers that already have a mode from the command line pass `None`
    /// so a stale environment value cannot fail the run.
    pub fn load(path: Option<&Path>, env_mode: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, env_mode)
    }

    /// Build a formatter from these settings.
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.mode)
            .with_zero_display(self.zero)
            .with_max_fraction_digits(self.max_fraction_digits)
    }
}
