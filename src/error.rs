//! Error types for chartfmt.
//!
//! Formatting itself never fails; these errors come from the layers around it
//! (chart files, configuration, command-line input).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chartfmt operations.
pub type Result<T> = std::result::Result<T, ChartfmtError>;

/// Errors that can occur in chartfmt.
#[derive(Debug, Error)]
pub enum ChartfmtError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Chart data file is not valid chart JSON.
    #[error("Invalid chart data in {path}: {source}")]
    ChartParse {
        /// Path of the chart file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML.
    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Unrecognized format mode name.
    #[error("Unknown format mode: {0:?} (expected normal, short or percentage)")]
    InvalidMode(String),

    /// A link refers to a node id that does not exist.
    #[error("Link {link} refers to unknown node {node_id}")]
    UnknownNode {
        /// Index of the offending link.
        link: usize,
        /// Node id that was not found.
        node_id: u32,
    },

    /// Two nodes share the same id.
    #[error("Duplicate node id: {0}")]
    DuplicateNode(u32),

    /// A link value is negative or not finite.
    #[error("Link {link} has invalid value {value}")]
    InvalidLinkValue {
        /// Index of the offending link.
        link: usize,
        /// The rejected value.
        value: f64,
    },

    /// A command-line value could not be read as a number.
    #[error("Not a number: {0:?}")]
    InvalidValue(String),
}

impl ChartfmtError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an InvalidMode error.
    pub fn invalid_mode(name: impl Into<String>) -> Self {
        Self::InvalidMode(name.into())
    }

    /// Create an InvalidValue error.
    pub fn invalid_value(raw: impl Into<String>) -> Self {
        Self::InvalidValue(raw.into())
    }
}
