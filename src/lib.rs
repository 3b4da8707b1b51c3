//! chartfmt - number formatting for chart labels.
//!
//! chartfmt turns the values of a chart (Sankey link values and node sizes)
//! into label strings in one of three user-selected modes: plain numbers,
//! compact `en-US` notation, or percentages.
//!
//! # Example
//!
//! ```
//! use chartfmt::format::{format_number, FormatMode};
//!
//! assert_eq!(format_number(Some(1_234_567_890.0), FormatMode::Short), "1.2B");
//! assert_eq!(format_number(Some(1.0), FormatMode::Percentage), "100%");
//! assert_eq!(format_number(Some(42.0), FormatMode::Normal), "42");
//! assert_eq!(format_number(None, FormatMode::Normal), "");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod util;

pub use error::{ChartfmtError, Result};
pub use format::{format_number, FormatMode, NumberFormatter, ZeroDisplay};
