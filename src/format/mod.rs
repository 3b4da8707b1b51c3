//! Number formatting for chart labels.
//!
//! A [`NumberFormatter`] turns an optional value into the string a chart
//! shows in a link or node label. Absent values, NaN and (by default) zero
//! produce an empty label; nothing here can fail.

mod compact;
mod decimal;
mod mode;
mod percent;
mod plain;

use crate::error::{ChartfmtError, Result};
use serde::Deserialize;

pub use mode::FormatMode;

/// Fraction digit cap applied in short mode unless configured otherwise.
pub const DEFAULT_MAX_FRACTION_DIGITS: u8 = 2;

/// How a zero value is labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDisplay {
    /// Zero gets an empty label, the same as a missing value.
    #[default]
    Blank,
    /// Zero is formatted like any other number.
    Show,
}

/// Formats values for one selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    mode: FormatMode,
    zero: ZeroDisplay,
    max_fraction_digits: u8,
}

impl NumberFormatter {
    /// Create a formatter for `mode` with default options.
    pub fn new(mode: FormatMode) -> Self {
        Self {
            mode,
            zero: ZeroDisplay::default(),
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }

    /// Set how zero is labelled.
    pub fn with_zero_display(mut self, zero: ZeroDisplay) -> Self {
        self.zero = zero;
        self
    }

    /// Set the fraction digit cap for short mode.
    pub fn with_max_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// The selected mode.
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// The zero policy.
    pub fn zero_display(&self) -> ZeroDisplay {
        self.zero
    }

    /// The short mode fraction digit cap.
    pub fn max_fraction_digits(&self) -> u8 {
        self.max_fraction_digits
    }

    /// Format a value for display.
    pub fn format(&self, value: Option<f64>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        if value.is_nan() {
            return String::new();
        }
        if value == 0.0 {
            return match self.zero {
                ZeroDisplay::Blank => String::new(),
                // Negative zero prints as plain zero.
                ZeroDisplay::Show => self.format_present(0.0),
            };
        }
        self.format_present(value)
    }

    fn format_present(&self, value: f64) -> String {
        match self.mode {
            FormatMode::Normal => plain::format_plain(value),
            FormatMode::Short => compact::format_compact(value, self.max_fraction_digits),
            FormatMode::Percentage => percent::format_percent(value),
        }
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(FormatMode::default())
    }
}

/// Format `value` in `mode` with default options.
pub fn format_number(value: Option<f64>, mode: FormatMode) -> String {
    NumberFormatter::new(mode).format(value)
}

/// Read a value typed by a user; `-`, `undefined`, `null` and blank text are absent.
pub fn parse_value(raw: &str) -> Result<Option<f64>> {
    match raw.trim() {
        "" | "-" | "undefined" | "null" => Ok(None),
        text => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ChartfmtError::invalid_value(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_blank_in_every_mode() {
        for mode in FormatMode::ALL {
            assert_eq!(format_number(None, mode), "");
            assert_eq!(format_number(Some(f64::NAN), mode), "");
        }
    }

    #[test]
    fn zero_is_blank_by_default() {
        for mode in FormatMode::ALL {
            assert_eq!(format_number(Some(0.0), mode), "");
            assert_eq!(format_number(Some(-0.0), mode), "");
        }
    }

    #[test]
    fn zero_can_be_shown() {
        let show = |mode| {
            NumberFormatter::new(mode)
                .with_zero_display(ZeroDisplay::Show)
                .format(Some(-0.0))
        };
        assert_eq!(show(FormatMode::Normal), "0");
        assert_eq!(show(FormatMode::Short), "0");
        assert_eq!(show(FormatMode::Percentage), "0%");
    }

    #[test]
    fn dispatches_on_mode() {
        assert_eq!(format_number(Some(42.0), FormatMode::Normal), "42");
        assert_eq!(format_number(Some(1_234_567_890.0), FormatMode::Short), "1.2B");
        assert_eq!(format_number(Some(1.0), FormatMode::Percentage), "100%");
        assert_eq!(
            format_number(Some(100_000_000.0), FormatMode::Percentage),
            "10,000,000,000%"
        );
    }

    #[test]
    fn formatting_is_repeatable() {
        let formatter = NumberFormatter::new(FormatMode::Short);
        let first = formatter.format(Some(234_567_890.0));
        assert_eq!(first, formatter.format(Some(234_567_890.0)));
        assert_eq!(first, "235M");
    }

    #[test]
    fn fraction_cap_only_affects_short_mode() {
        let formatter = NumberFormatter::new(FormatMode::Short).with_max_fraction_digits(0);
        assert_eq!(formatter.format(Some(1_234.0)), "1K");
        assert_eq!(formatter.max_fraction_digits(), 0);

        let formatter = NumberFormatter::new(FormatMode::Normal).with_max_fraction_digits(0);
        assert_eq!(formatter.format(Some(1.25)), "1.25");
    }

    #[test]
    fn parses_user_values() {
        assert_eq!(parse_value("42").unwrap(), Some(42.0));
        assert_eq!(parse_value(" -1.5 ").unwrap(), Some(-1.5));
        assert_eq!(parse_value("1e9").unwrap(), Some(1e9));
        assert_eq!(parse_value("").unwrap(), None);
        assert_eq!(parse_value("undefined").unwrap(), None);
        assert_eq!(parse_value("-").unwrap(), None);
        assert!(matches!(parse_value("ten"), Err(ChartfmtError::InvalidValue(_))));
    }
}
