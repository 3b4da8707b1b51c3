//! Format mode selection.

use crate::error::ChartfmtError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which formatting rule applies to a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FormatMode {
    /// Plain decimal rendering ("1234567890").
    #[default]
    Normal,
    /// Compact notation with magnitude suffixes ("1.2B").
    Short,
    /// The value as a fraction of one, in percent ("100%").
    Percentage,
}

impl FormatMode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Short, Self::Percentage];

    /// Map raw text from a mode input box to a mode.
    ///
    /// The text is read as a leading integer the way a lenient UI field
    /// would: leading whitespace and trailing junk are ignored. `1` selects
    /// short, `2` percentage; everything else, including empty or
    /// non-numeric input, falls back to normal.
    pub fn from_input(raw: &str) -> Self {
        match leading_integer(raw) {
            Some(0) => Self::Normal,
            Some(1) => Self::Short,
            Some(2) => Self::Percentage,
            parsed => {
                tracing::debug!(input = raw, ?parsed, "unrecognized format input, using normal");
                Self::Normal
            },
        }
    }

    /// Selector index of this mode.
    pub fn index(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Short => 1,
            Self::Percentage => 2,
        }
    }

    /// Lowercase name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Short => "short",
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatMode {
    type Err = ChartfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "0" => Ok(Self::Normal),
            "short" | "1" => Ok(Self::Short),
            "percentage" | "percent" | "2" => Ok(Self::Percentage),
            _ => Err(ChartfmtError::invalid_mode(s)),
        }
    }
}

impl TryFrom<String> for FormatMode {
    type Error = ChartfmtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Integer prefix of `raw`, or `None` when there is no digit to read.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_selects_mode_by_index() {
        assert_eq!(FormatMode::from_input("0"), FormatMode::Normal);
        assert_eq!(FormatMode::from_input("1"), FormatMode::Short);
        assert_eq!(FormatMode::from_input("2"), FormatMode::Percentage);
    }

    #[test]
    fn input_reads_integer_prefix() {
        assert_eq!(FormatMode::from_input("  2"), FormatMode::Percentage);
        assert_eq!(FormatMode::from_input("1.9"), FormatMode::Short);
        assert_eq!(FormatMode::from_input("2px"), FormatMode::Percentage);
        assert_eq!(FormatMode::from_input("+1"), FormatMode::Short);
        assert_eq!(FormatMode::from_input("01"), FormatMode::Short);
    }

    #[test]
    fn unrecognized_input_falls_back_to_normal() {
        for raw in ["", "   ", "abc", "short", "3", "-1", "x1", "99999999999999999999999"] {
            assert_eq!(FormatMode::from_input(raw), FormatMode::Normal, "input {raw:?}");
        }
    }

    #[test]
    fn parses_names_strictly() {
        assert_eq!("short".parse::<FormatMode>().unwrap(), FormatMode::Short);
        assert_eq!("Percent".parse::<FormatMode>().unwrap(), FormatMode::Percentage);
        assert_eq!(" NORMAL ".parse::<FormatMode>().unwrap(), FormatMode::Normal);
        assert_eq!("2".parse::<FormatMode>().unwrap(), FormatMode::Percentage);
        assert!(matches!(
            "compact".parse::<FormatMode>(),
            Err(ChartfmtError::InvalidMode(name)) if name == "compact"
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in FormatMode::ALL {
            assert_eq!(mode.to_string().parse::<FormatMode>().unwrap(), mode);
            assert_eq!(FormatMode::from_input(&mode.index().to_string()), mode);
        }
    }
}
