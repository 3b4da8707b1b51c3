//! Short mode: `en-US` compact notation ("1.2K", "235M", "1.2B").

use super::decimal::Decimal;

/// Suffixes by the power of ten they stand for.
const SUFFIXES: [(i32, &str); 4] = [(3, "K"), (6, "M"), (9, "B"), (12, "T")];

/// Compact rounding keeps two significant digits while the scaled value has
/// a single integer digit.
const COMPACT_SIGNIFICANT_DIGITS: u32 = 2;

/// Compact numbers only group integer parts of five digits or more ("1000T").
const MIN_GROUPED_INTEGER_DIGITS: i32 = 5;

pub(crate) fn format_compact(value: f64, max_fraction_digits: u8) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let decimal = Decimal::from_f64(value);
    let (scaled, suffix) = compact_round(&decimal, u32::from(max_fraction_digits));
    let grouping = scaled.point() >= MIN_GROUPED_INTEGER_DIGITS;
    format!("{sign}{}{suffix}", scaled.to_fixed(grouping))
}

fn pattern_for(magnitude: i32) -> (i32, &'static str) {
    SUFFIXES
        .iter()
        .rev()
        .find(|(exponent, _)| magnitude >= *exponent)
        .map_or((0, ""), |&(exponent, suffix)| (exponent, suffix))
}

fn scale_and_round(decimal: &Decimal, exponent: i32, max_fraction_digits: u32) -> Decimal {
    let mut scaled = decimal.clone();
    scaled.scale(-exponent);
    if scaled.point() >= 2 {
        scaled.round_fraction(0);
    } else {
        scaled.round_significant(COMPACT_SIGNIFICANT_DIGITS);
    }
    scaled.round_fraction(max_fraction_digits);
    scaled
}

fn compact_round(decimal: &Decimal, max_fraction_digits: u32) -> (Decimal, &'static str) {
    let magnitude = decimal.magnitude();
    let (exponent, suffix) = pattern_for(magnitude);
    let scaled = scale_and_round(decimal, exponent, max_fraction_digits);

    // 999_999 rounds to 1000K; re-run with the next suffix.
    let rounded_magnitude = scaled.magnitude() + exponent;
    if !scaled.is_zero() && rounded_magnitude > magnitude {
        let (next_exponent, next_suffix) = pattern_for(rounded_magnitude);
        if next_exponent != exponent {
            return (
                scale_and_round(decimal, next_exponent, max_fraction_digits),
                next_suffix,
            );
        }
    }

    (scaled, suffix)
}
