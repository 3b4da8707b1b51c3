//! Normal mode: the plain `Number#toString` rendering.

use super::decimal::Decimal;

/// Exponents outside `[-7, 21)` switch to scientific notation.
const MAX_PLAIN_POINT: i32 = 21;
const MIN_PLAIN_POINT: i32 = -6;

/// Render the shortest round-trip digits without grouping.
pub(crate) fn format_plain(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let decimal = Decimal::from_f64(value);
    let digits = decimal.digit_string();
    let len = digits.len() as i32;
    let point = decimal.point();

    let body = if len <= point && point <= MAX_PLAIN_POINT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_POINT {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if MIN_PLAIN_POINT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent = point - 1;
        let exponent = if exponent >= 0 {
            format!("e+{exponent}")
        } else {
            format!("e-{}", -exponent)
        };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}{exponent}")
        } else {
            format!("{lead}.{rest}{exponent}")
        }
    };

    format!("{sign}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_separators() {
        assert_eq!(format_plain(42.0), "42");
        assert_eq!(format_plain(1_234_567_890.0), "1234567890");
        assert_eq!(format_plain(-100.0), "-100");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_plain(0.1), "0.1");
        assert_eq!(format_plain(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_plain(12.5), "12.5");
        assert_eq!(format_plain(0.000_001), "0.000001");
    }

    #[test]
    fn extreme_exponents_switch_to_scientific() {
        assert_eq!(format_plain(1e21), "1e+21");
        assert_eq!(format_plain(1.5e300), "1.5e+300");
        assert_eq!(format_plain(1e-7), "1e-7");
        assert_eq!(format_plain(-2.5e-8), "-2.5e-8");
        assert_eq!(format_plain(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_plain(f64::INFINITY), "Infinity");
        assert_eq!(format_plain(f64::NEG_INFINITY), "-Infinity");
    }
}
