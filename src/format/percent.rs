//! Percentage mode: the value is a fraction of one.

use super::decimal::Decimal;

pub(crate) fn format_percent(value: f64) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    if value.is_infinite() {
        return format!("{sign}∞%");
    }

    let mut decimal = Decimal::from_f64(value);
    decimal.scale(2);
    decimal.round_fraction(0);
    format!("{sign}{}%", decimal.to_fixed(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_one_hundred() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(100_000_000.0), "10,000,000,000%");
    }

    #[test]
    fn rounds_to_whole_percent() {
        assert_eq!(format_percent(0.256), "26%");
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(0.004), "0%");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_percent(-0.5), "-50%");
        assert_eq!(format_percent(-0.001), "-0%");
    }

    #[test]
    fn infinite_values() {
        assert_eq!(format_percent(f64::INFINITY), "∞%");
        assert_eq!(format_percent(f64::NEG_INFINITY), "-∞%");
    }
}
