//! Exact decimal view of an `f64` and the rounding the locale formats need.
//!
//! All locale formatting works on the shortest round-trip digits of the
//! value, so `0.1` is rounded as the decimal `0.1` and not as the binary
//! fraction closest to it.

/// A finite magnitude as a digit string and a decimal point position.
///
/// The value is `0.d1 d2 ... dk * 10^point`; for numbers of at least one,
/// `point` is the count of integer digits. Zero has no digits. The sign is
/// handled by the callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// The decimal zero.
    pub(crate) fn zero() -> Self {
        Self {
            digits: Vec::new(),
            point: 0,
        }
    }

    /// Decompose the magnitude of a finite `f64`.
    pub(crate) fn from_f64(value: f64) -> Self {
        debug_assert!(value.is_finite());
        let abs = value.abs();
        if abs == 0.0 {
            return Self::zero();
        }

        // `{:e}` yields the shortest digits that round-trip, e.g. "1.234e9".
        let repr = format!("{abs:e}");
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits = mantissa
            .bytes()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .collect();

        let mut decimal = Self {
            digits,
            point: exponent + 1,
        };
        decimal.normalize();
        decimal
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Position of the decimal point relative to the first digit.
    pub(crate) fn point(&self) -> i32 {
        self.point
    }

    /// Power of ten of the leading digit (`0` for zero).
    pub(crate) fn magnitude(&self) -> i32 {
        if self.is_zero() {
            0
        } else {
            self.point - 1
        }
    }

    /// The significant digits as text, without sign or point.
    pub(crate) fn digit_string(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Multiply by `10^power`.
    pub(crate) fn scale(&mut self, power: i32) {
        if !self.is_zero() {
            self.point += power;
        }
    }

    /// Round half away from zero to at most `fraction_digits` decimals.
    pub(crate) fn round_fraction(&mut self, fraction_digits: u32) {
        let keep = i64::from(self.point) + i64::from(fraction_digits);
        self.round_to_len(keep);
    }

    /// Round half away from zero to at most `significant` digits.
    pub(crate) fn round_significant(&mut self, significant: u32) {
        self.round_to_len(i64::from(significant));
    }

    fn round_to_len(&mut self, keep: i64) {
        if self.is_zero() || keep >= self.digits.len() as i64 {
            return;
        }
        if keep < 0 {
            *self = Self::zero();
            return;
        }

        let keep = keep as usize;
        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);

        if round_up {
            let mut index = keep;
            loop {
                if index == 0 {
                    self.digits.insert(0, 1);
                    self.point += 1;
                    break;
                }
                index -= 1;
                if self.digits[index] == 9 {
                    self.digits[index] = 0;
                } else {
                    self.digits[index] += 1;
                    break;
                }
            }
        }

        self.normalize();
    }

    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.point -= leading as i32;
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    /// Render in positional notation, optionally grouping the integer part.
    pub(crate) fn to_fixed(&self, grouping: bool) -> String {
        let digits = self.digit_string();
        let len = digits.len() as i32;

        let integer = if self.point <= 0 {
            "0".to_string()
        } else if self.point >= len {
            format!("{digits}{}", "0".repeat((self.point - len) as usize))
        } else {
            digits[..self.point as usize].to_string()
        };

        let fraction = if self.point >= len {
            String::new()
        } else if self.point < 0 {
            format!("{}{digits}", "0".repeat((-self.point) as usize))
        } else {
            digits[self.point as usize..].to_string()
        };

        let integer = if grouping {
            group_thousands(&integer)
        } else {
            integer
        };

        if fraction.is_empty() {
            integer
        } else {
            format!("{integer}.{fraction}")
        }
    }
}

/// Insert `en-US` thousands separators into a run of ASCII digits.
pub(crate) fn group_thousands(integer: &str) -> String {
    let bytes = integer.as_bytes();
    let mut result = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, &c) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(char::from(c));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_shortest_digits() {
        let d = Decimal::from_f64(1_234_567_890.0);
        assert_eq!(d.digit_string(), "123456789");
        assert_eq!(d.point(), 10);

        let d = Decimal::from_f64(0.001_25);
        assert_eq!(d.digit_string(), "125");
        assert_eq!(d.point(), -2);

        let d = Decimal::from_f64(-0.1);
        assert_eq!(d.digit_string(), "1");
        assert_eq!(d.point(), 0);
    }

    #[test]
    fn zero_has_no_digits() {
        let d = Decimal::from_f64(0.0);
        assert!(d.is_zero());
        assert_eq!(d.to_fixed(true), "0");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let mut d = Decimal::from_f64(2.5);
        d.round_fraction(0);
        assert_eq!(d.to_fixed(false), "3");

        let mut d = Decimal::from_f64(0.125);
        d.round_fraction(2);
        assert_eq!(d.to_fixed(false), "0.13");

        let mut d = Decimal::from_f64(0.5);
        d.round_fraction(0);
        assert_eq!(d.to_fixed(false), "1");
    }

    #[test]
    fn rounding_carries_into_new_digit() {
        let mut d = Decimal::from_f64(999.6);
        d.round_fraction(0);
        assert_eq!(d.to_fixed(true), "1,000");
        assert_eq!(d.magnitude(), 3);

        let mut d = Decimal::from_f64(9.96);
        d.round_significant(2);
        assert_eq!(d.to_fixed(false), "10");
    }

    #[test]
    fn rounding_below_precision_gives_zero() {
        let mut d = Decimal::from_f64(0.004);
        d.round_fraction(2);
        assert!(d.is_zero());
        assert_eq!(d.to_fixed(false), "0");
    }

    #[test]
    fn fixed_notation_pads_zeros() {
        let mut d = Decimal::from_f64(1.0);
        d.scale(10);
        assert_eq!(d.to_fixed(true), "10,000,000,000");
        assert_eq!(Decimal::from_f64(0.000_5).to_fixed(false), "0.0005");
        assert_eq!(Decimal::from_f64(12.5).to_fixed(false), "12.5");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
