use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Exponents beyond this magnitude are rejected instead of expanded.
const MAX_EXPONENT: i64 = 1024;

/// An exact decimal number: `digits / 10^scale`.
///
/// The scale is taken from the text the number was parsed from, so `0.50`
/// keeps two fractional digits. Comparison is by value, not by representation.
#[derive(Debug, Clone)]
pub struct Decimal {
    digits: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            digits: BigInt::from(value),
            scale: 0,
        }
    }

    /// Parses a valid floating-point number:
    /// `-?(\d+(\.\d+)?|\.\d+)([eE][+-]?\d+)?`. No surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        let mut pos = 0;

        let negative = bytes.first() == Some(&b'-');
        if negative {
            pos += 1;
        }

        let int_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        let int_digits = &raw[int_start..pos];

        let mut frac_digits = "";
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            let frac_start = pos;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
            frac_digits = &raw[frac_start..pos];
            if frac_digits.is_empty() {
                return None;
            }
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let mut exponent = 0i64;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            pos += 1;
            let exp_negative = match bytes.get(pos) {
                Some(b'-') => {
                    pos += 1;
                    true
                }
                Some(b'+') => {
                    pos += 1;
                    false
                }
                _ => false,
            };
            let exp_start = pos;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
            let exp_digits = raw[exp_start..pos].trim_start_matches('0');
            if pos == exp_start {
                return None;
            }
            if exp_digits.len() > 6 {
                return None;
            }
            exponent = if exp_digits.is_empty() {
                0
            } else {
                exp_digits.parse::<i64>().ok()?
            };
            if exp_negative {
                exponent = -exponent;
            }
            if exponent.abs() > MAX_EXPONENT {
                return None;
            }
        }

        if pos != bytes.len() {
            return None;
        }

        let mut text = String::with_capacity(int_digits.len() + frac_digits.len());
        text.push_str(int_digits);
        text.push_str(frac_digits);
        let mut digits = text.parse::<BigInt>().ok()?;

        let mut scale = frac_digits.len() as i64 - exponent;
        if scale < 0 {
            digits *= pow10((-scale) as u32);
            scale = 0;
        }
        if negative {
            digits = -digits;
        }

        Some(Self {
            digits,
            scale: u32::try_from(scale).ok()?,
        })
    }

    /// Number of digits after the decimal point in this representation.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_positive(&self) -> bool {
        self.digits.is_positive()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// The integer `self * 10^scale`. `scale` must not be below `self.scale()`.
    fn scaled_to(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        &self.digits * pow10(scale - self.scale)
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.scaled_to(scale).cmp(&other.scaled_to(scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.digits);
        }
        let magnitude = self.digits.abs().to_string();
        let scale = self.scale as usize;
        let padded = if magnitude.len() <= scale {
            format!("{}{magnitude}", "0".repeat(scale + 1 - magnitude.len()))
        } else {
            magnitude
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let sign = if self.digits.is_negative() { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

/// Whether `value` is off the grid `base + k * step` for every integer `k`.
///
/// All three operands are lifted to the largest scale among them and the
/// remainder is taken on integers, so no fractional digit is ever rounded.
pub(crate) fn step_mismatch(value: &Decimal, base: &Decimal, step: &Decimal) -> bool {
    if !step.is_positive() {
        return false;
    }
    let scale = value.scale.max(base.scale).max(step.scale);
    let offset = value.scaled_to(scale) - base.scaled_to(scale);
    let step = step.scaled_to(scale);
    !(offset % step).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        Decimal::parse(raw).unwrap_or_else(|| panic!("{raw} should parse"))
    }

    #[test]
    fn parse_accepts_floating_point_grammar() {
        for raw in ["0", "-0", "12", "-12.5", ".5", "1e3", "1E-3", "2.5e+2", "007"] {
            assert!(Decimal::parse(raw).is_some(), "{raw}");
        }
    }

    #[test]
    fn parse_rejects_malformed_numbers() {
        for raw in [
            "", "-", ".", "5.", "+5", " 5", "5 ", "1e", "1e+", "abc", "1.2.3", "0x10", "--1",
            "1e5000", "Infinity", "NaN",
        ] {
            assert!(Decimal::parse(raw).is_none(), "{raw:?}");
        }
    }

    #[test]
    fn scale_follows_text() {
        assert_eq!(dec("0.50").scale(), 2);
        assert_eq!(dec("123456789.1000001").scale(), 7);
        assert_eq!(dec("1e-14").scale(), 14);
        assert_eq!(dec("1.5e2").scale(), 0);
        assert_eq!(dec("42").scale(), 0);
    }

    #[test]
    fn comparison_ignores_representation() {
        assert_eq!(dec("1.0"), dec("1"));
        assert_eq!(dec("1.5e1"), dec("15"));
        assert!(dec("0.50000000000001") > dec("0.5"));
        assert!(dec("-2") < dec("-1.99"));
        assert_eq!(dec("-0"), Decimal::zero());
    }

    #[test]
    fn display_renders_fractional_digits() {
        assert_eq!(dec("0.05").to_string(), "0.05");
        assert_eq!(dec("-12.50").to_string(), "-12.50");
        assert_eq!(dec("1e2").to_string(), "100");
        assert_eq!(dec("-.5").to_string(), "-0.5");
    }

    #[test]
    fn step_mismatch_is_exact_for_decimal_steps() {
        let base = dec("0.5");
        let step = dec("0.1");
        for raw in ["0.5", "0.6", "1.6", "2.1", "10.8", "123456789.90"] {
            assert!(!step_mismatch(&dec(raw), &base, &step), "{raw}");
        }
        for raw in [
            "0.50000000000001",
            "0.51",
            "1.51",
            "2.15",
            "10.10001",
            "123456789.1000001",
        ] {
            assert!(step_mismatch(&dec(raw), &base, &step), "{raw}");
        }
    }

    #[test]
    fn step_mismatch_handles_values_below_base() {
        let base = dec("1");
        let step = dec("0.25");
        assert!(!step_mismatch(&dec("-0.5"), &base, &step));
        assert!(step_mismatch(&dec("-0.3"), &base, &step));
    }

    #[test]
    fn non_positive_step_never_mismatches() {
        assert!(!step_mismatch(&dec("0.3"), &Decimal::zero(), &Decimal::zero()));
        assert!(!step_mismatch(&dec("0.3"), &Decimal::zero(), &dec("-1")));
    }
}
