//! Lossless representation of JSON numeric literals.
//!
//! A [Number] keeps hold of the verbatim digit text scanned from the input
//! (sign stripped) along with a sign flag and a float flag. Conversions apply
//! the sign at read time, and the original fractional precision can always be
//! recovered from the digit text rather than the converted binary value.

/// A JSON number, stored losslessly as its unsigned source digits
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The verbatim digit text, including any decimal point, excluding any sign
    digits: String,
    /// Whether the literal carried a leading minus
    negative: bool,
    /// Whether the literal carried a fractional part
    float: bool,
}

impl Number {
    /// Construct a new [Number] from its component parts. The digit text should
    /// contain only decimal digits plus (for floats) a single embedded period
    pub fn new(digits: impl Into<String>, negative: bool, float: bool) -> Self {
        Number {
            digits: digits.into(),
            negative,
            float,
        }
    }

    /// The verbatim digit text, sign stripped
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether the source literal was negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the source literal contained a fractional part
    pub fn is_float(&self) -> bool {
        self.float
    }

    /// The number of fractional digits present in the source literal, zero for
    /// integers. Derived from the stored digit text so that re-formatting can
    /// reproduce the original precision exactly
    pub fn precision(&self) -> usize {
        match self.digits.find('.') {
            Some(index) => self.digits.len() - index - 1,
            None => 0,
        }
    }

    /// Convert to a signed 64-bit integer. Digit text which doesn't form a
    /// valid integer (a float, or an overflowing literal) converts to zero
    pub fn as_i64(&self) -> i64 {
        let magnitude = parse_integer(&self.digits);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Convert to a 64-bit float, applying the stored sign
    pub fn as_f64(&self) -> f64 {
        let magnitude: f64 = fast_float::parse(self.digits.as_bytes()).unwrap_or(0.0);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

#[cfg(feature = "mixed_numerics")]
fn parse_integer(digits: &str) -> i64 {
    lexical::parse(digits.as_bytes()).unwrap_or(0)
}

#[cfg(not(feature = "mixed_numerics"))]
fn parse_integer(digits: &str) -> i64 {
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use crate::numbers::Number;

    #[test]
    fn should_apply_sign_to_integers() {
        let num = Number::new("100", true, false);
        assert_eq!(num.as_i64(), -100);
        assert_eq!(Number::new("100", false, false).as_i64(), 100);
    }

    #[test]
    fn should_apply_sign_to_floats() {
        let num = Number::new("123.456", true, true);
        assert_eq!(num.as_f64(), -123.456);
        assert!(num.is_float());
    }

    #[test]
    fn should_derive_precision_from_digits() {
        assert_eq!(Number::new("123.456", false, true).precision(), 3);
        assert_eq!(Number::new("0.5000", false, true).precision(), 4);
        assert_eq!(Number::new("42", false, false).precision(), 0);
    }

    #[test]
    fn should_convert_floats_to_zero_integers() {
        assert_eq!(Number::new("123.456", false, true).as_i64(), 0);
    }

    #[test]
    fn should_handle_large_integers() {
        assert_eq!(Number::new("8589934592", false, false).as_i64(), 8589934592);
    }
}
