//! Number conversions across the string bridge.
//!
//! Numbers travel as plain numeric literals (`42`, `3.14`). Decoding is an
//! ordered attempt with a tagged result: the integer parse runs first, the
//! float parse second, and [`Number`] records which one succeeded so callers
//! never have to re-inspect the text. No other bases, exponent policies, or
//! locale separators are layered on top of what the literal forms already
//! allow.
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::{number, Number};
//!
//! assert_eq!(number::decode("42"), Ok(Number::Integer(42)));
//! assert_eq!(number::decode("3.14"), Ok(Number::Float(3.14)));
//! assert!(number::decode("abc").is_err());
//!
//! assert_eq!(number::encode(&Number::Integer(42)), "42");
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A numeric value tagged with the literal kind it was parsed from.
///
/// # Examples
///
/// ```rust
/// use asmarshal::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Number;
    ///
    /// assert!(Number::Integer(42).is_integer());
    /// assert!(!Number::Float(3.5).is_integer());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in `i64` range, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_f64(), 42.0);
    /// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Encodes a number into its wire form.
///
/// This is a pass-through: the default textual rendering of the value is
/// already the transmission form, so no additional formatting is applied.
///
/// # Examples
///
/// ```rust
/// use asmarshal::{number, Number};
///
/// assert_eq!(number::encode(&Number::Integer(-7)), "-7");
/// assert_eq!(number::encode(&Number::Float(3.14)), "3.14");
/// ```
#[must_use]
pub fn encode(value: &Number) -> String {
    value.to_string()
}

/// Decodes a bridge number string.
///
/// Surrounding ASCII whitespace is ignored. The integer parse is attempted
/// first; if it fails, the float parse; if both fail, the input is not a
/// number. Integer literals outside `i64` range fall through to the float
/// attempt and come back as [`Number::Float`].
///
/// # Errors
///
/// Returns [`Error::ParseNumber`] when neither parse succeeds.
///
/// # Examples
///
/// ```rust
/// use asmarshal::{number, Number};
///
/// assert_eq!(number::decode("42"), Ok(Number::Integer(42)));
/// assert_eq!(number::decode("-3.5"), Ok(Number::Float(-3.5)));
/// assert!(number::decode("12px").is_err());
/// ```
pub fn decode(text: &str) -> Result<Number> {
    let literal = text.trim();
    if let Ok(i) = literal.parse::<i64>() {
        return Ok(Number::Integer(i));
    }
    if let Ok(f) = literal.parse::<f64>() {
        return Ok(Number::Float(f));
    }
    Err(Error::parse_number(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_integer_first() {
        assert_eq!(decode("42"), Ok(Number::Integer(42)));
        assert_eq!(decode("0"), Ok(Number::Integer(0)));
        assert_eq!(decode("-17"), Ok(Number::Integer(-17)));
        assert_eq!(decode("+8"), Ok(Number::Integer(8)));
    }

    #[test]
    fn test_decode_float_fallback() {
        assert_eq!(decode("3.14"), Ok(Number::Float(3.14)));
        assert_eq!(decode("-0.5"), Ok(Number::Float(-0.5)));
        assert_eq!(decode("1e3"), Ok(Number::Float(1000.0)));
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode(" 42 "), Ok(Number::Integer(42)));
        assert_eq!(decode("\t2.5\n"), Ok(Number::Float(2.5)));
    }

    #[test]
    fn test_decode_rejects_non_numbers() {
        assert_eq!(decode("abc"), Err(Error::parse_number("abc")));
        assert!(decode("").is_err());
        assert!(decode("4 2").is_err());
        assert!(decode("0x1f").is_err());
    }

    #[test]
    fn test_decode_is_from_str() {
        let n: Number = "2.75".parse().unwrap();
        assert_eq!(n, Number::Float(2.75));
    }

    #[test]
    fn test_out_of_range_integer_becomes_float() {
        // One past i64::MAX: the integer attempt fails, the float one succeeds.
        let n = decode("9223372036854775808").unwrap();
        assert!(n.is_float());
    }

    #[test]
    fn test_encode_pass_through() {
        assert_eq!(encode(&Number::Integer(i64::MAX)), "9223372036854775807");
        assert_eq!(encode(&Number::Float(0.25)), "0.25");
    }

    #[test]
    fn test_roundtrip() {
        for literal in ["0", "-1", "1048576", "0.125", "-27.5"] {
            let n = decode(literal).unwrap();
            assert_eq!(encode(&n), literal);
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Number::Integer(5).as_f64(), 5.0);
        assert_eq!(Number::Float(5.5).as_i64(), None);
        assert_eq!(Number::Float(6.0).as_i64(), Some(6));
        assert!(Number::from(3u16).is_integer());
        assert!(Number::from(2.5f32).is_float());
    }
}
