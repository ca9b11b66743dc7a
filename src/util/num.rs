/// A number produced by reading numeric text or coercing a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Integer form.
    Numbr(i64),
    /// Floating-point form.
    Numbar(f64),
}

impl Numeric {
    /// Returns the number as an `f64`, widening integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Numbr(n) => i64_to_f64(n),
            Self::Numbar(n) => n,
        }
    }

    /// Returns the number as an `i64`, truncating floats toward zero.
    ///
    /// `None` when the float is not finite or lies outside the `i64` range.
    #[must_use]
    pub fn truncate(self) -> Option<i64> {
        match self {
            Self::Numbr(n) => Some(n),
            Self::Numbar(n) => f64_to_i64_truncated(n),
        }
    }

    /// Returns `true` for `0` and `0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Numbr(n) => n == 0,
            Self::Numbar(n) => n == 0.0,
        }
    }
}

/// Returns `true` when numeric text should be read as a NUMBAR.
///
/// Text containing a decimal point or an exponent marker is fractional.
#[must_use]
pub fn is_fractional_text(text: &str) -> bool {
    text.contains(['.', 'e', 'E'])
}

/// Reads numeric text such as `"42"`, `"-7"`, `"2.5"` or `"1e3"`.
///
/// Surrounding whitespace is ignored. Text that is empty, contains anything
/// besides digits, signs, `.` and exponent markers, or does not fit its type
/// yields `None`.
///
/// ## Example
/// ```
/// use lolterpreter::util::num::{Numeric, parse_numeric};
///
/// assert_eq!(parse_numeric("42"), Some(Numeric::Numbr(42)));
/// assert_eq!(parse_numeric(" 2.5 "), Some(Numeric::Numbar(2.5)));
/// assert_eq!(parse_numeric("1e3"), Some(Numeric::Numbar(1000.0)));
/// assert_eq!(parse_numeric("CATS"), None);
/// assert_eq!(parse_numeric("inf"), None);
/// assert_eq!(parse_numeric(""), None);
/// ```
#[must_use]
pub fn parse_numeric(text: &str) -> Option<Numeric> {
    let text = text.trim();
    if text.is_empty()
       || !text.chars()
               .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    if is_fractional_text(text) {
        text.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Numeric::Numbar)
    } else {
        text.parse::<i64>().ok().map(Numeric::Numbr)
    }
}

/// Converts an `i64` to the nearest `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero if the result fits in an `i64`.
///
/// ## Returns
/// - `Some(i64)`: The truncated value.
/// - `None`: If the value is NaN, infinite or out of range.
///
/// ## Example
/// ```
/// use lolterpreter::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9), Some(3));
/// assert_eq!(f64_to_i64_truncated(-3.9), Some(-3));
/// assert_eq!(f64_to_i64_truncated(1e20), None);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let value = value.trunc();
    // i64::MAX rounds up to 2^63 as an f64, so the upper bound is exclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
