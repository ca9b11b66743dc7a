use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue, ValueType},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{Numeric, parse_numeric},
};

/// Represents a runtime value in the interpreter.
///
/// Variables are dynamically typed; any variable may hold any of these at any
/// time. Functions live in the same namespace as data, so a name can be
/// rebound from a number to a function and back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The uninitialized value.
    #[default]
    Noob,
    /// A boolean, `WIN` or `FAIL`.
    Troof(bool),
    /// A 64-bit signed integer.
    Numbr(i64),
    /// A double precision float.
    Numbar(f64),
    /// A string.
    Yarn(String),
    /// A user-defined function.
    Funkshun(Rc<FunctionDef>),
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Noob => Self::Noob,
            LiteralValue::Troof(b) => Self::Troof(b),
            LiteralValue::Numbr(n) => Self::Numbr(n),
            LiteralValue::Numbar(n) => Self::Numbar(n),
            LiteralValue::Yarn(s) => Self::Yarn(s),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(value: &LiteralValue) -> Self {
        value.clone().into()
    }
}

impl From<Numeric> for Value {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Numbr(n) => Self::Numbr(n),
            Numeric::Numbar(n) => Self::Numbar(n),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Numbr(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Numbar(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Troof(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Yarn(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Yarn(v)
    }
}

impl Value {
    /// The LOLCODE name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Noob => "NOOB",
            Self::Troof(_) => "TROOF",
            Self::Numbr(_) => "NUMBR",
            Self::Numbar(_) => "NUMBAR",
            Self::Yarn(_) => "YARN",
            Self::Funkshun(_) => "FUNKSHUN",
        }
    }

    /// Returns whether the value counts as true in a boolean context.
    ///
    /// `NOOB`, `FAIL`, `0`, `0.0`, the empty YARN and the YARNs `"FAIL"` and
    /// `"NOOB"` are falsy; everything else, functions included, is truthy.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Noob.is_truthy());
    /// assert!(!Value::from("FAIL").is_truthy());
    /// assert!(!Value::from("NOOB").is_truthy());
    /// assert!(!Value::Numbar(0.0).is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// assert!(Value::Numbr(-1).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Noob => false,
            Self::Troof(b) => *b,
            Self::Numbr(n) => *n != 0,
            Self::Numbar(n) => *n != 0.0,
            Self::Yarn(s) => !matches!(s.as_str(), "" | "FAIL" | "NOOB"),
            Self::Funkshun(_) => true,
        }
    }

    /// Reduces the value to a number.
    ///
    /// `WIN` is 1; `FAIL`, `NOOB` and the empty YARN are 0, and so are the
    /// YARNs spelling those words. Other YARN text is read as a NUMBAR when it
    /// has a decimal point or exponent and as a NUMBR otherwise. Text that is
    /// not a number and functions give `None`.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::{interpreter::value::core::Value, util::num::Numeric};
    ///
    /// assert_eq!(Value::Troof(true).to_numeric(), Some(Numeric::Numbr(1)));
    /// assert_eq!(Value::Noob.to_numeric(), Some(Numeric::Numbr(0)));
    /// assert_eq!(Value::from("3.5").to_numeric(), Some(Numeric::Numbar(3.5)));
    /// assert_eq!(Value::from("WIN").to_numeric(), Some(Numeric::Numbr(1)));
    /// assert_eq!(Value::from("KITTEH").to_numeric(), None);
    /// ```
    #[must_use]
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            Self::Noob | Self::Troof(false) => Some(Numeric::Numbr(0)),
            Self::Troof(true) => Some(Numeric::Numbr(1)),
            Self::Numbr(n) => Some(Numeric::Numbr(*n)),
            Self::Numbar(n) => Some(Numeric::Numbar(*n)),
            Self::Yarn(s) => match s.as_str() {
                "WIN" => Some(Numeric::Numbr(1)),
                "" | "FAIL" | "NOOB" => Some(Numeric::Numbr(0)),
                _ => parse_numeric(s),
            },
            Self::Funkshun(_) => None,
        }
    }

    /// Converts the value to `target` following the explicit cast rules.
    ///
    /// `NOOB` becomes the zero value of the target type. Numbers are read
    /// from text strictly, so a YARN that is not a number cannot become a
    /// NUMBR or NUMBAR.
    ///
    /// # Parameters
    /// - `target`: The requested type.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// The converted value.
    ///
    /// # Errors
    /// `RuntimeError::InvalidCast` for text that is not a number, floats
    /// outside the NUMBR range, and functions.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::{ast::ValueType, interpreter::value::core::Value};
    ///
    /// let five = Value::from("5").cast(ValueType::Numbr, 1).unwrap();
    /// assert_eq!(five, Value::Numbr(5));
    ///
    /// let truncated = Value::Numbar(3.9).cast(ValueType::Numbr, 1).unwrap();
    /// assert_eq!(truncated, Value::Numbr(3));
    ///
    /// assert_eq!(Value::Noob.cast(ValueType::Yarn, 1).unwrap(), Value::from(""));
    /// assert!(Value::from("CHEEZ").cast(ValueType::Numbar, 1).is_err());
    /// ```
    pub fn cast(&self, target: ValueType, line: usize) -> EvalResult<Self> {
        if matches!(self, Self::Noob) || target == ValueType::Noob {
            return Ok(target.zero().into());
        }

        let invalid = || RuntimeError::InvalidCast { value: self.to_string(),
                                                     target: target.name(),
                                                     line };

        if matches!(self, Self::Funkshun(_)) {
            return Err(invalid());
        }

        match target {
            ValueType::Noob => Ok(Self::Noob),
            ValueType::Troof => Ok(Self::Troof(self.is_truthy())),
            ValueType::Yarn => Ok(Self::Yarn(self.to_string())),
            ValueType::Numbr => self.to_numeric()
                                    .and_then(Numeric::truncate)
                                    .map(Self::Numbr)
                                    .ok_or_else(invalid),
            ValueType::Numbar => self.to_numeric()
                                     .map(|n| Self::Numbar(n.as_f64()))
                                     .ok_or_else(invalid),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noob => write!(f, "NOOB"),
            Self::Troof(true) => write!(f, "WIN"),
            Self::Troof(false) => write!(f, "FAIL"),
            Self::Numbr(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on whole values.
            Self::Numbar(n) => write!(f, "{n:?}"),
            Self::Yarn(s) => write!(f, "{s}"),
            Self::Funkshun(def) => write!(f, "<FUNKSHUN {}>", def.name),
        }
    }
}
