use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::arithmetic::numeric_cmp,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

/// Returns `true` if `it` matches a switch case label.
///
/// Both sides are compared as numbers when both reduce to one; otherwise the
/// raw values are compared, so `"CAT"` matches `"CAT"` instead of failing.
#[must_use]
pub fn case_matches(it: &Value, label: &Value) -> bool {
    match (it.to_numeric(), label.to_numeric()) {
        (Some(a), Some(b)) => numeric_cmp(a, b) == Ordering::Equal,
        _ => it == label,
    }
}

impl Context<'_> {
    /// Evaluates `BOTH SAEM` or `DIFFRINT`.
    ///
    /// Both operands are reduced to numbers, so `"5"`, `5` and `5.0` are all
    /// the same and `WIN` equals `1`.
    ///
    /// # Parameters
    /// - `op`: `BothSaem` or `Diffrint`.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a TROOF.
    ///
    /// # Errors
    /// `NonNumericComparison` if either operand is text that is not a number,
    /// or a function.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        let equal = Self::values_equal(left, right, line)?;
        Ok(Value::Troof(match op {
                            BinaryOperator::BothSaem => equal,
                            _ => !equal,
                        }))
    }

    /// Numeric equality of two values.
    pub fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        let reduce = |value: &Value| {
            value.to_numeric()
                 .ok_or_else(|| RuntimeError::NonNumericComparison { value: value.to_string(),
                                                                     line })
        };
        Ok(numeric_cmp(reduce(left)?, reduce(right)?) == Ordering::Equal)
    }
}
