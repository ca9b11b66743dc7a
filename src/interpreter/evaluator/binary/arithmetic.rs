use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::Numeric,
};

/// Orders two numbers, comparing as floats unless both are integers.
#[must_use]
pub fn numeric_cmp(left: Numeric, right: Numeric) -> Ordering {
    match (left, right) {
        (Numeric::Numbr(a), Numeric::Numbr(b)) => a.cmp(&b),
        _ => left.as_f64()
                 .partial_cmp(&right.as_f64())
                 .unwrap_or(Ordering::Equal),
    }
}

/// The two operands of an arithmetic operator, already coerced to a common
/// representation.
enum Operands {
    Numbr(i64, i64),
    Numbar(f64, f64),
}

impl Context<'_> {
    /// Evaluates `SUM OF`, `DIFF OF`, `PRODUKT OF`, `QUOSHUNT OF` or `MOD OF`.
    ///
    /// Operands are reduced with [`Value::to_numeric`]. An operand that
    /// cannot be reduced counts as 0, except a divisor, which counts as 1
    /// whenever it is missing or zero. The result is a NUMBAR if either
    /// operand was written as a NUMBAR; two YARN operands are both truncated
    /// to NUMBR; otherwise a fractional YARN also makes the result a NUMBAR.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a NUMBR or NUMBAR.
    ///
    /// # Errors
    /// `Overflow` if integer arithmetic leaves the `i64` range.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Diff, Mod, Produkt, Quoshunt, Sum};

        let divides = matches!(op, Quoshunt | Mod);
        let divisor_default = Numeric::Numbr(i64::from(divides));

        let l = left.to_numeric().unwrap_or(Numeric::Numbr(0));
        let r = match right.to_numeric() {
            Some(n) if !(divides && n.is_zero()) => n,
            _ => divisor_default,
        };

        let operands = Self::arithmetic_operands(left, right, l, r, line)?;
        let overflow = || RuntimeError::Overflow { line };

        let result = match operands {
            // A fractional divisor such as "0.5" can still truncate to zero.
            Operands::Numbr(a, 0) if divides => Value::Numbr(if op == Mod { 0 } else { a }),
            Operands::Numbr(a, b) => Value::Numbr(match op {
                                                      Sum => a.checked_add(b),
                                                      Diff => a.checked_sub(b),
                                                      Produkt => a.checked_mul(b),
                                                      Quoshunt => a.checked_div(b),
                                                      Mod => a.checked_rem(b),
                                                      _ => unreachable!(),
                                                  }.ok_or_else(overflow)?),
            Operands::Numbar(a, b) => Value::Numbar(match op {
                                                        Sum => a + b,
                                                        Diff => a - b,
                                                        Produkt => a * b,
                                                        Quoshunt => a / b,
                                                        Mod => a % b,
                                                        _ => unreachable!(),
                                                    }),
        };
        log::trace!("{left} {op:?} {right} = {result}");
        Ok(result)
    }

    /// Evaluates `BIGGR OF` or `SMALLR OF`.
    ///
    /// The numeric forms decide the winner but the original operand is
    /// returned unchanged. On a tie the left operand wins.
    #[must_use]
    pub(crate) fn eval_extremum(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let l = left.to_numeric().unwrap_or(Numeric::Numbr(0));
        let r = right.to_numeric().unwrap_or(Numeric::Numbr(0));

        let right_wins = match op {
            BinaryOperator::Biggr => numeric_cmp(r, l) == Ordering::Greater,
            _ => numeric_cmp(r, l) == Ordering::Less,
        };
        if right_wins { right.clone() } else { left.clone() }
    }

    /// Picks the representation both operands are computed in.
    fn arithmetic_operands(left: &Value,
                           right: &Value,
                           l: Numeric,
                           r: Numeric,
                           line: usize)
                           -> EvalResult<Operands> {
        let written_numbar = matches!(left, Value::Numbar(_)) || matches!(right, Value::Numbar(_));
        let both_yarn = matches!((left, right), (Value::Yarn(_), Value::Yarn(_)));

        if written_numbar {
            return Ok(Operands::Numbar(l.as_f64(), r.as_f64()));
        }
        if both_yarn {
            let truncate = |n: Numeric| n.truncate().ok_or(RuntimeError::Overflow { line });
            return Ok(Operands::Numbr(truncate(l)?, truncate(r)?));
        }

        Ok(match (l, r) {
            (Numeric::Numbr(a), Numeric::Numbr(b)) => Operands::Numbr(a, b),
            _ => Operands::Numbar(l.as_f64(), r.as_f64()),
        })
    }
}
