use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates `BOTH OF`, `EITHER OF` or `WON OF`.
    ///
    /// The operands are reduced to their truthiness; the result is a TROOF.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    #[must_use]
    pub(crate) fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let (left, right) = (left.is_truthy(), right.is_truthy());

        Value::Troof(match op {
                         BinaryOperator::BothOf => left && right,
                         BinaryOperator::EitherOf => left || right,
                         _ => left ^ right,
                     })
    }
}
