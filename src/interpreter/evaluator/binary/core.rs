use crate::{
    ast::{BinaryOperator, Expr, VariadicOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operator to its family: arithmetic goes to
    /// `eval_arithmetic`, `BIGGR`/`SMALLR` to `eval_extremum`, boolean
    /// operators to `eval_logic`, and equality to `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Sum, &Value::Numbr(10), &Value::Numbr(5), 1);
    /// assert_eq!(result.unwrap(), Value::Numbr(15));
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Sum, &Value::Noob, &Value::Numbr(5), 1);
    /// assert_eq!(sum.unwrap(), Value::Numbr(5));
    ///
    /// let quotient =
    ///     Context::eval_binary(BinaryOperator::Quoshunt, &Value::Numbr(7), &Value::Numbr(0), 1);
    /// assert_eq!(quotient.unwrap(), Value::Numbr(7));
    ///
    /// let bigger =
    ///     Context::eval_binary(BinaryOperator::Biggr, &Value::from("10"), &Value::Numbr(3), 1);
    /// assert_eq!(bigger.unwrap(), Value::from("10"));
    ///
    /// let same =
    ///     Context::eval_binary(BinaryOperator::BothSaem, &Value::from("5"), &Value::Numbar(5.0), 1);
    /// assert_eq!(same.unwrap(), Value::Troof(true));
    ///
    /// let either = Context::eval_binary(BinaryOperator::WonOf, &Value::Troof(true), &Value::from(""), 1);
    /// assert_eq!(either.unwrap(), Value::Troof(true));
    ///
    /// let words =
    ///     Context::eval_binary(BinaryOperator::BothSaem, &Value::from("A"), &Value::from("A"), 1);
    /// assert!(words.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Biggr, BothOf, BothSaem, Diff, Diffrint, EitherOf, Mod, Produkt, Quoshunt, Smallr,
            Sum, WonOf,
        };

        match op {
            Sum | Diff | Produkt | Quoshunt | Mod => Self::eval_arithmetic(op, left, right, line),
            Biggr | Smallr => Ok(Self::eval_extremum(op, left, right)),
            BothOf | EitherOf | WonOf => Ok(Self::eval_logic(op, left, right)),
            BothSaem | Diffrint => Self::eval_comparison(op, left, right, line),
        }
    }

    /// Evaluates `ALL OF`, `ANY OF` or `SMOOSH` over its operands.
    ///
    /// Every operand is evaluated, in order, before the result is computed.
    pub fn eval_variadic(&mut self,
                         op: VariadicOperator,
                         operands: &[Expr])
                         -> EvalResult<Value> {
        let values = operands.iter()
                             .map(|operand| self.eval(operand))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(match op {
               VariadicOperator::AllOf => Value::Troof(values.iter().all(Value::is_truthy)),
               VariadicOperator::AnyOf => Value::Troof(values.iter().any(Value::is_truthy)),
               VariadicOperator::Smoosh => {
                   Value::Yarn(values.iter().map(ToString::to_string).collect())
               },
           })
    }
}
