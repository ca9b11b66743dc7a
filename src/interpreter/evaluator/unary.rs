use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `NOT <expr>`.
    ///
    /// The operand is reduced to its truthiness and inverted, so the result is
    /// always a TROOF.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         io::NoInput,
    ///         value::{core::Value, symbols::SymbolTable},
    ///     },
    /// };
    ///
    /// let (mut output, mut input) = (String::new(), NoInput);
    /// let mut context = Context::new(SymbolTable::new(), &mut output, &mut input);
    /// let operand = Expr::Literal { value: "FAIL".into(),
    ///                               line:  1, };
    ///
    /// assert_eq!(context.eval_not(&operand).unwrap(), Value::Troof(true));
    /// ```
    pub fn eval_not(&mut self, expr: &Expr) -> EvalResult<Value> {
        Ok(Value::Troof(!self.eval(expr)?.is_truthy()))
    }
}
