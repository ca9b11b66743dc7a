use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        io::NoInput,
        value::{core::Value, symbols::SymbolTable},
    },
};

/// Evaluates a declaration-block initializer at parse time.
///
/// Literals, operators, casts and references to variables declared earlier
/// in the block are allowed. Function calls are not, since no function can
/// exist before the program runs.
///
/// # Parameters
/// - `expr`: The initializer.
/// - `symbols`: The declarations folded so far.
///
/// # Returns
/// The concrete value, or a short reason why the initializer is not constant.
///
/// # Example
/// ```
/// use lolterpreter::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         evaluator::constant::fold,
///         value::{core::Value, symbols::SymbolTable},
///     },
/// };
///
/// let mut symbols = SymbolTable::new();
/// symbols.declare("X", Value::Numbr(10));
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "X".into(),
///                                                              line: 3, }),
///                             op:    BinaryOperator::Sum,
///                             right: Box::new(Expr::Literal { value: 5.into(),
///                                                             line:  3, }),
///                             line:  3, };
///
/// assert_eq!(fold(&expr, &symbols), Ok(Value::Numbr(15)));
/// ```
pub fn fold(expr: &Expr, symbols: &SymbolTable) -> Result<Value, String> {
    if let Some(name) = first_call(expr) {
        return Err(format!("calling '{name}' is not allowed in the declaration block"));
    }

    let mut output = String::new();
    let mut input = NoInput;
    let mut context = Context::new(symbols.clone(), &mut output, &mut input);

    context.eval(expr).map_err(|error| match error {
                          RuntimeError::UnknownVariable { name, .. } => {
                              format!("'{name}' is not declared before this point")
                          },
                          other => other.to_string(),
                      })
}

/// Name of the first function call inside `expr`, if any.
fn first_call(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::FunctionCall { name, .. } => Some(name.as_str()),
        Expr::Literal { .. } | Expr::Variable { .. } => None,
        Expr::Not { expr, .. } | Expr::Cast { expr, .. } => first_call(expr),
        Expr::BinaryOp { left, right, .. } => first_call(left).or_else(|| first_call(right)),
        Expr::Variadic { operands, .. } => operands.iter().find_map(first_call),
    }
}
