/// Parser entry points and shared types.
///
/// Defines `Program`, the parse result handed to the evaluator, the
/// `BlockContext` threaded through statement parsing, and expression
/// dispatch.
pub mod core;

/// Statement parsing.
///
/// Output, input, declarations, assignments, in-place casts, returns, breaks
/// and expression statements.
pub mod statement;

/// Statement lists and the declaration block.
pub mod block;

/// Conditionals, switches and loops.
pub mod control;

/// Function definitions and calls.
pub mod function;

/// Two-operand and variadic operators.
pub mod binary;

/// `NOT`, `MAEK`, literals and variable references.
pub mod unary;

/// Token-stream helpers shared by the parser modules.
pub mod utils;
