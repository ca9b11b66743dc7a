/// Core evaluation logic and context management.
///
/// Contains the runtime `Context`, the `Flow` signal returned by statements,
/// and dispatch for every statement and expression kind.
pub mod core;

/// Binary and variadic operator evaluation.
///
/// Implements arithmetic with LOLCODE's operand coercion, boolean logic,
/// numeric equality and string concatenation.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Conditionals, switches and loops.
///
/// Decides which arm runs and how `GTFO` signals end each construct.
pub mod control;

/// User-defined function calls.
///
/// Resolves the callee, checks arity and call depth, and runs the body in a
/// fresh frame.
pub mod function;

/// Parse-time folding of declaration-block initializers.
pub mod constant;

/// Utility functions for evaluation.
///
/// Variable lookup, output and input statements, and small helpers shared by
/// the other evaluator modules.
pub mod utils;
