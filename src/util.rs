/// Numeric text and conversion helpers.
///
/// This module reads numbers out of YARN text and converts between `i64` and
/// `f64` without silent saturation. Both the parser (literal folding) and the
/// evaluator (coercion and casts) rely on it.
pub mod num;
