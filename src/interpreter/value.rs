/// Runtime values.
///
/// Defines the `Value` enum and its truthiness, numeric reduction, explicit
/// casts and display form.
pub mod core;

/// Variable tables.
///
/// Defines `SymbolTable`, the insertion-ordered name to value map used for
/// the top-level program state and for every function call frame.
pub mod symbols;
