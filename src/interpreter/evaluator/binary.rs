/// Operator dispatch and the variadic operators.
pub mod core;

/// `SUM`, `DIFF`, `PRODUKT`, `QUOSHUNT`, `MOD`, `BIGGR` and `SMALLR`.
///
/// Implements the coercion of mixed operands to a common number type.
pub mod arithmetic;

/// `BOTH SAEM` and `DIFFRINT`, plus switch-case matching.
pub mod comparison;

/// `BOTH OF`, `EITHER OF` and `WON OF`.
pub mod logic;
