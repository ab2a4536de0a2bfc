/// Core parsing logic.
///
/// Contains the parser entry point, the result alias, and the check for
/// input left over after the expression.
pub mod core;

/// The read position shared by all productions.
///
/// Wraps the token list of one input and advances strictly left to right.
pub mod cursor;

/// Binary operator productions.
///
/// Implements `Expression` (`+`, `-`) and `Term` (`*`, `/`), both
/// left-associative.
pub mod binary;

/// Primary productions.
///
/// Implements `Factor` (parenthesized expressions) and `Number` (literals).
pub mod primary;
