/// Core evaluation logic.
///
/// Contains the evaluation context, the result alias, and the tree walk.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators for integer and real operands,
/// including the divisor checks.
pub mod binary;
