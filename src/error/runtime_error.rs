/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted integer division by zero.
    #[error("Error at position {offset}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// Attempted floating-point division by a divisor too close to zero.
    #[error("Error at position {offset}: Division by a number too close to zero ({divisor}).")]
    DivisionByNearZero {
        /// The rejected divisor.
        divisor: f64,
        /// Byte offset of the `/` operator.
        offset:  usize,
    },
    /// Arithmetic overflowed, or a floating-point result is not finite.
    #[error("Error at position {offset}: Overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operator that overflowed.
        offset: usize,
    },
    /// The final result lies outside the accepted range.
    #[error("Result {value} is out of range [-2e9, +2e9].")]
    ResultOutOfRange {
        /// The rejected result, as it would have been printed.
        value: String,
    },
}
