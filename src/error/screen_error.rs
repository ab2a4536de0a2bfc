/// Represents all errors raised while screening raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    /// The input exceeds the accepted length.
    #[error("Input is too long: {length} bytes, at most {max} are accepted.")]
    InputTooLong {
        /// Length of the input in bytes.
        length: usize,
        /// The accepted maximum.
        max:    usize,
    },
    /// The input holds no expression at all.
    #[error("Input is empty.")]
    EmptyInput,
    /// A character outside the expression alphabet.
    #[error("Error at position {offset}: Invalid character '{character}'.")]
    DisallowedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// A `-` used as a sign rather than as subtraction.
    #[error("Error at position {offset}: Negative numbers are not supported.")]
    NegativeNumber {
        /// Byte offset of the `-`.
        offset: usize,
    },
    /// Parentheses do not pair up.
    #[error("Error at position {offset}: Unbalanced parentheses.")]
    UnbalancedParentheses {
        /// Byte offset of the unmatched parenthesis.
        offset: usize,
    },
}
