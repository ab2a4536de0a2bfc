/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Error at position {offset}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// A number was expected but something else, or nothing, was found.
    #[error("Error at position {offset}: Expected a number, found {found}.")]
    MalformedNumber {
        /// Description of what was found instead.
        found:  String,
        /// Byte offset where the number was expected.
        offset: usize,
    },
    /// A decimal literal appeared while evaluating in integer mode.
    #[error("Error at position {offset}: Decimal literal {literal} is not allowed in integer mode.")]
    UnexpectedDecimal {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// An integer literal does not fit the integer type.
    #[error("Error at position {offset}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset of the literal.
        offset: usize,
    },
    /// A `(` was not followed by a matching `)`.
    #[error("Error at position {offset}: Unmatched parenthesis, expected ')' but found {found}.")]
    UnmatchedParenthesis {
        /// Description of the token found where `)` was expected.
        found:  String,
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// Tokens remain after the expression was parsed.
    #[error("Error at position {offset}: Extra input after expression: {token}")]
    TrailingInput {
        /// The first unconsumed token.
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the source the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::UnexpectedDecimal { offset, .. }
            | Self::LiteralTooLarge { offset }
            | Self::UnmatchedParenthesis { offset, .. }
            | Self::TrailingInput { offset, .. } => *offset,
        }
    }
}
