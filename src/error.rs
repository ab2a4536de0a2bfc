/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include malformed literals, unmatched
/// parentheses, and input left over after the expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or arithmetic overflow.
pub mod runtime_error;
/// Screening errors.
///
/// Errors raised while checking the raw input before it reaches the parser:
/// disallowed characters, unary minus, and unbalanced parentheses.
pub mod screen_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use screen_error::ScreenError;

/// Any error produced while turning an input string into a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raw input was rejected before parsing.
    #[error(transparent)]
    Screen(#[from] ScreenError),
    /// The input does not follow the expression grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
