use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'s> {
    /// Decimal literal tokens, such as `3.14` or `2.0`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal(&'s str),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer(&'s str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, vertical tabs, feeds and line breaks.
    #[regex(r"[ \t\x0B\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal(s) | Self::Integer(s) => write!(f, "'{s}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Splits the source into tokens tagged with their byte offset.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for the first character that
/// starts no token, for example a letter or a lone `.`.
///
/// # Examples
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 * (3.5)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer("12"), 0),
///                 (Token::Star, 3),
///                 (Token::LParen, 5),
///                 (Token::Decimal("3.5"), 6),
///                 (Token::RParen, 9)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token<'_>, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, offset));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter { character, offset });
        }
    }

    Ok(tokens)
}
