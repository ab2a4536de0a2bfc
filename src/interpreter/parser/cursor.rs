use crate::{error::ParseError, interpreter::lexer::{Token, tokenize}};

/// Read position into the tokens of one input.
///
/// The cursor owns the token list of the source it was created from and a
/// position into it. The position only ever moves forward and always stays
/// within `[0, len]`, where `len` is the number of tokens; at `len` the
/// cursor is at end of input.
///
/// # Examples
/// ```
/// use reckon::interpreter::{lexer::Token, parser::cursor::Cursor};
///
/// let mut cursor = Cursor::new("1 + 2").unwrap();
/// assert_eq!(cursor.peek(), Some(Token::Integer("1")));
/// cursor.advance();
/// assert_eq!(cursor.offset(), 2);
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.is_at_end());
/// assert_eq!(cursor.offset(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    source:   &'s str,
    tokens:   Vec<(Token<'s>, usize)>,
    position: usize,
}

impl<'s> Cursor<'s> {
    /// Tokenizes `source` and positions the cursor on its first token.
    ///
    /// # Errors
    /// Returns the lexer's error if the source holds a character that starts
    /// no token.
    pub fn new(source: &'s str) -> Result<Self, ParseError> {
        Ok(Self { source,
                  tokens: tokenize(source)?,
                  position: 0 })
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Token<'s>> {
        self.tokens.get(self.position).map(|(token, _)| *token)
    }

    /// Consumes the current token and returns it with its byte offset.
    ///
    /// At end of input nothing is consumed and `None` is returned.
    pub fn advance(&mut self) -> Option<(Token<'s>, usize)> {
        let entry = self.tokens.get(self.position).copied()?;
        self.position += 1;
        Some(entry)
    }

    /// Consumes the current token if `accept` returns a value for it.
    pub fn advance_if<T>(&mut self, accept: impl Fn(Token<'s>) -> Option<T>) -> Option<(T, usize)> {
        let (token, offset) = self.tokens.get(self.position).copied()?;
        let value = accept(token)?;
        self.position += 1;
        Some((value, offset))
    }

    /// Byte offset of the current token, or the source length at end of input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.source.len(), |(_, offset)| *offset)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Describes the current token for error messages.
    #[must_use]
    pub fn describe_current(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), |token| token.to_string())
    }
}
