use crate::{
    ast::Expr,
    config::Options,
    error::ParseError,
    interpreter::parser::{binary::parse_expression, cursor::Cursor},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete source string into an expression tree.
///
/// This is the entry point for parsing. A fresh [`Cursor`] is created over
/// the source and the `Expression` production is invoked once. In strict mode
/// the whole input must be consumed; in lenient mode anything left after the
/// expression is ignored.
///
/// Grammar: `input := expression`
///
/// # Parameters
/// - `source`: The text to parse.
/// - `options`: Numeric mode and strictness.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `UnexpectedCharacter` if the source cannot be tokenized.
/// - `TrailingInput` if tokens remain in strict mode.
/// - Propagates any errors from the productions.
///
/// # Examples
/// ```
/// use reckon::{Options, interpreter::parser::core::parse};
///
/// let expr = parse("1 + 2 * 3", Options::default()).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(source: &str, options: Options) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(source)?;
    let expr = parse_expression(&mut cursor, options)?;

    if !cursor.is_at_end() {
        if options.is_lenient() {
            tracing::debug!(offset = cursor.offset(), "ignoring trailing input");
        } else {
            return Err(ParseError::TrailingInput { token:  cursor.describe_current(),
                                                   offset: cursor.offset(), });
        }
    }

    Ok(expr)
}
