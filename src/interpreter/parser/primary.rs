use crate::{
    ast::{Expr, LiteralValue},
    config::Options,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_expression, core::ParseResult, cursor::Cursor},
        value::NumericMode,
    },
    util::num::{parse_integer_literal, parse_real_literal},
};

/// Parses a factor: a parenthesized expression or a number.
///
/// A `(` starts a nested expression which is parsed recursively; nesting
/// depth is bounded only by the input. In strict mode the nested expression
/// must be followed by `)`. In lenient mode the token after it is consumed
/// without being looked at, whatever it is.
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | number
/// ```
/// # Parameters
/// - `cursor`: Read position into the token list.
/// - `options`: Numeric mode and strictness.
///
/// # Returns
/// The inner expression, or the literal produced by [`parse_number`].
///
/// # Errors
/// - `UnmatchedParenthesis` if `)` is missing in strict mode.
/// - Propagates any errors from the nested expression or number.
pub fn parse_factor(cursor: &mut Cursor<'_>, options: Options) -> ParseResult<Expr> {
    if cursor.peek() != Some(Token::LParen) {
        return parse_number(cursor, options);
    }

    let opening = cursor.offset();
    cursor.advance();
    tracing::trace!(offset = opening, "entering parenthesized expression");

    let expr = parse_expression(cursor, options)?;

    if options.is_lenient() {
        cursor.advance();
        return Ok(expr);
    }

    match cursor.peek() {
        Some(Token::RParen) => {
            cursor.advance();
            Ok(expr)
        },
        _ => Err(ParseError::UnmatchedParenthesis { found:  cursor.describe_current(),
                                                    offset: opening, }),
    }
}

/// Parses a numeric literal.
///
/// In integer mode only digit runs are accepted and they must fit an `i64`.
/// In floating-point mode both digit runs and decimals are parsed as `f64`.
///
/// Grammar: `number := digit+ ("." digit+)?`
///
/// # Parameters
/// - `cursor`: Read position into the token list.
/// - `options`: Selects the numeric mode.
///
/// # Returns
/// An `Expr::Literal`.
///
/// # Errors
/// - `MalformedNumber` if the cursor is not on a literal.
/// - `UnexpectedDecimal` for a decimal literal in integer mode.
/// - `LiteralTooLarge` if an integer literal overflows.
pub fn parse_number(cursor: &mut Cursor<'_>, options: Options) -> ParseResult<Expr> {
    let offset = cursor.offset();

    let value = match (cursor.peek(), options.mode) {
        (Some(Token::Integer(digits)), NumericMode::Integer) => {
            LiteralValue::Integer(parse_integer_literal(digits, offset)?)
        },
        (Some(Token::Decimal(literal)), NumericMode::Integer) => {
            return Err(ParseError::UnexpectedDecimal { literal: literal.to_string(),
                                                       offset });
        },
        (Some(Token::Integer(digits) | Token::Decimal(digits)), NumericMode::Float) => {
            LiteralValue::Real(parse_real_literal(digits, offset)?)
        },
        _ => {
            return Err(ParseError::MalformedNumber { found: cursor.describe_current(),
                                                     offset });
        },
    };

    cursor.advance();
    Ok(Expr::Literal { value, offset })
}
