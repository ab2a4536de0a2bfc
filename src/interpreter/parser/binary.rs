use crate::{
    ast::{BinaryOperator, ChainLink, Expr},
    config::Options,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::Cursor, primary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Read position into the token list.
/// - `options`: Numeric mode and strictness, passed down to the factors.
///
/// # Returns
/// The single term, or an `Expr::Chain` of terms.
pub fn parse_expression(cursor: &mut Cursor<'_>, options: Options) -> ParseResult<Expr> {
    parse_chain(cursor, options, BinaryOperator::is_additive, parse_term)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`, so `a / b / c` is the
/// chain `a, (/ b), (/ c)` applied as `(a / b) / c`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `cursor`: Read position into the token list.
/// - `options`: Numeric mode and strictness.
///
/// # Returns
/// The single factor, or an `Expr::Chain` of factors.
pub fn parse_term(cursor: &mut Cursor<'_>, options: Options) -> ParseResult<Expr> {
    parse_chain(cursor, options, BinaryOperator::is_multiplicative, parse_factor)
}

/// Collects `operand (op operand)*` into a flat chain.
///
/// Operands are gathered in a loop, so only a nested `(` makes the parser
/// recurse.
fn parse_chain(cursor: &mut Cursor<'_>,
               options: Options,
               accepts: fn(BinaryOperator) -> bool,
               parse_operand: fn(&mut Cursor<'_>, Options) -> ParseResult<Expr>)
               -> ParseResult<Expr> {
    let first = parse_operand(cursor, options)?;
    let mut rest = Vec::new();

    while let Some((op, offset)) =
        cursor.advance_if(|token| token_to_binary_operator(token).filter(|op| accepts(*op)))
    {
        let operand = parse_operand(cursor, options)?;
        rest.push(ChainLink { op, operand, offset });
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::Chain { first: Box::new(first),
                     rest })
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
