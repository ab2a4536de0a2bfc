//! # reckon
//!
//! reckon is a recursive-descent evaluator for arithmetic expressions written
//! in Rust. It parses expressions made of non-negative integer or decimal
//! literals, the four binary operators `+ - * /` and parentheses, and computes
//! their value in either integer or floating-point mode.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    interpreter::{evaluator::core::Context, parser::core::parse, screen::screen, value::Value},
    util::num::ensure_within_limit,
};

/// Defines the expression tree built by the parser.
///
/// This module declares the `Expr` enum together with the literal and
/// operator types it is made of. The parser produces an `Expr` in a single
/// left-to-right pass over the input and the evaluator reduces it to a value.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Attaches byte offsets to nodes for error reporting.
pub mod ast;
/// Evaluation options.
///
/// Holds the numeric mode (integer or floating point) and the strictness of
/// the grammar, which callers select once per evaluation.
pub mod config;
/// Provides unified error types for screening, parsing, and evaluation.
///
/// This module defines all errors that can be raised while screening the raw
/// input, while lexing and parsing it, or while evaluating the resulting
/// expression. Every error carries the byte offset it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (screen, parser, evaluator).
/// - Unifies them in a single [`error::Error`] for callers.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and input screening.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser productions, and the evaluator.
/// - Provides entry points for each phase on its own.
pub mod interpreter;
/// General utilities for literal conversion and range checks.
pub mod util;

pub use crate::{
    config::{Options, Strictness},
    error::Error,
    interpreter::value::NumericMode,
};

/// Parses and evaluates an expression.
///
/// This is the evaluator core: the source is tokenized, parsed by the
/// `Expression`/`Term`/`Factor`/`Number` productions, and the resulting tree
/// is evaluated in the numeric mode selected by `options`. No screening and no
/// range check is performed; use [`calculate`] for the full front end.
///
/// # Errors
/// Returns an error if the source cannot be parsed or evaluation fails, for
/// example on division by zero.
///
/// # Examples
/// ```
/// use reckon::{Options, evaluate, interpreter::value::Value};
///
/// let value = evaluate("2 + 3 * 4", Options::default()).unwrap();
/// assert_eq!(value, Value::Integer(14));
///
/// // Division by zero is reported, never turned into a value.
/// assert!(evaluate("1 / 0", Options::default()).is_err());
/// ```
pub fn evaluate(source: &str, options: Options) -> Result<Value, Error> {
    let expr = parse(source, options)?;
    tracing::trace!(?expr, "parsed expression");

    let context = Context::new(options.mode);
    let value = context.eval(&expr)?;
    tracing::debug!(%value, "evaluated expression");

    Ok(value)
}

/// Screens, evaluates and formats an expression.
///
/// The input is first checked for disallowed characters, unary minus and
/// unbalanced parentheses, then evaluated with [`evaluate`]. The result must
/// lie within `[-2e9, +2e9]`; it is returned formatted as a plain integer in
/// integer mode and with four fractional digits in floating-point mode.
///
/// # Errors
/// Returns an error if screening, parsing or evaluation fails, or if the
/// result is out of range.
///
/// # Examples
/// ```
/// use reckon::{Options, calculate};
///
/// assert_eq!(calculate("100 - 101", Options::default()).unwrap(), "-1");
/// assert_eq!(calculate("2.5 + 3.7", Options::float()).unwrap(), "6.2000");
/// assert!(calculate("-5 + 3", Options::default()).is_err());
/// ```
pub fn calculate(input: &str, options: Options) -> Result<String, Error> {
    screen(input, options.mode)?;

    let value = evaluate(input, options)?;
    ensure_within_limit(value)?;

    Ok(value.to_string())
}
