use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Largest accepted magnitude of a final result.
pub const RESULT_LIMIT: i64 = 2_000_000_000;

/// Converts a run of decimal digits into an `i64`.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the digits do not fit an `i64`,
/// and `ParseError::MalformedNumber` if they are not digits at all.
///
/// ## Parameters
/// - `digits`: The literal as written.
/// - `offset`: Byte offset of the literal, for error reporting.
///
/// ## Example
/// ```
/// use reckon::{error::ParseError, util::num::parse_integer_literal};
///
/// assert_eq!(parse_integer_literal("0042", 0).unwrap(), 42);
///
/// let err = parse_integer_literal("99999999999999999999", 7).unwrap_err();
/// assert!(matches!(err, ParseError::LiteralTooLarge { offset: 7 }));
/// ```
pub fn parse_integer_literal(digits: &str, offset: usize) -> Result<i64, ParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedNumber { found: format!("'{digits}'"),
                                                 offset });
    }
    digits.parse()
          .map_err(|_| ParseError::LiteralTooLarge { offset })
}

/// Converts an integer or decimal literal into an `f64`.
///
/// ## Errors
/// Returns `ParseError::MalformedNumber` if the literal is not a number.
///
/// ## Parameters
/// - `literal`: The literal as written, such as `2.5` or `7`.
/// - `offset`: Byte offset of the literal, for error reporting.
pub fn parse_real_literal(literal: &str, offset: usize) -> Result<f64, ParseError> {
    literal.parse()
           .map_err(|_| ParseError::MalformedNumber { found: format!("'{literal}'"),
                                                      offset })
}

/// Checks that a final result lies within `[-RESULT_LIMIT, RESULT_LIMIT]`.
///
/// ## Errors
/// Returns `RuntimeError::ResultOutOfRange` otherwise.
///
/// ## Example
/// ```
/// use reckon::{interpreter::value::Value, util::num::ensure_within_limit};
///
/// assert!(ensure_within_limit(Value::Integer(2_000_000_000)).is_ok());
/// assert!(ensure_within_limit(Value::Integer(-2_000_000_001)).is_err());
/// assert!(ensure_within_limit(Value::Real(2_000_000_000.5)).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn ensure_within_limit(value: Value) -> EvalResult<Value> {
    let within = match value {
        Value::Integer(n) => n.unsigned_abs() <= RESULT_LIMIT.unsigned_abs(),
        Value::Real(r) => r.abs() <= RESULT_LIMIT as f64,
    };

    if within {
        Ok(value)
    } else {
        Err(RuntimeError::ResultOutOfRange { value: value.to_string() })
    }
}
