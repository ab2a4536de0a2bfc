use pretty_assertions::assert_eq;
use reckon::{
    NumericMode, Options, Strictness, calculate,
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, parser::core::parse, value::Value},
};

fn int(src: &str) -> i64 {
    match evaluate(src, Options::default()) {
        Ok(Value::Integer(n)) => n,
        Ok(other) => panic!("Expression {src:?} produced a non-integer {other:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn real(src: &str) -> f64 {
    match evaluate(src, Options::float()) {
        Ok(Value::Real(r)) => r,
        Ok(other) => panic!("Expression {src:?} produced a non-real {other:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn lenient() -> Options {
    Options::default().with_strictness(Strictness::Lenient)
}

fn parse_error(src: &str, options: Options) -> ParseError {
    match evaluate(src, options) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

fn runtime_error(src: &str, options: Options) -> RuntimeError {
    match evaluate(src, options) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error for {src:?}, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(int("2 + 3"), 5);
    assert_eq!(int("5 - 2"), 3);
    assert_eq!(int("7 * 9"), 63);
    assert_eq!(int("10 / 2"), 5);
    assert_eq!(int("42"), 42);
}

#[test]
fn integer_division_truncates() {
    assert_eq!(int("7 / 2"), 3);
    assert_eq!(int("1 / 3"), 0);
    assert_eq!(int("(1 - 8) / 2"), -3);
}

#[test]
fn subtraction_may_go_negative() {
    assert_eq!(int("100 - 101"), -1);
    assert_eq!(int("0 - 5 * 2"), -10);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(int("2 + 3 * 4"), 14);
    assert_eq!(int("2 * 3 + 4"), 10);
    assert_eq!(int("10 - 6 / 2"), 7);
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(int("20 - 5 - 3"), 12);
    assert_eq!(int("100 / 5 / 2"), 10);
    assert_eq!(int("8 / 4 * 2"), 4);
    assert_eq!(int("1 - 2 + 3"), 2);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(int("(2 + 3) * 4"), 20);
    assert_eq!(int("((1 + 2) * (3 + 4))"), 21);
    assert_eq!(int("20 - (5 - 3)"), 18);
    assert_eq!(int("(((((7)))))"), 7);
}

#[test]
fn whitespace_is_optional_between_tokens() {
    assert_eq!(int("2+3*4"), 14);
    assert_eq!(int("  ( 2+3 )\t*4  "), 20);
}

#[test]
fn parse_builds_left_leaning_tree() {
    let expr = parse("1 - 2 - 3 * 4 / 5", Options::default()).unwrap();
    assert_eq!(expr.to_string(), "((1 - 2) - ((3 * 4) / 5))");
}

#[test]
fn evaluation_is_repeatable() {
    let src = "(17 + 4) * 3 - 8 / 2";
    let first = evaluate(src, Options::default()).unwrap();
    for _ in 0..5 {
        assert_eq!(evaluate(src, Options::default()).unwrap(), first);
    }

    let expr = parse(src, Options::default()).unwrap();
    let context = Context::new(NumericMode::Integer);
    assert_eq!(context.eval(&expr).unwrap(), context.eval(&expr).unwrap());
}

#[test]
fn float_mode_arithmetic() {
    assert!((real("2.5 + 3.7") - 6.2).abs() < 1e-9);
    assert!((real("7 / 2") - 3.5).abs() < 1e-12);
    assert!((real("(1.5 + 0.5) * 2.25") - 4.5).abs() < 1e-12);
    assert!((real("100.5 - 101.5") + 1.0).abs() < 1e-12);
}

#[test]
fn float_results_have_four_fractional_digits() {
    assert_eq!(evaluate("2.5 + 3.7", Options::float()).unwrap().to_string(), "6.2000");
    assert_eq!(evaluate("1 / 3", Options::float()).unwrap().to_string(), "0.3333");
    assert_eq!(evaluate("2000000.0 * 1000.0", Options::float()).unwrap().to_string(),
               "2000000000.0000");
}

#[test]
fn integer_division_by_zero_is_error() {
    assert_eq!(runtime_error("1 / 0", Options::default()),
               RuntimeError::DivisionByZero { offset: 2 });
    assert!(matches!(runtime_error("5 / (3 - 3)", Options::default()),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn float_division_by_near_zero_is_error() {
    assert!(matches!(runtime_error("1 / 0.00000000001", Options::float()),
                     RuntimeError::DivisionByNearZero { .. }));
    assert!(matches!(runtime_error("1 / 0", Options::float()),
                     RuntimeError::DivisionByNearZero { .. }));
    assert!(matches!(runtime_error("1 / (1 - 1.0)", Options::float()),
                     RuntimeError::DivisionByNearZero { .. }));
    assert!(evaluate("1 / 0.001", Options::float()).is_ok());
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(runtime_error("9223372036854775807 + 1", Options::default()),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("4294967296 * 4294967296", Options::default()),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn oversized_literal_is_error() {
    assert_eq!(parse_error("1 + 99999999999999999999", Options::default()),
               ParseError::LiteralTooLarge { offset: 4 });
}

#[test]
fn decimal_rejected_in_integer_mode() {
    assert_eq!(parse_error("2.5 + 1", Options::default()),
               ParseError::UnexpectedDecimal { literal: "2.5".to_string(),
                                               offset:  0, });
}

#[test]
fn missing_operand_is_malformed_number() {
    assert!(matches!(parse_error("", Options::default()),
                     ParseError::MalformedNumber { offset: 0, .. }));
    assert!(matches!(parse_error("2 +", Options::default()),
                     ParseError::MalformedNumber { offset: 3, .. }));
    assert!(matches!(parse_error("2 * * 3", Options::default()),
                     ParseError::MalformedNumber { offset: 4, .. }));
    assert!(matches!(parse_error("()", Options::default()),
                     ParseError::MalformedNumber { offset: 1, .. }));
}

#[test]
fn unexpected_character_is_error() {
    assert_eq!(parse_error("2 + a", Options::default()),
               ParseError::UnexpectedCharacter { character: 'a',
                                                 offset:    4, });
    assert!(matches!(parse_error("2. + 1", Options::float()),
                     ParseError::UnexpectedCharacter { character: '.', .. }));
}

#[test]
fn strict_mode_requires_closing_parenthesis() {
    assert_eq!(parse_error("(2 + 3", Options::default()),
               ParseError::UnmatchedParenthesis { found:  "end of input".to_string(),
                                                  offset: 0, });
    assert!(matches!(parse_error("2 * (3 + (4 5", Options::default()),
                     ParseError::UnmatchedParenthesis { offset: 9, .. }));
}

#[test]
fn strict_mode_rejects_trailing_input() {
    assert_eq!(parse_error("2 + 3)", Options::default()),
               ParseError::TrailingInput { token:  "')'".to_string(),
                                           offset: 5, });
    assert!(matches!(parse_error("1 2", Options::default()),
                     ParseError::TrailingInput { offset: 2, .. }));
}

#[test]
fn lenient_mode_skips_closing_token_unchecked() {
    assert_eq!(evaluate("(2 + 3", lenient()).unwrap(), Value::Integer(5));
    // The token after the inner expression is dropped whatever it is.
    assert_eq!(evaluate("(2 + 3 * 4", lenient()).unwrap(), Value::Integer(14));
    assert_eq!(evaluate("(2 + 3 4 * 10", lenient()).unwrap(), Value::Integer(50));
    assert_eq!(evaluate("(2 + 3 4) * 10", lenient()).unwrap(), Value::Integer(5));
}

#[test]
fn lenient_mode_ignores_trailing_input() {
    assert_eq!(evaluate("2 + 3)", lenient()).unwrap(), Value::Integer(5));
    assert_eq!(evaluate("1 2 3", lenient()).unwrap(), Value::Integer(1));
}

#[test]
fn lenient_mode_still_requires_numbers() {
    assert!(matches!(evaluate("2 +", lenient()),
                     Err(Error::Parse(ParseError::MalformedNumber { .. }))));
}

#[test]
fn calculate_formats_and_limits_results() {
    assert_eq!(calculate("2000000 * 1000", Options::default()).unwrap(), "2000000000");
    assert_eq!(calculate("2000000000 / 2", Options::default()).unwrap(), "1000000000");
    assert_eq!(calculate("5.5 - 2.3", Options::float()).unwrap(), "3.2000");

    assert!(matches!(calculate("2000000000 + 1000000000", Options::default()),
                     Err(Error::Runtime(RuntimeError::ResultOutOfRange { .. }))));
    assert!(matches!(calculate("2000000000.5 + 1", Options::float()),
                     Err(Error::Runtime(RuntimeError::ResultOutOfRange { .. }))));
}

#[test]
fn error_messages_mention_position() {
    let err = evaluate("6 / 0", Options::default()).unwrap_err();
    assert_eq!(err.to_string(), "Error at position 2: Division by zero.");
}

#[test]
fn errors_and_nodes_report_offsets() {
    assert_eq!(parse_error("(1 + 2) 3", Options::default()).offset(), 8);
    assert_eq!(parse_error("1 + x", Options::default()).offset(), 4);

    let expr = parse("10 * (2 - 1)", Options::default()).unwrap();
    assert_eq!(expr.offset(), 3);
}

#[test]
fn long_operator_chains_do_not_deepen_recursion() {
    let sum = format!("{}1", "1+".repeat(200_000));
    assert_eq!(evaluate(&sum, Options::default()).unwrap(), Value::Integer(200_001));

    let mixed = format!("{}1", "2*3-5+".repeat(100_000));
    assert_eq!(evaluate(&mixed, Options::default()).unwrap(), Value::Integer(100_001));

    let quotient = format!("1000000{}", "/1".repeat(150_000));
    assert_eq!(evaluate(&quotient, Options::float()).unwrap(), Value::Real(1_000_000.0));

    // Building and dropping the tree must not recurse per operator either.
    let expr = parse(&sum, Options::default()).unwrap();
    drop(expr);
}

#[test]
fn vertical_tab_separates_tokens() {
    assert_eq!(int("2\x0B+\x0B3"), 5);
    assert_eq!(calculate("4 *\x0B5", Options::default()).unwrap(), "20");
}
