use crate::{error::ScreenError, interpreter::value::NumericMode};

/// Longest accepted input, in bytes.
pub const MAX_INPUT_LEN: usize = 1024;

/// Checks raw input before it is handed to the parser.
///
/// The checks run in this order, and the first failure is reported:
/// 1. the input is at most [`MAX_INPUT_LEN`] bytes and not blank,
/// 2. every character is a digit, `(`, `)`, `+`, `-`, `*`, `/`, whitespace,
///    or, in floating-point mode, `.`,
/// 3. no `-` stands where an operand is expected (at the start, after `(`
///    or after another operator), since negative numbers are not supported,
/// 4. parentheses pair up.
///
/// # Errors
/// Returns the [`ScreenError`] of the first failed check.
///
/// # Examples
/// ```
/// use reckon::{error::ScreenError, interpreter::{screen::screen, value::NumericMode}};
///
/// assert!(screen("(2 + 3) - 4", NumericMode::Integer).is_ok());
/// assert_eq!(screen("2 * -3", NumericMode::Integer),
///            Err(ScreenError::NegativeNumber { offset: 4 }));
/// assert_eq!(screen("2.5", NumericMode::Integer),
///            Err(ScreenError::DisallowedCharacter { character: '.',
///                                                   offset:    1 }));
/// ```
pub fn screen(input: &str, mode: NumericMode) -> Result<(), ScreenError> {
    if input.len() > MAX_INPUT_LEN {
        return Err(ScreenError::InputTooLong { length: input.len(),
                                               max:    MAX_INPUT_LEN, });
    }
    if input.chars().all(is_space) {
        return Err(ScreenError::EmptyInput);
    }

    check_alphabet(input, mode)?;
    check_unary_minus(input)?;
    check_parentheses(input)
}

/// Whitespace as the C locale's `isspace` sees it, vertical tab included.
const fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn is_allowed(c: char, mode: NumericMode) -> bool {
    c.is_ascii_digit()
    || matches!(c, '(' | ')' | '+' | '-' | '*' | '/')
    || is_space(c)
    || (c == '.' && mode == NumericMode::Float)
}

fn check_alphabet(input: &str, mode: NumericMode) -> Result<(), ScreenError> {
    match input.char_indices().find(|&(_, c)| !is_allowed(c, mode)) {
        Some((offset, character)) => {
            Err(ScreenError::DisallowedCharacter { character, offset })
        },
        None => Ok(()),
    }
}

/// A `-` is unary when the last significant character before it cannot end
/// an operand.
fn check_unary_minus(input: &str) -> Result<(), ScreenError> {
    let mut previous: Option<char> = None;

    for (offset, c) in input.char_indices() {
        if is_space(c) {
            continue;
        }
        let ends_operand = previous.is_some_and(|p| p.is_ascii_digit() || p == '.' || p == ')');
        if c == '-' && !ends_operand {
            return Err(ScreenError::NegativeNumber { offset });
        }
        previous = Some(c);
    }

    Ok(())
}

fn check_parentheses(input: &str) -> Result<(), ScreenError> {
    let mut open = Vec::new();

    for (offset, c) in input.char_indices() {
        match c {
            '(' => open.push(offset),
            ')' => {
                if open.pop().is_none() {
                    return Err(ScreenError::UnbalancedParentheses { offset });
                }
            },
            _ => {},
        }
    }

    match open.last() {
        Some(&offset) => Err(ScreenError::UnbalancedParentheses { offset }),
        None => Ok(()),
    }
}
