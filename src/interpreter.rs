/// The evaluator module reduces an expression tree to a value.
///
/// The evaluator walks the tree produced by the parser and performs the
/// arithmetic in the numeric mode of the run.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// tagged with its byte offset. Whitespace between tokens is skipped.
///
/// # Responsibilities
/// - Converts the input into number, operator and parenthesis tokens.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Each grammar rule (`Expression`, `Term`, `Factor`, `Number`) is a function
/// that consumes tokens through a shared [`parser::cursor::Cursor`] and
/// returns the subtree it recognized.
///
/// # Responsibilities
/// - Implements precedence and left-associativity of the operators.
/// - Validates parentheses and leftover input according to the options.
pub mod parser;
/// Input screening performed before an expression reaches the parser.
///
/// Rejects inputs the grammar does not cover: characters outside the
/// alphabet, unary minus, unbalanced parentheses, and oversized input.
pub mod screen;
/// The value module defines numeric results and the numeric mode.
pub mod value;
