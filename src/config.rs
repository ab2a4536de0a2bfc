use crate::interpreter::value::NumericMode;

/// How forgiving the grammar is about parentheses and leftover input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// A `(` must be closed by `)` and the whole input must be consumed.
    #[default]
    Strict,
    /// The token closing a parenthesized expression is skipped without being
    /// checked, and input left after the top-level expression is ignored.
    Lenient,
}

/// Options selected once per evaluation.
///
/// # Examples
/// ```
/// use reckon::{NumericMode, Options, Strictness};
///
/// let options = Options::float().with_strictness(Strictness::Lenient);
/// assert_eq!(options.mode, NumericMode::Float);
/// assert!(options.is_lenient());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Whether literals and results are integers or doubles.
    pub mode:       NumericMode,
    /// Whether unmatched parentheses and trailing input are errors.
    pub strictness: Strictness,
}

impl Options {
    /// Strict floating-point options.
    #[must_use]
    pub const fn float() -> Self {
        Self { mode:       NumericMode::Float,
               strictness: Strictness::Strict, }
    }

    #[must_use]
    pub const fn with_mode(self, mode: NumericMode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub const fn with_strictness(self, strictness: Strictness) -> Self {
        Self { strictness, ..self }
    }

    #[must_use]
    pub const fn is_lenient(&self) -> bool {
        matches!(self.strictness, Strictness::Lenient)
    }
}
