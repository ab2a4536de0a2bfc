use std::fmt;

use crate::ast::LiteralValue;

/// Selects how literals are read and arithmetic is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericMode {
    /// Integer literals only; `/` truncates toward zero.
    #[default]
    Integer,
    /// Integer and decimal literals, evaluated in double precision.
    Float,
}

/// Represents the result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Returns the value as `f64`, converting integers.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl fmt::Display for Value {
    /// Integers print as-is; reals always print four fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:.4}"),
        }
    }
}
