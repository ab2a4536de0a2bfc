use std::fmt;

/// Represents a literal value in an expression.
///
/// Literals are never negative: the grammar has no unary minus. Which variant
/// is produced depends on the numeric mode the parser runs in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal (integer mode).
    Integer(i64),
    /// A 64-bit floating-point literal (floating-point mode).
    Real(f64),
}

/// A node of the expression tree.
///
/// A run of operators of one precedence level is stored flat, in reading
/// order: `a - b - c` is `Chain { first: a, rest: [(-, b), (-, c)] }` and
/// is applied left to right. Only parentheses nest chains inside chains,
/// so the depth of the tree is bounded by the parenthesis nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// A left-associative chain of binary operations of equal precedence.
    Chain {
        /// Leftmost operand.
        first: Box<Self>,
        /// Operators and right operands, applied in order. Never empty.
        rest:  Vec<ChainLink>,
    },
}

/// One `op operand` step of a [`Expr::Chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChainLink {
    /// The operator.
    pub op:      BinaryOperator,
    /// Right operand.
    pub operand: Expr,
    /// Byte offset of the operator in the source.
    pub offset:  usize,
}

impl Expr {
    /// Byte offset of the node: the literal itself or the first operator of
    /// a chain.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. } => *offset,
            Self::Chain { first, rest } => rest.first().map_or_else(|| first.offset(), |link| link.offset),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesized, which makes grouping visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value: LiteralValue::Integer(n),
                            .. } => write!(f, "{n}"),
            Self::Literal { value: LiteralValue::Real(r),
                            .. } => write!(f, "{r}"),
            Self::Chain { first, rest } => {
                for _ in rest {
                    write!(f, "(")?;
                }
                write!(f, "{first}")?;
                for link in rest {
                    write!(f, " {} {})", link.op, link.operand)?;
                }
                Ok(())
            },
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the operators combined by the `Term` production.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Returns `true` for the operators combined by the `Expression`
    /// production.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
