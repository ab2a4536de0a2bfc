use crate::{
    ast::{ChainLink, Expr},
    error::RuntimeError,
    interpreter::value::{NumericMode, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Divisors whose magnitude is below this are rejected in floating-point mode.
pub const NEAR_ZERO_DIVISOR: f64 = 1e-10;

/// Stores the evaluation context.
///
/// The context only records the numeric mode of the run. It holds no state
/// between calls, so evaluating the same tree twice yields the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Mode the tree was parsed in.
    pub mode: NumericMode,
}

impl Context {
    #[must_use]
    pub const fn new(mode: NumericMode) -> Self {
        Self { mode }
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// Operands are evaluated left before right, so the first error in
    /// reading order is the one reported. A chain is folded in a loop; only
    /// parenthesized subexpressions make the evaluator recurse.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     Options,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         parser::core::parse,
    ///         value::{NumericMode, Value},
    ///     },
    /// };
    ///
    /// let expr = parse("100 / 5 / 2", Options::default()).unwrap();
    /// let context = Context::new(NumericMode::Integer);
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(10));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok((*value).into()),
            Expr::Chain { first, rest } => {
                let mut result = self.eval(first)?;
                for ChainLink { op, operand, offset } in rest {
                    let right = self.eval(operand)?;
                    result = self.eval_binary(*op, result, right, *offset)?;
                }
                Ok(result)
            },
        }
    }
}
