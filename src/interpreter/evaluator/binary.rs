use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, NEAR_ZERO_DIVISOR},
        value::{NumericMode, Value},
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// In integer mode both operands must be integers; arithmetic is checked
    /// and `/` truncates toward zero. In floating-point mode integer operands
    /// are promoted to `f64`. The divisor is checked before dividing.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{NumericMode, Value},
    ///     },
    /// };
    ///
    /// let context = Context::new(NumericMode::Integer);
    /// let result = context.eval_binary(BinaryOperator::Sub,
    ///                                  Value::Integer(3),
    ///                                  Value::Integer(4),
    ///                                  0);
    /// assert_eq!(result.unwrap(), Value::Integer(-1));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: Value,
                       right: Value,
                       offset: usize)
                       -> EvalResult<Value> {
        match (self.mode, left, right) {
            (NumericMode::Integer, Value::Integer(a), Value::Integer(b)) => {
                Self::eval_integer_op(op, a, b, offset)
            },
            _ => Self::eval_real_op(op, left.as_f64(), right.as_f64(), offset),
        }
    }

    /// Evaluates an integer operation with overflow checks.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `b` is zero.
    /// - `Overflow` if the result does not fit an `i64`.
    pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, offset: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { offset });
                }
                a.checked_div(b)
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { offset })
    }

    /// Evaluates a floating-point operation.
    ///
    /// # Errors
    /// - `DivisionByNearZero` if `op` is `Div` and `|b|` is below
    ///   [`NEAR_ZERO_DIVISOR`].
    /// - `Overflow` if the result is not finite.
    pub fn eval_real_op(op: BinaryOperator, a: f64, b: f64, offset: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => {
                if b.abs() < NEAR_ZERO_DIVISOR {
                    return Err(RuntimeError::DivisionByNearZero { divisor: b,
                                                                  offset });
                }
                a / b
            },
        };

        if !result.is_finite() {
            return Err(RuntimeError::Overflow { offset });
        }
        Ok(Value::Real(result))
    }
}
