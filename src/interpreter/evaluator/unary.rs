use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Booleans negate as `0` or `1`.
    /// - `Plus`: numeric identity. Booleans become integers.
    ///
    /// Strings are rejected by both.
    ///
    /// # Example
    /// ```
    /// use nscharp::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, &Value::Bool(true), 1).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        let n = match value {
            Value::Str(_) => {
                return Err(RuntimeError::TypeError { details: format!("Cannot apply unary {op} to {}",
                                                                      value.type_name()),
                                                     line });
            },
            Value::Real(r) => {
                return Ok(Value::Real(match op {
                                          UnaryOperator::Negate => -r,
                                          UnaryOperator::Plus => *r,
                                      }));
            },
            Value::Integer(n) => *n,
            Value::Bool(b) => i64::from(*b),
        };

        match op {
            UnaryOperator::Negate => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
            UnaryOperator::Plus => Ok(Value::Integer(n)),
        }
    }
}
