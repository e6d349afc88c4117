use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::Operands,
            core::{Context, EvalResult},
        },
        value::Value,
    },
    util::num::i64_to_f64,
};

impl Context<'_> {
    /// Evaluates `+ - * / // %` on numeric operands.
    ///
    /// Integer results are checked for overflow. `/` always yields a real.
    /// `//` rounds toward negative infinity and `%` takes the sign of the
    /// divisor, so `a == (a // b) * b + a % b` holds for integers.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor of `/`, `//` or `%`.
    /// - `Overflow` if an integer result does not fit an `i64`.
    /// - `TypeError` for non-numeric operands.
    ///
    /// # Example
    /// ```
    /// use nscharp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::FloorDiv,
    ///                                  &Value::Integer(-7),
    ///                                  &Value::Integer(2),
    ///                                  1).unwrap();
    /// assert_eq!(v, Value::Integer(-4));
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Mod,
    ///                                  &Value::Integer(-7),
    ///                                  &Value::Integer(2),
    ///                                  1).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match Operands::promote(op, left, right, line)? {
            Operands::Integers(a, b) => integer_arithmetic(op, a, b, line),
            Operands::Reals(a, b) => real_arithmetic(op, a, b, line).map(Value::Real),
        }
    }
}

fn integer_arithmetic(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    let overflow = RuntimeError::Overflow { line };

    if b == 0 && matches!(op, BinaryOperator::Div | BinaryOperator::FloorDiv | BinaryOperator::Mod) {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => return Ok(Value::Real(i64_to_f64(a) / i64_to_f64(b))),
        BinaryOperator::FloorDiv => {
            a.checked_div(b)
             .map(|q| if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q })
        },
        BinaryOperator::Mod => {
            let r = a.wrapping_rem(b);
            Some(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        },
        _ => return Err(not_arithmetic(op, line)),
    };

    result.map(Value::Integer).ok_or(overflow)
}

fn real_arithmetic(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<f64> {
    if b == 0.0 && matches!(op, BinaryOperator::Div | BinaryOperator::FloorDiv | BinaryOperator::Mod) {
        return Err(RuntimeError::DivisionByZero { line });
    }

    match op {
        BinaryOperator::Add => Ok(a + b),
        BinaryOperator::Sub => Ok(a - b),
        BinaryOperator::Mul => Ok(a * b),
        BinaryOperator::Div => Ok(a / b),
        BinaryOperator::FloorDiv => Ok((a / b).floor()),
        BinaryOperator::Mod => {
            let r = a % b;
            Ok(if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r })
        },
        _ => Err(not_arithmetic(op, line)),
    }
}

fn not_arithmetic(op: BinaryOperator, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                              line }
}
