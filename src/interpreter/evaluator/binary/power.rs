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
    util::num::{i64_to_f64, i64_to_u32_checked},
};

impl Context<'_> {
    /// Computes `base ** exponent`.
    ///
    /// An integer base with a non-negative integer exponent gives an exact,
    /// overflow-checked integer. Every other numeric combination gives a real.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `Overflow` if an integer power does not fit an `i64`.
    /// - `TypeError` for strings, or a negative real base with a fractional
    ///   exponent.
    ///
    /// # Example
    /// ```
    /// use nscharp::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let v = Context::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// assert_eq!(v, Value::Integer(1024));
    ///
    /// let v = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(v, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        match Operands::promote(BinaryOperator::Pow, base, exponent, line)? {
            Operands::Integers(base, exponent) if exponent >= 0 => {
                integer_pow(base, exponent, line).map(Value::Integer)
            },
            Operands::Integers(base, exponent) => {
                real_pow(i64_to_f64(base), i64_to_f64(exponent), line).map(Value::Real)
            },
            Operands::Reals(base, exponent) => real_pow(base, exponent, line).map(Value::Real),
        }
    }
}

fn integer_pow(base: i64, exponent: i64, line: usize) -> EvalResult<i64> {
    // Exponents past u32 only fit for these bases.
    match base {
        0 => return Ok(i64::from(exponent == 0)),
        1 => return Ok(1),
        -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {},
    }

    base.checked_pow(i64_to_u32_checked(exponent, line)?)
        .ok_or(RuntimeError::Overflow { line })
}

fn real_pow(base: f64, exponent: f64, line: usize) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(RuntimeError::TypeError { details: format!("{base} ** {exponent} has no real result"),
                                             line });
    }

    Ok(base.powf(exponent))
}
