use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::repeat_count,
};

/// Numeric operands after promotion to a common type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both sides are integers (booleans count as `0` or `1`).
    Integers(i64, i64),
    /// At least one side is real; both have been converted.
    Reals(f64, f64),
}

impl Operands {
    /// Promotes two numeric values to a common type.
    ///
    /// Integers stay integers unless the other side is real, in which case
    /// both become reals. Integers beyond `2^53` round to the nearest real.
    ///
    /// # Errors
    /// `TypeError` if either side is a string.
    pub fn promote(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Self> {
        if !left.is_numeric() || !right.is_numeric() {
            return Err(type_mismatch(op, left, right, line));
        }

        match (left.as_integer_like(), right.as_integer_like()) {
            (Some(a), Some(b)) => Ok(Self::Integers(a, b)),
            _ => Ok(Self::Reals(left.as_real(line)?, right.as_real(line)?)),
        }
    }
}

/// Builds the error for an operator applied to unsupported operand kinds.
#[must_use]
pub fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot use '{op}' on {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// String operands are handled here: `+` concatenates two strings and `*`
    /// repeats a string by an integer count on either side. Everything else
    /// is routed to the numeric handlers, the power handler or the
    /// comparison handler.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use nscharp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Integer(3),
    ///                                   &Value::Integer(4),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul,
    ///                                   &Value::from("ab"),
    ///                                   &Value::Integer(3),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Pow, Sub,
        };

        match op {
            Add => match (left, right) {
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ => Self::eval_arithmetic(op, left, right, line),
            },
            Mul => match (left, right) {
                (Value::Str(s), count) | (count, Value::Str(s)) => match count.as_integer_like() {
                    Some(count) => repeat_string(s, count, line),
                    None => Err(type_mismatch(op, left, right, line)),
                },
                _ => Self::eval_arithmetic(op, left, right, line),
            },
            Sub | Div | FloorDiv | Mod => Self::eval_arithmetic(op, left, right, line),
            Pow => Self::eval_pow(left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }
}

/// Repeats `s` `count` times.
///
/// The result is reserved up front so an impossible size is reported as
/// `Overflow` instead of aborting on allocation failure.
fn repeat_string(s: &str, count: i64, line: usize) -> EvalResult<Value> {
    let count = repeat_count(count, line)?;
    if s.is_empty() {
        return Ok(Value::Str(String::new()));
    }

    let total = s.len()
                 .checked_mul(count)
                 .ok_or(RuntimeError::Overflow { line })?;

    let mut repeated = String::new();
    repeated.try_reserve_exact(total)
            .map_err(|_| RuntimeError::Overflow { line })?;
    for _ in 0..count {
        repeated.push_str(s);
    }

    Ok(Value::Str(repeated))
}
