use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::core::{Operands, type_mismatch},
            core::{Context, EvalResult},
        },
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair: numbers compare numerically, strings
    /// by content, and values of different kinds are never equal. The
    /// ordering operators need two numbers or two strings; strings order
    /// lexicographically. Any comparison involving NaN is false, except `!=`.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use nscharp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(3.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &Value::from("x"), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Str(_), _) | (_, Value::Str(_)) => {
                return match op {
                    BinaryOperator::Equal => Ok(Value::Bool(false)),
                    BinaryOperator::NotEqual => Ok(Value::Bool(true)),
                    _ => Err(type_mismatch(op, left, right, line)),
                };
            },
            _ => match Operands::promote(op, left, right, line)? {
                Operands::Integers(a, b) => Some(a.cmp(&b)),
                Operands::Reals(a, b) => a.partial_cmp(&b),
            },
        };

        Ok(Value::Bool(match ordering {
                           Some(ordering) => holds(op, ordering),
                           // NaN is unequal to everything, itself included.
                           None => op == BinaryOperator::NotEqual,
                       }))
    }
}

impl Context<'_> {
    /// Evaluates a comparison chain such as `a < b <= c`.
    ///
    /// The chain holds when every adjacent pair holds. Operands are evaluated
    /// left to right, each at most once, and evaluation stops at the first
    /// pair that fails, so later operands (and any `input` in them) are
    /// skipped.
    ///
    /// # Errors
    /// Any error from evaluating an operand or comparing a pair.
    pub fn eval_comparison_chain(&mut self,
                                 first: &Expr,
                                 rest: &[(BinaryOperator, Expr)],
                                 line: usize)
                                 -> EvalResult<Value> {
        let mut left = self.eval(first)?;

        for (op, operand) in rest {
            let right = self.eval(operand)?;
            if !Self::eval_comparison(*op, &left, &right, line)?.is_truthy() {
                return Ok(Value::Bool(false));
            }
            left = right;
        }

        Ok(Value::Bool(true))
    }
}

/// Whether `op` is satisfied by operands that compare as `ordering`.
const fn holds(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Equal => ordering.is_eq(),
        BinaryOperator::NotEqual => ordering.is_ne(),
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        _ => false,
    }
}
