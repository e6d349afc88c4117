use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global variables, the table
/// of declared functions, and the streams `input` reads from and `print`
/// writes to.
///
/// ## Usage
///
/// `Context` is created once per run and borrows its streams for that run.
/// All evaluation methods (like `eval()` and `exec()`) access this state to
/// resolve variables and perform I/O.
///
/// ```
/// use nscharp::{
///     interpreter::{evaluator::core::Context, value::Value},
///     parse, tokenize,
/// };
///
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut input, &mut output);
///
/// let statements = parse(&tokenize("let x = 6 * 7").unwrap()).unwrap();
/// context.run(&statements).unwrap();
///
/// assert_eq!(context.get_variable("x"), Some(&Value::Integer(42)));
/// ```
pub struct Context<'io> {
    /// Global variables. There are no nested scopes.
    pub variables: HashMap<String, Value>,
    /// Bodies of declared functions by name. Filled by `fun`, never called.
    pub functions: HashMap<String, Vec<Statement>>,
    pub(crate) input: &'io mut dyn BufRead,
    pub(crate) output: &'io mut dyn Write,
    loop_limit: Option<u64>,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with no variables and no declared
    /// functions. Loops are unbounded.
    #[must_use]
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               input,
               output,
               loop_limit: None }
    }

    /// Limits every `while` loop to at most `limit` iterations.
    ///
    /// A loop that wants to run more often fails with
    /// `RuntimeError::LoopLimitExceeded`.
    #[must_use]
    pub fn with_loop_limit(mut self, limit: u64) -> Self {
        self.loop_limit = Some(limit);
        self
    }

    /// The configured iteration limit, if any.
    #[must_use]
    pub const fn loop_limit(&self) -> Option<u64> {
        self.loop_limit
    }

    /// Retrieves the value of a variable by name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up the body of a declared function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&[Statement]> {
        self.functions.get(name).map(Vec::as_slice)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right before their operator is applied, so any
    /// `input` in the left operand reads first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Errors
    /// - `UndefinedVariable` for names that were never bound.
    /// - Any error of the operators or of reading input.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Input { line } => self.read_input(*line).map(Value::Str),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Comparison { first, rest, line } => self.eval_comparison_chain(first, rest, *line),
        }
    }

    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
