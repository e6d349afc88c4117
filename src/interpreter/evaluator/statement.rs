use log::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Executes statements in order.
    ///
    /// Stops at the first error; statements before it have already taken
    /// effect (including any output they wrote).
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn run(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.exec(statement)?;
        }

        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Handles variable bindings, printing, function declarations,
    /// conditionals, loops and plain expression statements.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if evaluating an expression, writing output,
    /// or running a nested body fails.
    pub fn exec(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!("line {}: executing", statement.line_number());

        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                self.write_value(&value, *line)?;
            },
            Statement::Fun { name, body, line } => {
                debug!("line {line}: declared function '{name}' ({} statements)", body.len());
                self.functions.insert(name.clone(), body.clone());
            },
            Statement::If { condition, body, .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.run(body)?;
                }
            },
            Statement::IfElse { condition,
                                then_body,
                                else_body,
                                .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.run(then_body)?;
                } else {
                    self.run(else_body)?;
                }
            },
            Statement::While { condition,
                               body,
                               line, } => self.exec_while(condition, body, *line)?,
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
            },
        }

        Ok(())
    }

    /// Runs a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration. With a loop
    /// limit configured, starting one iteration more than the limit fails.
    ///
    /// # Errors
    /// - `LoopLimitExceeded` when the limit trips.
    /// - Any error of the condition or body.
    fn exec_while(&mut self, condition: &Expr, body: &[Statement], line: usize) -> EvalResult<()> {
        let mut iterations: u64 = 0;

        while self.eval(condition)?.is_truthy() {
            if let Some(limit) = self.loop_limit()
               && iterations >= limit
            {
                return Err(RuntimeError::LoopLimitExceeded { limit, line });
            }

            iterations += 1;
            trace!("line {line}: loop iteration {iterations}");
            self.run(body)?;
        }

        debug!("line {line}: loop finished after {iterations} iterations");
        Ok(())
    }
}
