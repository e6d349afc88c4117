use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Reads one line for an `input` expression.
    ///
    /// Pending output is flushed first so a prompt printed just before is
    /// visible while the program waits. The trailing `\n` or `\r\n` is
    /// removed.
    ///
    /// # Errors
    /// - `RuntimeError::EndOfInput` if the reader has no more data.
    /// - `RuntimeError::Io` if flushing or reading fails.
    pub fn read_input(&mut self, line: usize) -> EvalResult<String> {
        self.flush_output(line)?;

        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|e| io_error(&e, line))?;

        if read == 0 {
            return Err(RuntimeError::EndOfInput { line });
        }

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }

        debug!("line {line}: read {read} bytes of input");
        Ok(buffer)
    }

    /// Flushes everything written to the output so far.
    ///
    /// # Errors
    /// `RuntimeError::Io` if the writer cannot flush.
    pub fn flush_output(&mut self, line: usize) -> EvalResult<()> {
        self.output.flush().map_err(|e| io_error(&e, line))
    }

    /// Writes the display form of `value` followed by a newline.
    ///
    /// # Errors
    /// `RuntimeError::Io` if the writer fails.
    pub fn write_value(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| io_error(&e, line))
    }
}

fn io_error(error: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       line }
}
