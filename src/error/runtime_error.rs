#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read a variable that was never bound.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to values it does not support.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `input` was evaluated but the input stream is exhausted.
    EndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from the input stream or writing to the output stream failed.
    Io {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `while` loop ran past the configured iteration limit.
    LoopLimitExceeded {
        /// The configured limit.
        limit: u64,
        /// The source line of the `while` statement.
        line:  usize,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::EndOfInput { line }
            | Self::Io { line, .. }
            | Self::LoopLimitExceeded { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not defined.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::EndOfInput { line } => {
                write!(f, "Error on line {line}: No more input to read.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
            Self::LoopLimitExceeded { limit, line } => write!(f,
                                                              "Error on line {line}: Loop exceeded the limit of {limit} iterations."),
        }
    }
}

impl std::error::Error for RuntimeError {}
