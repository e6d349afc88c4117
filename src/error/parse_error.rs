#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// Description of the token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression was required but the next token cannot start one.
    ExpectedExpression {
        /// Description of the token that was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `else` block appeared without an `if` block in front of it.
    DanglingElse {
        /// The source line of the `else` keyword.
        line: usize,
    },
    /// The token stream ended without an end-of-file token.
    UnexpectedEndOfInput,
}

impl ParseError {
    /// Gets the line number from `self`, if the error has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::DanglingElse { line } => Some(*line),
            Self::UnexpectedEndOfInput => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, but found {found}.")
            },
            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, but found {found}.")
            },
            Self::DanglingElse { line } => {
                write!(f, "Error on line {line}: 'else' without a preceding 'if' block.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
