/// Lexing errors.
///
/// Raised while turning source text into tokens. A lexing error aborts the
/// whole run; no partial token stream is ever returned.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building statements and
/// expression trees from the token stream, such as unexpected tokens, missing
/// expressions or a dangling `else`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution. Runtime
/// errors include undefined variables, type mismatches, division by zero,
/// overflow and failures of the input or output streams.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error that can end a run, tagged by the phase that produced it.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream could not be parsed.
    Parse(ParseError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the source line the error refers to, if it has one.
    ///
    /// ## Example
    /// ```
    /// use nscharp::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero { line: 4 });
    /// assert_eq!(error.line(), Some(4));
    /// ```
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.line()),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => Some(e.line()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
