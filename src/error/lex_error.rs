#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// No token pattern matches at the cursor.
    UnexpectedCharacter {
        /// The first character that could not be matched.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line of the opening quote.
        line: usize,
    },
    /// A number literal does not fit into a 64 bit signed integer.
    LiteralTooLarge {
        /// The digits as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character {character:?}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Number literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
