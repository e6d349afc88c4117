use log::{debug, trace};
use logos::Logos;

use crate::error::LexError;

/// Raw lexeme classes recognized by the scanner.
///
/// Word-like spellings are all matched by one pattern and only classified as
/// keyword or identifier afterwards, so `letter` or `iffy` can never be split
/// into a keyword and a remainder.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Double-quoted string literals. No escape sequences.
    #[regex(r#""[^"]*""#)]
    Str,
    /// Keywords and identifiers.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    EqEq,
    /// `=`
    #[token("=")]
    Eq,
    /// Arithmetic and relational operators.
    #[regex(r"\*\*|//|<=|>=|!=|[+\-*/%<>]")]
    Op,
    /// Line breaks advance the line counter and are dropped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The classification of a token, carrying its value where it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal, already parsed.
    Number(i64),
    /// String literal with the surrounding quotes removed.
    Str(String),
    /// `let`
    Let,
    /// `fun`
    Fun,
    /// `print`
    Print,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `==`
    EqEq,
    /// `=`
    Eq,
    /// An operator lexeme such as `+` or `<=`, kept verbatim.
    Op(String),
    /// Identifier, such as a variable name.
    Ident(String),
    /// End of input. Always the last token of a stream.
    Eof,
}

impl TokenKind {
    /// Classifies a word as a keyword by exact match.
    ///
    /// Returns `None` for anything that is not spelled exactly like a keyword.
    ///
    /// ## Example
    /// ```
    /// use nscharp::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    /// assert_eq!(TokenKind::keyword("letter"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "let" => Some(Self::Let),
            "fun" => Some(Self::Fun),
            "print" => Some(Self::Print),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Let => write!(f, "'let'"),
            Self::Fun => write!(f, "'fun'"),
            Self::Print => write!(f, "'print'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EqEq => write!(f, "'=='"),
            Self::Eq => write!(f, "'='"),
            Self::Op(op) => write!(f, "operator '{op}'"),
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A classified lexeme together with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// 1-based source line of the token's first character.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// Converts source text into a token stream terminated by `Eof`.
///
/// Lexing is all-or-nothing: the first character no pattern matches aborts
/// the run and no tokens are returned.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` for characters outside the language.
/// - `LexError::UnterminatedString` for a `"` without a closing quote.
/// - `LexError::LiteralTooLarge` for integers that do not fit an `i64`.
///
/// # Example
/// ```
/// use nscharp::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 1\nprint(x)").unwrap();
///
/// assert_eq!(tokens.len(), 9);
/// assert_eq!(tokens[0].kind, TokenKind::Let);
/// assert_eq!(tokens[4].line, 2);
/// assert_eq!(tokens[8].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(lexeme) = lexer.next() {
        let line = lexer.extras.line;
        let slice = lexer.slice();

        let Ok(lexeme) = lexeme else {
            return Err(unmatched(slice, line));
        };

        let kind = match lexeme {
            Lexeme::Number => {
                let value = slice.parse().map_err(|_| LexError::LiteralTooLarge { literal:
                                                                                      slice.to_string(),
                                                                                  line })?;
                TokenKind::Number(value)
            },
            Lexeme::Str => {
                lexer.extras.line += slice.matches('\n').count();
                let contents = slice.strip_prefix('"')
                                    .and_then(|s| s.strip_suffix('"'))
                                    .unwrap_or(slice);
                TokenKind::Str(contents.to_string())
            },
            Lexeme::Word => {
                TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Ident(slice.to_string()))
            },
            Lexeme::LBrace => TokenKind::LBrace,
            Lexeme::RBrace => TokenKind::RBrace,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::EqEq => TokenKind::EqEq,
            Lexeme::Eq => TokenKind::Eq,
            Lexeme::Op => TokenKind::Op(slice.to_string()),
            // Both are skipped by their callbacks and never reach this point.
            Lexeme::NewLine | Lexeme::Ignored => continue,
        };

        trace!("line {line}: {kind}");
        tokens.push(Token::new(kind, line));
    }

    tokens.push(Token::new(TokenKind::Eof, lexer.extras.line));
    debug!("lexed {} tokens over {} lines", tokens.len(), lexer.extras.line);

    Ok(tokens)
}

/// Builds the error for a slice no pattern accepted.
fn unmatched(slice: &str, line: usize) -> LexError {
    match slice.chars().next() {
        Some('"') => LexError::UnterminatedString { line },
        Some(character) => LexError::UnexpectedCharacter { character, line },
        None => LexError::UnexpectedCharacter { character: '\0', line },
    }
}
