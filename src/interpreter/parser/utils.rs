use std::{iter::Peekable, mem::discriminant};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token and returns it.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next().ok_or(ParseError::UnexpectedEndOfInput)
}

/// Consumes the next token if it has the expected kind.
///
/// Kinds are compared by variant only, so this is meant for tokens without
/// a payload such as `(` or `let`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The kind the grammar requires here.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming both kinds if they differ.
/// The mismatching token is left in the stream.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if discriminant(&token.kind) == discriminant(expected) => next_token(tokens),
        Some(token) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.kind.to_string(),
                                                         line:     token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::Ident(name),
                     .. }) => {
            let name = name.clone();
            tokens.next();
            Ok(name)
        },
        Some(token) => Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                         found:    token.kind.to_string(),
                                                         line:     token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
