use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, next_token},
        },
    },
};

/// Parses a block of statements delimited by braces.
///
/// Statements are parsed until the matching `}`. Nesting is handled by the
/// recursion through [`parse_statement`]; there is no depth limit.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// - `UnexpectedToken` if the block does not start with `{`.
/// - `UnexpectedToken` expecting `}` if the input ends inside the block.
/// - Any error from the statements inside.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, &TokenKind::LBrace)?;

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some(Token { kind: TokenKind::RBrace,
                         .. }) => {
                next_token(tokens)?;
                break;
            },
            Some(Token { kind: TokenKind::Eof,
                         line, }) => {
                return Err(ParseError::UnexpectedToken { expected: TokenKind::RBrace.to_string(),
                                                         found:    TokenKind::Eof.to_string(),
                                                         line:     *line, });
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(statements)
}
