use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{parse_precedence, token_to_binary_operator},
            statement::parse_statement,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The identifier that reads a line of input when it forms a whole
/// expression on its own.
pub const INPUT_IDENTIFIER: &str = "input";

/// Parses a whole token stream into a list of statements.
///
/// Statements are parsed one after another until the `Eof` token. There is no
/// statement terminator: each statement ends where the next token can no
/// longer continue it.
///
/// # Parameters
/// - `tokens`: The complete token stream, ending with `Eof`.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Errors
/// The first `ParseError` encountered; parsing never recovers.
///
/// # Example
/// ```
/// use nscharp::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("let x = 1\nprint(x)").unwrap();
/// let statements = parse(&tokens).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// assert!(matches!(statements[1], Statement::Print { line: 2, .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        match iter.peek() {
            Some(Token { kind: TokenKind::Eof,
                         .. }) => break,
            Some(_) => statements.push(parse_statement(&mut iter)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    debug!("parsed {} top-level statements", statements.len());
    Ok(statements)
}

/// Parses a full expression in statement position.
///
/// This is the entry point for expression parsing used by `let`, `print`,
/// conditions and expression statements. It begins at the lowest binding
/// power and climbs through the precedence levels.
///
/// An expression consisting of nothing but the identifier `input` becomes
/// [`Expr::Input`]. If `input` is followed by an infix operator, it is an
/// ordinary variable reference like any other name.
///
/// Grammar: `expression := "input" | precedence(0)`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed expression tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token { kind: TokenKind::Ident(name),
                        line, }) = tokens.peek()
       && name == INPUT_IDENTIFIER
    {
        let line = *line;
        let mut lookahead = tokens.clone();
        lookahead.next();

        if !lookahead.peek()
                     .is_some_and(|token| token_to_binary_operator(&token.kind).is_some())
        {
            tokens.next();
            return Ok(Expr::Input { line });
        }
    }

    parse_precedence(tokens, 0)
}
