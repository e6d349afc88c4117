use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, next_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The leading token selects the rule:
/// - `let` → variable binding,
/// - `print` → print call,
/// - `fun` → function declaration,
/// - `if` → conditional, with an optional `else` block,
/// - `while` → loop,
/// - anything else → expression statement.
///
/// An `else` in leading position has no `if` block in front of it and is
/// rejected.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek()
                      .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Let => parse_let(tokens),
        TokenKind::Print => parse_print(tokens),
        TokenKind::Fun => parse_fun(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::Else => Err(ParseError::DanglingElse { line: token.line }),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses a variable binding of the form `let <identifier> = <expression>`.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or the
/// expression is malformed.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Let)?.line;
    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Eq)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses `print ( <expression> )`. The parentheses are mandatory.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Print)?.line;
    expect(tokens, &TokenKind::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen)?;

    Ok(Statement::Print { expr, line })
}

/// Parses a function declaration `fun <identifier> ( ) { <statement>* }`.
///
/// The parameter list must be empty.
///
/// # Errors
/// Returns `UnexpectedToken` for anything between the parentheses, and
/// propagates errors from the body.
fn parse_fun<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::Fun)?.line;
    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::LParen)?;
    expect(tokens, &TokenKind::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Statement::Fun { name, body, line })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if <condition> { <statement>* }
///     if <condition> { <statement>* } else { <statement>* }
/// ```
/// The condition needs no parentheses; it ends at the `{` of the body.
///
/// # Returns
/// `Statement::If`, or `Statement::IfElse` when an `else` block follows.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::If)?.line;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    if let Some(Token { kind: TokenKind::Else,
                        .. }) = tokens.peek()
    {
        next_token(tokens)?;
        let else_body = parse_block(tokens)?;

        return Ok(Statement::IfElse { condition,
                                      then_body: body,
                                      else_body,
                                      line });
    }

    Ok(Statement::If { condition,
                       body,
                       line })
}

/// Parses `while <condition> { <statement>* }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, &TokenKind::While)?.line;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a bare expression used as a statement.
///
/// The statement's line is taken from its first token.
///
/// # Errors
/// Returns `ExpectedExpression` if no expression can start here.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.peek().map_or(0, |token| token.line);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}
