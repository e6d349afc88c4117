use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{PREFIX_BINDING_POWER, parse_precedence},
            core::ParseResult,
            utils::{expect, next_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (numeric identity).
/// They are right-associative, so `--x` is `-(-x)`. The operand is parsed
/// with [`PREFIX_BINDING_POWER`], which lets `**` bind tighter than a prefix
/// on its left.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") precedence(7)
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token { kind: TokenKind::Op(op),
                        line, }) = tokens.peek()
       && let Some(op) = token_to_unary_operator(op)
    {
        let line = *line;
        tokens.next();
        let expr = parse_precedence(tokens, PREFIX_BINDING_POWER)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | STRING
///              | IDENT
///              | "(" precedence(0) ")"
/// ```
/// # Errors
/// Returns `ParseError::ExpectedExpression` without consuming anything when
/// the next token cannot start an expression, e.g. a stray `}`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek()
                      .ok_or(ParseError::UnexpectedEndOfInput)?;
    let line = token.line;

    let expr = match &token.kind {
        TokenKind::Number(n) => Expr::Literal { value: LiteralValue::Integer(*n),
                                                line },
        TokenKind::Str(s) => Expr::Literal { value: LiteralValue::Str(s.clone()),
                                             line },
        TokenKind::Ident(name) => Expr::Variable { name: name.clone(),
                                                   line },
        TokenKind::LParen => return parse_grouping(tokens),
        other => {
            return Err(ParseError::ExpectedExpression { found: other.to_string(),
                                                        line });
        },
    };

    next_token(tokens)?;
    Ok(expr)
}

/// Parses a parenthesized expression. The parentheses leave no node behind.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, &TokenKind::LParen)?;
    let expr = parse_precedence(tokens, 0)?;
    expect(tokens, &TokenKind::RParen)?;

    Ok(expr)
}

/// Maps an operator lexeme to a prefix operator, if it is one.
fn token_to_unary_operator(op: &str) -> Option<UnaryOperator> {
    match op {
        "-" => Some(UnaryOperator::Negate),
        "+" => Some(UnaryOperator::Plus),
        _ => None,
    }
}
