use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Minimum binding power of the operand of a prefix operator.
///
/// Sits between the multiplicative levels and `**`, so `-a * b` is
/// `(-a) * b` while `-a ** b` is `-(a ** b)`.
pub const PREFIX_BINDING_POWER: u8 = 7;

/// Parses a binary expression by precedence climbing.
///
/// Starting from a unary operand, operators are folded in for as long as
/// their left binding power is at least `min_power`. The right operand of
/// each operator is parsed recursively with the operator's right binding
/// power, which makes `+ - * / // %` left-associative and `**`
/// right-associative.
///
/// Comparison operators chain: `a < b < c` becomes one [`Expr::Comparison`]
/// meaning `a < b` and `b < c`, not `(a < b) < c`.
///
/// | level          | operators                 | powers  |
/// |----------------|---------------------------|---------|
/// | comparison     | `== != < > <= >=`         | (1, 2)  |
/// | additive       | `+ -`                     | (3, 4)  |
/// | multiplicative | `* / // %`                | (5, 6)  |
/// | prefix         | `- +`                     | 7       |
/// | power          | `**`                      | (8, 7)  |
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_power`: Operators binding looser than this end the expression.
///
/// # Returns
/// An expression tree with precedence already resolved.
///
/// # Errors
/// Any error from the operands.
pub fn parse_precedence<'a, I>(tokens: &mut Peekable<I>, min_power: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    let mut compared = false;

    while let Some(token) = tokens.peek() {
        let Some(op) = token_to_binary_operator(&token.kind) else {
            break;
        };

        let (left_power, right_power) = binding_power(op);
        if left_power < min_power {
            break;
        }

        let line = token.line;
        tokens.next(); // consume operator

        let right = parse_precedence(tokens, right_power)?;
        left = if compared && op.is_comparison() {
            extend_comparison(left, op, right)
        } else {
            Expr::BinaryOp { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             line }
        };
        compared |= op.is_comparison();
    }

    Ok(left)
}

/// Appends `op right` to the comparison folded so far.
///
/// Comparisons bind loosest, so once one is folded at a level every later
/// operator at that level is a comparison too.
fn extend_comparison(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    match left {
        Expr::Comparison { first,
                           mut rest,
                           line, } => {
            rest.push((op, right));
            Expr::Comparison { first, rest, line }
        },
        Expr::BinaryOp { left: first,
                         op: first_op,
                         right: middle,
                         line, } => Expr::Comparison { first,
                                                       rest: vec![(first_op, *middle), (op, right)],
                                                       line },
        other => {
            let line = other.line_number();
            Expr::BinaryOp { left: Box::new(other),
                             op,
                             right: Box::new(right),
                             line }
        },
    }
}

/// Returns the left and right binding powers of a binary operator.
///
/// A left power above the right one makes the operator right-associative.
#[must_use]
pub const fn binding_power(op: BinaryOperator) -> (u8, u8) {
    use BinaryOperator::{
        Add, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
        Pow, Sub,
    };

    match op {
        Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => (1, 2),
        Add | Sub => (3, 4),
        Mul | Div | FloorDiv | Mod => (5, 6),
        Pow => (8, 7),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `==` and for operator tokens spelling a
/// binary operator. Returns `None` for all other tokens, which is what ends an
/// expression.
///
/// # Example
/// ```
/// use nscharp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Op("**".to_string())),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::EqEq), Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(&TokenKind::Eq), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::EqEq => Some(BinaryOperator::Equal),
        TokenKind::Op(op) => match op.as_str() {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            "//" => Some(BinaryOperator::FloorDiv),
            "%" => Some(BinaryOperator::Mod),
            "**" => Some(BinaryOperator::Pow),
            "<" => Some(BinaryOperator::Less),
            ">" => Some(BinaryOperator::Greater),
            "<=" => Some(BinaryOperator::LessEqual),
            ">=" => Some(BinaryOperator::GreaterEqual),
            "!=" => Some(BinaryOperator::NotEqual),
            _ => None,
        },
        _ => None,
    }
}
