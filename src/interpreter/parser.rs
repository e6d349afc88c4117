/// Entry points and shared result type.
///
/// Contains the program-level loop and the statement-level expression rule
/// that recognizes the `input` form.
pub mod core;

/// Precedence climbing for binary operators.
///
/// Maps operator tokens to binary operators and their binding powers, and
/// folds operands into left- or right-leaning trees accordingly.
pub mod binary;

/// Brace-delimited statement blocks.
///
/// Parses `{ statement* }` bodies shared by `fun`, `if`, `else` and `while`.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to the `let`, `print`, `fun`, `if`,
/// `while` and expression-statement rules.
pub mod statement;

/// Prefix operators and primary expressions.
///
/// Handles unary `-` and `+`, literals, identifiers and parenthesized groups.
pub mod unary;

/// Shared helpers for token consumption.
pub mod utils;
