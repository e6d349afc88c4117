//! # nscharp
//!
//! nscharp is an interpreter for a small line-oriented scripting language,
//! written in Rust. Programs bind variables with `let`, print with `print`,
//! branch with `if`/`else`, loop with `while` and read lines with `input`.
//!
//! The pipeline is lexer → parser → evaluator:
//!
//! ```
//! let source = "let x = 1 + 2 * 3\nprint(x)";
//!
//! let tokens = nscharp::tokenize(source).unwrap();
//! let statements = nscharp::parse(&tokens).unwrap();
//! assert_eq!(statements.len(), 2);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use log::debug;

pub use crate::interpreter::{lexer::tokenize, parser::core::parse};
use crate::{error::Error, interpreter::evaluator::core::Context};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source line it refers to, and formats itself as
/// `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single `Error` returned by the entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, `usize`, and `f64` without silent
///   data loss.
pub mod util;

/// Lexes, parses and executes `source` against an existing context.
///
/// Nothing runs unless the whole program lexes and parses. Output written
/// before a runtime error stays written. The output is flushed at the end,
/// and a failing flush is reported at the last line.
///
/// # Errors
/// The first lexing, parsing or runtime error.
pub fn execute(source: &str, context: &mut Context<'_>) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let statements = parse(&tokens)?;
    debug!("executing {} top-level statements", statements.len());

    let end_line = tokens.last().map_or(1, |token| token.line);
    let result = context.run(&statements);
    let flushed = context.flush_output(end_line);

    result?;
    flushed?;
    Ok(())
}

/// Runs a program with the given input and output streams.
///
/// This is the convenience entry point: it creates a fresh [`Context`] with
/// no loop limit and executes `source` in it.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// nscharp::run("let x = 1 + 2\nprint(x)", &mut std::io::empty(), &mut output).unwrap();
/// assert_eq!(output, b"3\n");
///
/// // Example with an intentional error (unknown variable).
/// let err = nscharp::run("print(y)", &mut std::io::empty(), &mut Vec::new()).unwrap_err();
/// assert_eq!(err.to_string(), "Error on line 1: Variable 'y' is not defined.");
/// ```
pub fn run(source: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), Error> {
    let mut context = Context::new(input, output);
    execute(source, &mut context)
}
