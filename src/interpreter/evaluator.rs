/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation and repetition, powers and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators `-` and `+`.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, expression evaluation and error
/// propagation.
pub mod core;

/// Statement execution.
///
/// Runs statement lists, including bindings, printing, conditionals and
/// loops, against the context.
pub mod statement;

/// Reading `input` lines and writing `print` output on the injected streams.
pub mod io;
