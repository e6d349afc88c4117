/// Operator dispatch and operand promotion.
pub mod core;

/// `+ - * / // %` on numbers.
pub mod arithmetic;

/// Exponentiation.
pub mod power;

/// Equality and ordering.
pub mod comparison;
