/// Numeric conversion helpers.
///
/// Safe functions for converting between integer and floating-point types
/// without silent data loss. Every conversion returns a `Result` that is `Ok`
/// only when the value survives the conversion unchanged.
pub mod num;
