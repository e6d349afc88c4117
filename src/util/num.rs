use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to the nearest `f64`.
///
/// Magnitudes above `2^53` round to the nearest representable value, so
/// mixed integer/real arithmetic never fails on large integers.
///
/// ## Example
/// ```
/// use nscharp::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(10_000_000_000_000_001), 1e16);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a non-negative `i64` exponent to `u32` for integer powers.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the exponent does not fit in a `u32`
/// (any such power overflows an `i64` anyway unless the base is `-1`, `0` or
/// `1`), and `RuntimeError::TypeError` for negative exponents.
///
/// ## Example
/// ```
/// use nscharp::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45, 5), Ok(45));
///
/// let err = i64_to_u32_checked(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 11 }));
/// ```
pub fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::TypeError { details: format!("Expected a non-negative exponent, found {value}"),
                                             line });
    }

    u32::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}

/// Converts a repetition count to `usize`, clamping negative counts to zero.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit in a `usize`.
///
/// ## Example
/// ```
/// use nscharp::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3, 1), Ok(3));
/// assert_eq!(repeat_count(-2, 1), Ok(0));
/// ```
pub fn repeat_count(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Ok(0);
    }

    usize::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
