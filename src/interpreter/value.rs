use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals, `input`, and operators. Variables hold
/// owned copies, so rebinding one name never affects another.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Produced by `/`, by `**` with a negative exponent, and by mixed
    /// integer/real arithmetic.
    Real(f64),
    /// A string value. Produced by string literals, `input`, and string
    /// concatenation or repetition.
    Str(String),
    /// A boolean value, printed as `True` or `False`.
    /// Produced by comparison operators. Counts as `0` or `1` in arithmetic.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Decides whether a condition holds.
    ///
    /// Numbers are truthy when nonzero, strings when non-empty.
    ///
    /// ## Example
    /// ```
    /// use nscharp::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-1).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Name of the value's kind, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }

    /// Returns `true` for integers, reals and booleans.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Str(_))
    }

    /// Returns the value as an integer if it is one, counting booleans as `0`
    /// or `1`.
    #[must_use]
    pub fn as_integer_like(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Real(_) | Self::Str(_) => None,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers beyond `2^53` round to the nearest `f64`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real, integer or boolean.
    /// - `Err(RuntimeError::TypeError)`: For strings.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Bool(b) => Ok(f64::from(u8::from(*b))),
            Self::Str(_) => {
                Err(RuntimeError::TypeError { details: format!("Expected a number, found {}",
                                                               self.type_name()),
                                              line })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write_real(f, *r),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}

/// Decimal exponents written in fixed notation; others use `1e+16` style.
const FIXED_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Writes a real with the shortest digits that read back to the same value.
///
/// Whole numbers keep a `.0` suffix. Values whose decimal exponent falls
/// outside [`FIXED_EXPONENTS`] are written with a signed two-digit exponent,
/// e.g. `1e+16` or `2.5e-07`.
fn write_real(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    if r.is_nan() {
        return write!(f, "nan");
    }
    if r.is_infinite() {
        return write!(f, "{}", if r < 0.0 { "-inf" } else { "inf" });
    }

    let scientific = format!("{r:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{r}");
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if FIXED_EXPONENTS.contains(&exponent) {
        let fixed = r.to_string();
        if fixed.contains('.') {
            write!(f, "{fixed}")
        } else {
            write!(f, "{fixed}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
