use crate::{
    error::{CalcResult, CalculatorError},
    util::num::i64_to_f64_checked,
};

/// Represents a numeric value produced by the calculator.
///
/// A number is either an exact 64-bit integer or a double-precision real.
/// Operations on two integers stay integral wherever the operator allows it
/// (`+`, `-`, `*`, `//`, `%`, and `**` with a non-negative exponent); true
/// division and any operation touching a real produce a `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers are promoted only if they are exactly representable as `f64`;
    /// beyond `2^53 - 1` in absolute value the conversion fails instead of
    /// silently rounding.
    ///
    /// # Errors
    /// Returns `CalculatorError::LiteralTooLarge` if the integer cannot be
    /// represented exactly.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Number::Real(1.5).as_real().unwrap(), 1.5);
    /// ```
    pub fn as_real(&self) -> CalcResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, CalculatorError::LiteralTooLarge),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Integral reals keep a trailing `.0` so the numeric type stays
            // visible in output: `8 / 2` prints `4.0`, not `4`.
            Self::Real(r) if r.fract() == 0.0 && r.is_finite() => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
