use crate::error::{CalcResult, CalculatorError};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use minicalc::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside the safe range
/// let big = MAX_SAFE_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `i64` exponent to a `u32`.
///
/// Exponents outside `0..=u32::MAX` cannot produce a representable integer
/// power anyway, so out-of-range values are reported as overflow.
///
/// ## Errors
/// Returns `CalculatorError::Overflow` if the value is negative or exceeds
/// `u32::MAX`.
///
/// ## Example
/// ```
/// use minicalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45).unwrap(), 45);
/// assert!(i64_to_u32_checked(-1).is_err());
/// assert!(i64_to_u32_checked(i64::MAX).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn i64_to_u32_checked(value: i64) -> CalcResult<u32> {
    if value < 0 || value > u32::MAX as i64 {
        return Err(CalculatorError::Overflow);
    }
    Ok(value as u32)
}
