/// Truncates an `f64` towards zero into an `i64`.
///
/// Values outside the `i64` range saturate at `i64::MIN`/`i64::MAX`, and `NaN`
/// becomes `0`. This is the "64-bit truncation" the bitwise operators work on.
///
/// # Example
/// ```
/// use hsolver::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(12.9), 12);
/// assert_eq!(f64_to_i64_truncated(-12.9), -12);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Converts an `i64` back into an `f64`.
///
/// Magnitudes above `2^53` are rounded to the nearest representable value.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a digit value or place index into an `f64`.
#[must_use]
pub fn u32_to_f64(value: u32) -> f64 {
    f64::from(value)
}

/// Converts a place exponent into the `i32` accepted by [`f64::powi`].
///
/// Exponents produced by the formatter are bounded by the `f64` exponent
/// range, so they always fit; out-of-range input saturates.
#[must_use]
pub fn i64_to_i32_saturating(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Floors a finite `f64` into an `i64`.
///
/// Used for place-value exponents and digit extraction; non-finite input
/// yields `0`.
///
/// # Example
/// ```
/// use hsolver::util::num::f64_floor_to_i64;
///
/// assert_eq!(f64_floor_to_i64(2.7), 2);
/// assert_eq!(f64_floor_to_i64(-0.5), -1);
/// assert_eq!(f64_floor_to_i64(f64::INFINITY), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_floor_to_i64(value: f64) -> i64 {
    if value.is_finite() { value.floor() as i64 } else { 0 }
}

/// Converts an extracted digit into a `u32` in `0..radix`.
///
/// The digit is clamped into range so that rounding noise in the formatter can
/// never produce an out-of-alphabet character.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_digit(value: f64, radix: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let digit = value.floor() as u32;
    digit.min(radix - 1)
}
