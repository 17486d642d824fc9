use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Operator, value::complex::Value},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Operator {
    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Arithmetic operators work on complex values. `^` is real-only. The
    /// bitwise operators truncate each component to a 64-bit integer and
    /// combine the components independently.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for `/` by a value of magnitude
    ///   below the comparison epsilon.
    /// - [`RuntimeError::ComplexUnsupported`] for `^` with a complex operand.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::{token::Operator, value::complex::Value};
    ///
    /// let v = Operator::ShiftLeft.apply(Value::real(1.0), Value::real(4.0)).unwrap();
    /// assert_eq!(v, Value::real(16.0));
    /// assert!(Operator::Divide.apply(Value::real(1.0), Value::real(0.0)).is_err());
    ///
    /// // A negative amount shifts the other way.
    /// let v = Operator::ShiftRight.apply(Value::real(1.0), Value::real(-3.0)).unwrap();
    /// assert_eq!(v, Value::real(8.0));
    ///
    /// // Components are combined independently.
    /// let v = Operator::BitAnd.apply(Value::new(6.9, 3.0), Value::new(3.0, 1.0)).unwrap();
    /// assert_eq!(v, Value::new(2.0, 1.0));
    /// ```
    pub fn apply(self, lhs: Value, rhs: Value) -> EvalResult<Value> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => lhs.checked_div(rhs),
            Self::Modulo => Ok(lhs.modulo(rhs)),
            Self::Power => power(lhs, rhs),
            Self::BitAnd => Ok(bitwise(lhs, rhs, |a, b| a & b)),
            Self::BitOr => Ok(bitwise(lhs, rhs, |a, b| a | b)),
            Self::BitXor => Ok(bitwise(lhs, rhs, |a, b| a ^ b)),
            Self::ShiftLeft => Ok(bitwise(lhs, rhs, shift_left)),
            Self::ShiftRight => Ok(bitwise(lhs, rhs, shift_right)),
        }
    }
}

/// Raises a real `base` to a real `exponent`.
///
/// # Errors
/// Returns [`RuntimeError::ComplexUnsupported`] if either operand has an
/// imaginary part.
pub fn power(base: Value, exponent: Value) -> EvalResult<Value> {
    if !base.is_real() || !exponent.is_real() {
        return Err(RuntimeError::ComplexUnsupported { operation: "pow" });
    }
    Ok(Value::real(base.re.powf(exponent.re)))
}

/// Combines the truncated components of `lhs` and `rhs` with `op`.
fn bitwise(lhs: Value, rhs: Value, op: impl Fn(i64, i64) -> i64) -> Value {
    let apply = |a: f64, b: f64| i64_to_f64(op(f64_to_i64_truncated(a), f64_to_i64_truncated(b)));
    Value::new(apply(lhs.re, rhs.re), apply(lhs.im, rhs.im))
}

/// Shifts left; a negative amount shifts right instead.
///
/// Bits shifted past the width are lost, so amounts of 64 or more give `0`.
fn shift_left(value: i64, amount: i64) -> i64 {
    if amount < 0 {
        return shift_right(value, amount.saturating_neg());
    }
    u32::try_from(amount).ok()
                         .and_then(|n| value.checked_shl(n))
                         .unwrap_or(0)
}

/// Arithmetic shift right; a negative amount shifts left instead.
fn shift_right(value: i64, amount: i64) -> i64 {
    if amount < 0 {
        return shift_left(value, amount.saturating_neg());
    }
    u32::try_from(amount).ok()
                         .and_then(|n| value.checked_shr(n))
                         .unwrap_or(if value < 0 { -1 } else { 0 })
}

