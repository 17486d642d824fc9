use crate::{
    error::{Diagnostics, RuntimeError, Warning},
    interpreter::{
        evaluator::{core::EvalResult, operator::power},
        value::complex::{ONE, Value},
    },
};

/// Returns the real part of `value`, warning if an imaginary part is dropped.
fn real_part(operation: &'static str, value: Value, diagnostics: &mut Diagnostics) -> f64 {
    if !value.is_real() {
        diagnostics.warn(Warning::ComplexPartIgnored { operation });
    }
    value.re
}

/// Applies a real function to the real part of the first argument.
///
/// The generated builtins accept any value. A complex argument loses its
/// imaginary part and raises a [`Warning::ComplexPartIgnored`].
///
/// # Example
/// ```
/// use hsolver::{
///     error::Diagnostics,
///     interpreter::{evaluator::function::builtin::sin, value::complex::Value},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let x = Value::real(std::f64::consts::FRAC_PI_2);
/// assert_eq!(sin(x, Value::real(0.0), &mut diagnostics).unwrap(), Value::real(1.0));
/// assert!(diagnostics.warnings().is_empty());
///
/// sin(Value::new(0.0, 1.0), Value::real(0.0), &mut diagnostics).unwrap();
/// assert_eq!(diagnostics.warnings().len(), 1);
/// ```
macro_rules! real_part_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("Computes `", stringify!($fname), "` of the real part of `a`.")]
        pub fn $fname(a: Value, _: Value, diagnostics: &mut Diagnostics) -> EvalResult<Value> {
            Ok(Value::real(real_part(stringify!($fname), a, diagnostics).$real_fn()))
        }
    };
}

real_part_builtin!(log2, log2);
real_part_builtin!(log10, log10);
real_part_builtin!(sin, sin);
real_part_builtin!(cos, cos);
real_part_builtin!(tan, tan);
real_part_builtin!(asin, asin);
real_part_builtin!(acos, acos);
real_part_builtin!(atan, atan);

/// Computes the `b`-th root of `a` as `a ^ (1 / b)`.
///
/// # Errors
/// - [`RuntimeError::ComplexUnsupported`] naming `root` if either argument is
///   complex.
/// - [`RuntimeError::DivisionByZero`] if `b` is zero.
///
/// # Example
/// ```
/// use hsolver::{
///     error::Diagnostics,
///     interpreter::{evaluator::function::builtin::root, value::complex::Value},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let r = root(Value::real(27.0), Value::real(3.0), &mut diagnostics).unwrap();
/// assert!((r.re - 3.0).abs() < 1e-12);
/// assert!(root(Value::real(27.0), Value::real(0.0), &mut diagnostics).is_err());
/// ```
pub fn root(a: Value, b: Value, _: &mut Diagnostics) -> EvalResult<Value> {
    if !a.is_real() || !b.is_real() {
        return Err(RuntimeError::ComplexUnsupported { operation: "root" });
    }
    power(a, ONE.checked_div(b)?)
}
