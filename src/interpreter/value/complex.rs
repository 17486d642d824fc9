use std::{fmt::Display, ops};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Tolerance used by every approximate comparison: zero checks, the
/// divide-by-zero guard and the real-only operand checks.
pub const EPSILON: f64 = 1e-20;

/// `0` as a value.
pub const ZERO: Value = Value::new(0.0, 0.0);
/// `1` as a value.
pub const ONE: Value = Value::new(1.0, 0.0);
/// The imaginary unit.
pub const I: Value = Value::new(0.0, 1.0);
/// `NaN + NaN i`, the result of a failed domain check.
pub const NAN: Value = Value::new(f64::NAN, f64::NAN);

/// A complex number with double-precision components.
///
/// Every value the calculator produces is one of these; real numbers simply
/// carry an imaginary part of zero.
#[derive(Debug, Clone, Copy)]
pub struct Value {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_real() {
            write!(f, "{}", self.re)
        } else if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl Value {
    /// Constructs a value from its real and imaginary parts.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::Value;
    /// let z = Value::new(5.0, -1.0);
    /// assert_eq!(z.re, 5.0);
    /// assert_eq!(z.im, -1.0);
    /// ```
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Constructs a purely real value.
    #[must_use]
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Returns the magnitude `|z|`.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::Value;
    /// assert_eq!(Value::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { re: self.re,
               im: -self.im, }
    }

    /// Whether the imaginary part is within [`EPSILON`] of zero.
    #[must_use]
    pub fn is_real(self) -> bool {
        self.im.abs() < EPSILON
    }

    /// Whether the magnitude is within [`EPSILON`] of zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.abs() < EPSILON
    }

    /// Whether both components lie within [`EPSILON`] of `other`'s.
    ///
    /// `NaN` components never compare equal.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.re - other.re).abs() < EPSILON && (self.im - other.im).abs() < EPSILON
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `|rhs|` is below
    /// [`EPSILON`].
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::Value;
    ///
    /// let q = Value::new(1.0, 1.0).checked_div(Value::new(0.0, 1.0)).unwrap();
    /// assert_eq!(q, Value::new(1.0, -1.0));
    /// assert!(Value::real(1.0).checked_div(Value::real(0.0)).is_err());
    /// ```
    pub fn checked_div(self, rhs: Self) -> EvalResult<Self> {
        if rhs.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        let denom = rhs.re.mul_add(rhs.re, rhs.im * rhs.im);
        Ok(Self { re: self.re.mul_add(rhs.re, self.im * rhs.im) / denom,
                  im: self.im.mul_add(rhs.re, -(self.re * rhs.im)) / denom, })
    }

    /// Componentwise remainder, as `fmod` computes it.
    ///
    /// When `rhs` is real the result is real as well.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::Value;
    ///
    /// assert_eq!(Value::real(7.0).modulo(Value::real(4.0)), Value::real(3.0));
    /// assert_eq!(Value::new(7.0, 5.0).modulo(Value::real(4.0)), Value::real(3.0));
    /// ```
    #[must_use]
    pub fn modulo(self, rhs: Self) -> Self {
        let im = if rhs.is_real() { 0.0 } else { self.im % rhs.im };
        Self { re: self.re % rhs.re,
               im }
    }

    /// Returns the principal square root.
    ///
    /// `-1` maps to exactly `i`. A negative zero imaginary part counts as
    /// positive, so `sqrt(-4)` is `2i` rather than `-2i`.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::{I, Value};
    ///
    /// assert_eq!(Value::real(-1.0).sqrt(), I);
    /// assert_eq!(Value::real(9.0).sqrt(), Value::real(3.0));
    /// assert_eq!(Value::new(-4.0, -0.0).sqrt(), Value::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.approx_eq(Self::real(-1.0)) {
            return I;
        }
        let r = self.abs();
        let sign = if self.im < 0.0 { -1.0 } else { 1.0 };

        Self { re: f64::midpoint(r, self.re).sqrt(),
               im: sign * ((r - self.re) / 2.0).sqrt(), }
    }

    /// Returns the principal natural logarithm `ln|z| + arg(z) i`.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::value::complex::Value;
    /// let l = Value::real(-1.0).ln();
    /// assert!(l.re.abs() < 1e-12);
    /// assert!((l.im - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { re: self.abs().ln(),
               im: self.arg(), }
    }

    /// Returns the complex exponential `e^z`.
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_re = self.re.exp();
        Self { re: exp_re * self.im.cos(),
               im: exp_re * self.im.sin(), }
    }

    /// Applies `op` to both components independently.
    #[must_use]
    pub fn map(self, op: impl Fn(f64) -> f64) -> Self {
        Self { re: op(self.re),
               im: op(self.im), }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

/// Negates both components.
///
/// # Example
/// ```
/// use hsolver::interpreter::value::complex::Value;
/// assert_eq!(-Value::new(1.0, -2.0), Value::new(-1.0, 2.0));
/// ```
impl ops::Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { re: -self.re,
               im: -self.im, }
    }
}

impl ops::Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { re: self.re + rhs.re,
               im: self.im + rhs.im, }
    }
}

impl ops::Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { re: self.re - rhs.re,
               im: self.im - rhs.im, }
    }
}

impl ops::Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { re: self.re.mul_add(rhs.re, -(self.im * rhs.im)),
               im: self.re.mul_add(rhs.im, self.im * rhs.re), }
    }
}
