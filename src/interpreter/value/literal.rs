use crate::{
    error::{Diagnostics, Warning},
    interpreter::{
        settings::{Radix, Settings},
        value::complex::Value,
    },
    util::num::u32_to_f64,
};

/// Parses the digits of a number literal in the given radix.
///
/// Digits before the decimal separator accumulate as `acc * radix + d`; the
/// `k`-th digit after it adds `d * radix^-k`. Digit separators are skipped. A
/// leading `-`, placed there when a unary minus was folded into the literal,
/// negates the result. Any other character, including a second decimal
/// separator, is ignored with a [`Warning::MalformedLiteral`].
///
/// # Example
/// ```
/// use hsolver::{
///     error::Diagnostics,
///     interpreter::{
///         settings::{Radix, Settings},
///         value::{complex::Value, literal::parse_literal},
///     },
/// };
///
/// let settings = Settings::default();
/// let mut diagnostics = Diagnostics::new();
///
/// let v = parse_literal("ff", Radix::Hexadecimal, &settings, &mut diagnostics);
/// assert_eq!(v, Value::real(255.0));
///
/// let v = parse_literal("-1_000.5", Radix::Decimal, &settings, &mut diagnostics);
/// assert_eq!(v, Value::real(-1000.5));
/// assert!(diagnostics.warnings().is_empty());
/// ```
pub fn parse_literal(digits: &str,
                     radix: Radix,
                     settings: &Settings,
                     diagnostics: &mut Diagnostics)
                     -> Value {
    let (negative, body) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };

    let base = u32_to_f64(radix.base());
    let mut acc = 0.0;
    let mut fraction_place = None;

    for c in body.chars() {
        if c == settings.digit_separator_in {
            continue;
        }
        if c == settings.decimal_separator_in && fraction_place.is_none() {
            fraction_place = Some(0);
            continue;
        }
        let Some(d) = c.to_digit(radix.base()) else {
            diagnostics.warn(Warning::MalformedLiteral { literal:   digits.to_string(),
                                                         character: c, });
            continue;
        };
        let d = u32_to_f64(d);
        match fraction_place.as_mut() {
            Some(k) => {
                *k += 1;
                acc += d * base.powi(*k).recip();
            },
            None => acc = acc.mul_add(base, d),
        }
    }

    // Literals are always real; only the real part is negated so that the
    // imaginary part stays a positive zero.
    Value::real(if negative { -acc } else { acc })
}
