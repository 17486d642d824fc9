use crate::{
    error::{Diagnostics, Warning},
    interpreter::{
        settings::{Radix, Settings},
        value::complex::{EPSILON, Value},
    },
    util::num::{f64_floor_to_i64, f64_to_digit, i64_to_i32_saturating, u32_to_f64},
};

/// Formats a value for display.
///
/// A value whose imaginary part is within epsilon of zero prints as its real
/// part only. Anything else prints as `(re + im i)` or `(re - im i)`, the sign
/// taken from the imaginary part and its magnitude printed after it.
///
/// # Parameters
/// - `value`: The value to format.
/// - `settings`: Radix, separators and notation bounds.
/// - `diagnostics`: Receives a warning if fractional digits are dropped.
///
/// # Example
/// ```
/// use hsolver::{
///     error::Diagnostics,
///     interpreter::{format::format_value, settings::Settings, value::complex::Value},
/// };
///
/// let settings = Settings::default();
/// let mut diagnostics = Diagnostics::new();
///
/// assert_eq!(format_value(Value::real(14.0), &settings, &mut diagnostics), "14");
/// assert_eq!(format_value(Value::new(1.0, -2.5), &settings, &mut diagnostics), "(1 - 2.5i)");
/// ```
#[must_use]
pub fn format_value(value: Value, settings: &Settings, diagnostics: &mut Diagnostics) -> String {
    if value.is_real() {
        return format_real(value.re, settings, diagnostics);
    }

    let sign = if value.im.is_sign_negative() { '-' } else { '+' };
    format!("({} {sign} {}i)",
            format_real(value.re, settings, diagnostics),
            format_real(value.im.abs(), settings, diagnostics))
}

/// Formats one real component.
///
/// Decimal output switches to scientific notation outside
/// `[scientific_min, scientific_max)`; zero and values within epsilon of it
/// never do. Non-finite values print as `NaN`, `inf` or `-inf`.
///
/// # Example
/// ```
/// use hsolver::{
///     error::Diagnostics,
///     interpreter::{
///         format::format_real,
///         settings::{Radix, Settings},
///     },
/// };
///
/// let mut settings = Settings::default();
/// let mut diagnostics = Diagnostics::new();
///
/// assert_eq!(format_real(0.1 + 0.2, &settings, &mut diagnostics), "0.3");
/// assert_eq!(format_real(2e15, &settings, &mut diagnostics), "2.000 * 10^15");
///
/// settings.radix = Radix::Hexadecimal;
/// assert_eq!(format_real(-255.5, &settings, &mut diagnostics), "-0xFF.8");
/// ```
#[must_use]
pub fn format_real(value: f64, settings: &Settings, diagnostics: &mut Diagnostics) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let magnitude = value.abs();
    if settings.radix == Radix::Decimal
       && magnitude >= EPSILON
       && (magnitude < settings.scientific_min || magnitude >= settings.scientific_max)
    {
        return format_scientific(value, settings.decimal_separator_out);
    }

    let digits = format_digits(magnitude, settings, diagnostics);
    let sign = if value < 0.0 && digits != "0" { "-" } else { "" };
    format!("{sign}{}{digits}", settings.radix.prefix())
}

/// Formats `value` as `<mantissa> * 10^<exponent>` with the exponent a
/// multiple of three and three fractional mantissa digits.
fn format_scientific(value: f64, decimal_separator: char) -> String {
    let mut exponent = i64_to_i32_saturating(f64_floor_to_i64(value.abs().log10())).div_euclid(3) * 3;
    let mut mantissa = value / 10f64.powi(exponent);

    // Rounding to three digits can carry the mantissa up to 1000.
    if format!("{:.3}", mantissa.abs()).len() > "999.999".len() {
        exponent += 3;
        mantissa /= 1000.0;
    }

    let mantissa = format!("{mantissa:.3}").replace('.', &decimal_separator.to_string());
    format!("{mantissa} * 10^{exponent}")
}

/// Generates the digits of a non-negative value in the output radix, without
/// sign or prefix.
///
/// Fractional digits are limited to what an `f64` holds reliably next to the
/// integer digits, and the value is rounded at the last one shown. Radixes
/// without fractional support show the integer part only and warn if a
/// fraction was dropped. Binary output is padded to whole nibbles.
fn format_digits(magnitude: f64, settings: &Settings, diagnostics: &mut Diagnostics) -> String {
    let radix = settings.radix;
    let base = u32_to_f64(radix.base());

    let (magnitude, fractional_digits) = if radix.supports_fraction() {
        let used = integer_digits(magnitude.trunc(), radix).len();
        let places = settings.fractional_digits
                             .min(significant_digits(radix).saturating_sub(used));
        let exponent = i32::try_from(places).unwrap_or(i32::MAX);
        (magnitude + 0.5 * base.powi(exponent.saturating_neg()), places)
    } else {
        if magnitude.fract() >= EPSILON {
            diagnostics.warn(Warning::FractionUnsupported { radix: radix.name() });
        }
        (magnitude.trunc(), 0)
    };

    let mut integer = integer_digits(magnitude.trunc(), radix);
    if radix == Radix::Binary && !integer.is_empty() {
        let padding = integer.len().next_multiple_of(4) - integer.len();
        integer.extend(std::iter::repeat_n(0, padding));
    }

    let mut text = String::new();
    for (place, &digit) in integer.iter().enumerate().rev() {
        text.push(digit_char(digit));
        if settings.digit_grouping && place > 0 && place % radix.group_size() == 0 {
            text.push(settings.digit_separator_out);
        }
    }
    if text.is_empty() {
        text.push('0');
    }

    let fraction = fraction_digits(magnitude.fract(), radix, fractional_digits);
    if !fraction.is_empty() {
        text.push(settings.decimal_separator_out);
        text.extend(fraction.into_iter().map(digit_char));
    }

    text
}

/// How many digits of the radix an `f64` mantissa represents reliably.
const fn significant_digits(radix: Radix) -> usize {
    match radix {
        Radix::Binary => 52,
        Radix::Octal => 17,
        Radix::Decimal => 15,
        Radix::Hexadecimal => 13,
    }
}

/// Integer digits of `value`, least significant first. Zero has none.
fn integer_digits(mut value: f64, radix: Radix) -> Vec<u32> {
    let base = u32_to_f64(radix.base());
    let mut digits = Vec::new();
    while value >= 1.0 {
        let digit = value % base;
        digits.push(f64_to_digit(digit, radix.base()));
        value = ((value - digit) / base).trunc();
    }
    digits
}

/// Up to `limit` fractional digits of `fraction`, with trailing zeros removed.
fn fraction_digits(mut fraction: f64, radix: Radix, limit: usize) -> Vec<u32> {
    let base = u32_to_f64(radix.base());
    let mut digits = Vec::new();
    for _ in 0..limit {
        if fraction < EPSILON {
            break;
        }
        fraction *= base;
        let digit = fraction.trunc();
        digits.push(f64_to_digit(digit, radix.base()));
        fraction -= digit;
    }
    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, 16).map_or('?', |c| c.to_ascii_uppercase())
}
