use hsolver::{
    Context,
    error::{Diagnostics, Warning},
    interpreter::{
        format::{format_real, format_value},
        settings::{Radix, Settings},
        value::complex::Value,
    },
};
use pretty_assertions::assert_eq;

fn format_with(value: f64, settings: &Settings) -> String {
    format_real(value, settings, &mut Diagnostics::new())
}

fn format_in(value: f64, radix: Radix) -> String {
    let settings = Settings { radix,
                              ..Settings::default() };
    format_with(value, &settings)
}

#[test]
fn decimal_digits_are_trimmed() {
    assert_eq!(format_in(14.0, Radix::Decimal), "14");
    assert_eq!(format_in(0.5, Radix::Decimal), "0.5");
    assert_eq!(format_in(-1000.25, Radix::Decimal), "-1000.25");
    assert_eq!(format_in(0.0, Radix::Decimal), "0");
    assert_eq!(format_in(-0.0, Radix::Decimal), "0");
}

#[test]
fn decimal_digits_are_rounded() {
    assert_eq!(format_in(0.1 + 0.2, Radix::Decimal), "0.3");
    assert_eq!(format_in(1.0 / 3.0, Radix::Decimal), "0.3333333333333");
    assert_eq!(format_in(2.0 / 3.0, Radix::Decimal), "0.6666666666667");
    assert_eq!(format_in(std::f64::consts::PI, Radix::Decimal), "3.1415926535898");
    assert_eq!(format_in(1609.34 * 2.0, Radix::Decimal), "3218.68");
    assert_eq!(format_in(0.999_999_999_999_99, Radix::Decimal), "1");
}

#[test]
fn fractional_digit_limit() {
    let settings = Settings { fractional_digits: 3,
                              ..Settings::default() };
    assert_eq!(format_with(std::f64::consts::PI, &settings), "3.142");
    assert_eq!(format_with(2.0, &settings), "2");
}

#[test]
fn scientific_notation_uses_multiples_of_three() {
    assert_eq!(format_in(2e15, Radix::Decimal), "2.000 * 10^15");
    assert_eq!(format_in(1.234_56e17, Radix::Decimal), "123.456 * 10^15");
    assert_eq!(format_in(1e-5, Radix::Decimal), "10.000 * 10^-6");
    assert_eq!(format_in(-2.5e-4 / 10.0, Radix::Decimal), "-25.000 * 10^-6");
    assert_eq!(format_in(999_999_999_999_999.0, Radix::Decimal), "999999999999999");
}

#[test]
fn scientific_mantissa_carries_over() {
    assert_eq!(format_in(999.9999e15, Radix::Decimal), "1.000 * 10^18");
}

#[test]
fn scientific_notation_only_in_decimal() {
    assert_eq!(format_in(2e15, Radix::Hexadecimal), "0x71AFD498D0000");
}

#[test]
fn scientific_bounds_follow_settings() {
    let settings = Settings { scientific_min: 1.0,
                              scientific_max: 100.0,
                              ..Settings::default() };
    assert_eq!(format_with(0.5, &settings), "500.000 * 10^-3");
    assert_eq!(format_with(50.0, &settings), "50");
    assert_eq!(format_with(100.0, &settings), "100.000 * 10^0");
    assert_eq!(format_with(0.0, &settings), "0");
}

#[test]
fn radix_prefixes_and_digits() {
    assert_eq!(format_in(255.0, Radix::Hexadecimal), "0xFF");
    assert_eq!(format_in(-255.0, Radix::Hexadecimal), "-0xFF");
    assert_eq!(format_in(255.5, Radix::Hexadecimal), "0xFF.8");
    assert_eq!(format_in(8.0, Radix::Octal), "0o10");
    assert_eq!(format_in(0.0, Radix::Hexadecimal), "0x0");
}

#[test]
fn binary_is_nibble_aligned() {
    assert_eq!(format_in(5.0, Radix::Binary), "0b0101");
    assert_eq!(format_in(16.0, Radix::Binary), "0b00010000");
    assert_eq!(format_in(0.0, Radix::Binary), "0b0");
}

#[test]
fn fractions_unsupported_in_binary_and_octal() {
    let settings = Settings { radix: Radix::Binary,
                              ..Settings::default() };
    let mut diagnostics = Diagnostics::new();

    assert_eq!(format_real(2.5, &settings, &mut diagnostics), "0b0010");
    assert_eq!(diagnostics.take(),
               vec![Warning::FractionUnsupported { radix: "binary" }]);

    assert_eq!(format_real(2.0, &settings, &mut diagnostics), "0b0010");
    assert!(diagnostics.warnings().is_empty());
}

#[test]
fn digit_grouping() {
    let mut settings = Settings { digit_grouping: true,
                                  ..Settings::default() };
    assert_eq!(format_with(1_234_567.0, &settings), "1_234_567");
    assert_eq!(format_with(1234.5678, &settings), "1_234.5678");
    assert_eq!(format_with(123.0, &settings), "123");

    settings.radix = Radix::Binary;
    assert_eq!(format_with(255.0, &settings), "0b1111_1111");

    settings.radix = Radix::Hexadecimal;
    assert_eq!(format_with(65535.0 * 16.0, &settings), "0xF_FFF0");

    settings.radix = Radix::Octal;
    assert_eq!(format_with(64.0, &settings), "0o1_00");
}

#[test]
fn custom_separators() {
    let settings = Settings { decimal_separator_out: ',',
                              digit_separator_out: '.',
                              digit_grouping: true,
                              ..Settings::default() };
    assert_eq!(format_with(1234.5, &settings), "1.234,5");
    assert_eq!(format_with(2e15, &settings), "2,000 * 10^15");
}

#[test]
fn non_finite_values() {
    assert_eq!(format_in(f64::NAN, Radix::Decimal), "NaN");
    assert_eq!(format_in(f64::INFINITY, Radix::Hexadecimal), "inf");
    assert_eq!(format_in(f64::NEG_INFINITY, Radix::Decimal), "-inf");
}

#[test]
fn complex_values() {
    let settings = Settings::default();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(format_value(Value::new(3.0, 4.0), &settings, &mut diagnostics), "(3 + 4i)");
    assert_eq!(format_value(Value::new(3.0, -4.0), &settings, &mut diagnostics), "(3 - 4i)");
    assert_eq!(format_value(Value::new(0.0, 1.0), &settings, &mut diagnostics), "(0 + 1i)");
    assert_eq!(format_value(Value::new(2.0, 1e-21), &settings, &mut diagnostics), "2");
    assert_eq!(format_value(Value::new(f64::NAN, f64::NAN), &settings, &mut diagnostics),
               "(NaN + NaNi)");
}

#[test]
fn integer_constants_read_back_in_every_radix() {
    let mut context = Context::new();
    let mut diagnostics = Diagnostics::new();

    for radix in [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
        for grouping in [false, true] {
            context.settings = Settings { radix,
                                          digit_grouping: grouping,
                                          scientific_max: f64::INFINITY,
                                          ..Settings::default() };
            for name in ["zero", "one", "c"] {
                let value = context.variable(name).unwrap();
                let text = format_value(value, &context.settings, &mut diagnostics);
                let parsed = context.evaluate(&text.to_lowercase(), &mut diagnostics);
                assert_eq!(parsed, Ok(value), "{name} printed as {text}");

                let text = format_value(-value, &context.settings, &mut diagnostics);
                let parsed = context.evaluate(&text.to_lowercase(), &mut diagnostics);
                assert_eq!(parsed, Ok(-value), "-{name} printed as {text}");
            }
        }
    }
    assert!(diagnostics.warnings().is_empty());
}
