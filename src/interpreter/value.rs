/// Complex number support.
///
/// Defines the `Value` type every computation produces: a complex number with
/// a real and an imaginary double-precision part. Includes the arithmetic
/// operators, the approximate equality used for all comparisons and the
/// complex square root and logarithm.
pub mod complex;
/// Number literal parsing.
///
/// Turns the digits of a `NumberLiteral` token into a `Value`, honouring the
/// literal's radix, the fractional separator and the cosmetic digit separator
/// configured in the settings.
pub mod literal;
