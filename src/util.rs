/// Buffer growth helpers.
///
/// Every growable buffer in the pipeline (token list, postfix output, operand
/// stack) grows through these helpers so that an allocation failure surfaces as
/// an error for the current evaluation instead of aborting the process.
pub mod alloc;
/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64`, `i64` and `u32` used by
/// the bitwise operators, the literal parser and the output formatter. Each
/// helper documents how it treats values that do not fit the target type.
pub mod num;
