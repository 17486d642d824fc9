/// Shunting-yard reordering.
///
/// Converts an infix token stream into postfix (RPN) order, resolving operator
/// precedence, function calls and implied multiplication.
pub mod core;

/// Assignment targets.
///
/// Splits a line at `=` and parses its left side into either a variable name
/// or a function signature.
pub mod assignment;
