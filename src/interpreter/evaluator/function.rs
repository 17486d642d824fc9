/// Built-in function implementations.
///
/// Contains the mathematical functions available by default, such as `sqrt`,
/// `ln` or `sin`.
pub mod builtin;

/// Function table and call dispatch.
///
/// Declares the builtin table and resolves calls to builtin or user-defined
/// functions.
pub mod core;
