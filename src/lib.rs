//! # hsolver
//!
//! hsolver is an interactive calculator written in Rust. It evaluates infix
//! expressions over complex numbers, reading and printing binary, octal,
//! decimal and hexadecimal, with variables, user-defined functions and
//! configurable separators.
//!
//! A line passes through the tokenizer, the shunting-yard reorderer and the
//! postfix evaluator; the result is then rendered by the formatter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// reordering or evaluating a line, and the non-fatal warnings reported next
/// to a result.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Collects warnings in a sink threaded through evaluation.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a line.
///
/// This module ties together lexing, reordering, evaluation, formatting and
/// the session state. It exposes the public API for evaluating lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and
///   formatter.
/// - Provides entry points for evaluating lines against a context.
pub mod interpreter;
/// General utilities for numeric conversion and checked buffer growth.
///
/// # Responsibilities
/// - Convert between `i64`, `u32` and `f64` without silent surprises.
/// - Grow buffers without aborting when memory runs out.
pub mod util;

pub use interpreter::{
    evaluator::core::Context,
    session::{LineOutcome, evaluate_line, evaluate_line_to},
};

/// Creates a context with the default constants, builtin functions and
/// settings.
///
/// # Examples
/// ```
/// use hsolver::{LineOutcome, default_context, evaluate_line_to};
///
/// let mut context = default_context();
/// let mut out = Vec::new();
///
/// evaluate_line_to("f(a, b) = a*a+b", &mut context, &mut out).unwrap();
/// evaluate_line_to("f(2, 3)", &mut context, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "f(a, b) = a*a+b\n7\n");
///
/// // A syntax error fails the line and leaves `ans` untouched.
/// let mut out = Vec::new();
/// let outcome = evaluate_line_to("(1 + 2", &mut context, &mut out).unwrap();
/// assert!(matches!(outcome, LineOutcome::Failed(_)));
/// assert_eq!(context.ans().re, 7.0);
/// ```
#[must_use]
pub fn default_context() -> Context {
    Context::new()
}
