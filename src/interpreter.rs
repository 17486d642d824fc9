/// The command module recognises inline commands such as `hex` or `list`.
///
/// Commands are ordinary identifiers that are stripped from a line's tokens
/// before reordering. Radix commands change the output radix; the others
/// print help, the variable and function table, or the settings.
pub mod command;
/// The evaluator module executes postfix token streams.
///
/// It holds the session context (variables, functions, settings), evaluates
/// postfix streams against an operand stack, applies operators and calls
/// builtin or user-defined functions.
///
/// # Responsibilities
/// - Resolves variables and parameter bindings.
/// - Applies complex arithmetic and the real-only operations.
/// - Reports runtime errors with the best available partial result.
pub mod evaluator;
/// The format module renders values as text in the output radix.
///
/// Handles scientific notation, digit grouping, fractional digits and the
/// complex `(re + im i)` form.
pub mod format;
/// The lexer module tokenizes a line.
///
/// The lexer reads the lowercased line and produces tokens for number
/// literals, identifiers, operators and punctuation. A unary minus in front
/// of a literal is folded into it.
///
/// # Responsibilities
/// - Scans literals with radix prefixes and configurable separators.
/// - Skips characters that start no token.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// Contains the shunting-yard reorderer, which also detects function calls
/// and inserts implied multiplication, and the parser for the left side of an
/// assignment.
pub mod parser;
/// The session module runs the complete pipeline for one line.
///
/// It applies commands, dispatches assignments and definitions, updates
/// `ans` and prints results, warnings and errors.
pub mod session;
/// Display and input settings.
pub mod settings;
/// Token types shared by the lexer, parser and evaluator.
pub mod token;
/// The value module defines complex values and parses number literals.
pub mod value;
