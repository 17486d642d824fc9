/// Operator evaluation.
///
/// Applies the binary operators of a postfix stream: complex arithmetic,
/// real-only exponentiation and the componentwise bitwise operators.
pub mod operator;

/// Core evaluation logic and context management.
///
/// Contains the runtime context (variables, functions, settings), the
/// failure type carrying partial results, and the entry point that runs an
/// expression through tokenizer, reorderer and evaluator.
pub mod core;

/// Postfix stream evaluation.
///
/// Executes a postfix token stream against a context with an operand stack.
pub mod rpn;

/// Function evaluation.
///
/// Handles builtin and user-defined function calls, including the recursive
/// re-evaluation of user-defined function bodies.
pub mod function;
