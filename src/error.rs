/// Parsing errors.
///
/// Defines the errors raised while tokenizing a line, splitting off its
/// assignment target and reordering it into postfix form. Any of these aborts
/// the current line before evaluation starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that can be raised while evaluating a postfix stream,
/// such as unknown names, division by zero or a complex operand given to a
/// real-only operation.
pub mod runtime_error;
/// Warnings.
///
/// Non-fatal conditions that are reported next to a result without stopping
/// the evaluation.
pub mod warning;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use warning::{Diagnostics, Warning};

/// Any error that aborts the evaluation of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be tokenized or reordered.
    Parse(ParseError),
    /// The postfix stream could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
