use crate::util::alloc::AllocationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or reordering a line.
pub enum ParseError {
    /// A `,` appeared outside of any parenthesis.
    UnexpectedComma,
    /// A `)` had no matching `(`.
    UnmatchedClosingParen,
    /// A `(` was never closed.
    UnmatchedOpeningParen,
    /// The left side of `=` is neither a name nor a function signature.
    InvalidAssignmentTarget {
        /// The offending left-hand side.
        target: String,
    },
    /// The function signature on the left side of `=` is malformed.
    InvalidFunctionDefinition {
        /// The offending signature.
        definition: String,
    },
    /// A buffer could not grow while tokenizing or reordering.
    OutOfMemory(AllocationError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedComma => write!(f, "Unexpected comma outside of parentheses."),
            Self::UnmatchedClosingParen => {
                write!(f, "Closing parenthesis ')' without an opening one.")
            },
            Self::UnmatchedOpeningParen => {
                write!(f, "More opening than closing parentheses.")
            },
            Self::InvalidAssignmentTarget { target } => write!(f,
                                                               "Cannot assign to '{target}'. Expected a name such as x or a signature such as f(a, b)."),
            Self::InvalidFunctionDefinition { definition } => write!(f,
                                                                     "Invalid function definition '{definition}'. Example: f(x, y) = x * y"),
            Self::OutOfMemory(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<AllocationError> for ParseError {
    fn from(e: AllocationError) -> Self {
        Self::OutOfMemory(e)
    }
}
