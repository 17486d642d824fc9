use crate::util::alloc::AllocationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix stream.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Fewer operands were available than the function declares parameters.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The declared number of parameters.
        expected: usize,
        /// The number of operands that were available.
        found:    usize,
    },
    /// Divisor magnitude below the comparison epsilon.
    DivisionByZero,
    /// A real-only operation received an operand with an imaginary part.
    ComplexUnsupported {
        /// The operation that rejected the operand.
        operation: &'static str,
    },
    /// A reserved setting was assigned a value it cannot hold.
    InvalidSetting {
        /// The setting name.
        name:    &'static str,
        /// Why the value was rejected.
        details: String,
    },
    /// The operand stack was empty once the postfix stream was consumed.
    EmptyResult,
    /// A token that the reorderer should have consumed reached the evaluator.
    UnexpectedToken {
        /// The token, rendered as text.
        token: String,
    },
    /// A buffer could not grow while evaluating.
    OutOfMemory(AllocationError),
}

impl RuntimeError {
    /// Whether this error belongs to the domain-error family.
    ///
    /// Domain errors leave `NaN + NaN i` on the operand stack so it can be
    /// shown as the partial result.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::ComplexUnsupported { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' not found."),
            Self::UnknownFunction { name } => write!(f, "Function '{name}' not found."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected} argument(s), but only {found} value(s) were available."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ComplexUnsupported { operation } => write!(f,
                                                             "Complex numbers are not supported by '{operation}'."),
            Self::InvalidSetting { name, details } => {
                write!(f, "Invalid value for setting '{name}': {details}.")
            },
            Self::EmptyResult => write!(f,
                                        "Calculation produced nothing. Possibly too many operators?"),
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token '{token}' reached the evaluator.")
            },
            Self::OutOfMemory(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<AllocationError> for RuntimeError {
    fn from(e: AllocationError) -> Self {
        Self::OutOfMemory(e)
    }
}
