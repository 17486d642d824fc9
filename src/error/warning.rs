#[derive(Debug, Clone, PartialEq, Eq)]
/// Non-fatal conditions reported alongside a result.
pub enum Warning {
    /// More than one operand remained once evaluation finished.
    ExtraOperands {
        /// How many operands were left beyond the result.
        count: usize,
    },
    /// A number literal contained a character that is not a digit of its
    /// radix; the character was ignored.
    MalformedLiteral {
        /// The literal as written.
        literal:   String,
        /// The ignored character.
        character: char,
    },
    /// A real-only builtin dropped the imaginary part of its operand.
    ComplexPartIgnored {
        /// The builtin that dropped it.
        operation: &'static str,
    },
    /// The output radix cannot show fractional digits; only the integer part
    /// was printed.
    FractionUnsupported {
        /// The name of the output radix.
        radix: &'static str,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExtraOperands { count } => write!(f,
                                                    "{count} extra value(s) left at the end of the calculation, which is slightly odd."),
            Self::MalformedLiteral { literal, character } => write!(f,
                                                                    "Ignoring unexpected character '{character}' in number '{literal}'."),
            Self::ComplexPartIgnored { operation } => write!(f,
                                                             "'{operation}' only supports real numbers; the imaginary part was ignored."),
            Self::FractionUnsupported { radix } => write!(f,
                                                          "Fractional digits are not supported in {radix} output; showing the integer part only."),
        }
    }
}

/// Collects the warnings raised while evaluating and formatting one line.
///
/// The sink is threaded through every stage by mutable reference; the session
/// drains it and prints each entry before the result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { warnings: Vec::new() }
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: Warning) {
        log::debug!("warning raised: {warning:?}");
        self.warnings.push(warning);
    }

    /// The warnings recorded so far, in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Removes and returns every recorded warning.
    pub fn take(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
