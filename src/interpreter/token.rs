use std::fmt::Display;

use crate::interpreter::settings::Radix;

/// A binary operator.
///
/// Unary minus never appears as an operator: the tokenizer folds it into the
/// following number literal, and anywhere else a missing left operand
/// evaluates as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `~`
    BitXor,
    /// `<`
    ShiftLeft,
    /// `>`
    ShiftRight,
}

impl Operator {
    /// Binding strength, higher binds tighter.
    ///
    /// Every operator is treated as left-associative, `^` included, so
    /// `2^3^2` is `(2^3)^2`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::BitOr => 0,
            Self::BitXor => 1,
            Self::BitAnd => 2,
            Self::ShiftLeft | Self::ShiftRight => 3,
            Self::Add | Self::Subtract => 4,
            Self::Multiply | Self::Divide | Self::Modulo => 5,
            Self::Power => 6,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Power => '^',
            Self::BitAnd => '&',
            Self::BitOr => '|',
            Self::BitXor => '~',
            Self::ShiftLeft => '<',
            Self::ShiftRight => '>',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token of an infix or postfix stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Marks the end of a tokenized line.
    Eof,
    /// A name that has not yet been classified; in postfix streams, a function
    /// call.
    Identifier(String),
    /// A name the reorderer established is a variable, not a call.
    VariableRef(String),
    /// A number literal, with its digits kept as written.
    NumberLiteral {
        /// The digits, including separators and a folded leading `-`.
        digits: String,
        /// The radix selected by the literal's prefix.
        radix:  Radix,
    },
    /// A binary operator.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
}

impl Token {
    /// Whether a `-` directly after this token is a unary minus.
    #[must_use]
    pub const fn admits_unary_minus(&self) -> bool {
        matches!(self, Self::Operator(_) | Self::Comma | Self::OpenParen)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eof => write!(f, "<eof>"),
            Self::Identifier(name) | Self::VariableRef(name) => write!(f, "{name}"),
            Self::NumberLiteral { digits, radix } => match digits.strip_prefix('-') {
                Some(rest) => write!(f, "-{}{rest}", radix.prefix()),
                None => write!(f, "{}{digits}", radix.prefix()),
            },
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Renders a token stream as space-separated text, e.g. `2 3 4 * +`.
///
/// The trailing [`Token::Eof`] of a tokenized line is omitted.
///
/// # Example
/// ```
/// use hsolver::interpreter::token::{Operator, Token, render};
///
/// let tokens = [Token::VariableRef("pi".into()),
///               Token::Operator(Operator::Multiply),
///               Token::Eof];
/// assert_eq!(render(&tokens), "pi *");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .filter(|t| **t != Token::Eof)
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
