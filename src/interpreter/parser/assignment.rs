use std::fmt::Display;

use crate::{
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::ParseResult, settings::Settings, token::Token},
};

/// The left side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `x = ...` defines or updates a variable (or a reserved setting).
    Variable(String),
    /// `f(a, b) = ...` defines or replaces a function.
    Function {
        /// The function name.
        name:   String,
        /// The parameter names, in declaration order.
        params: Vec<String>,
    },
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Function { name, params } => write!(f, "{name}({})", params.join(", ")),
        }
    }
}

/// Splits a line at its first `=` into an optional left side and the
/// expression on the right.
///
/// # Example
/// ```
/// use hsolver::interpreter::parser::assignment::split_assignment;
///
/// assert_eq!(split_assignment("f(a) = a * 2"), (Some("f(a)"), "a * 2"));
/// assert_eq!(split_assignment("1 + 2"), (None, "1 + 2"));
/// ```
#[must_use]
pub fn split_assignment(line: &str) -> (Option<&str>, &str) {
    match line.split_once('=') {
        Some((target, expression)) => (Some(target.trim()), expression.trim()),
        None => (None, line.trim()),
    }
}

/// Parses the left side of an assignment.
///
/// A single name is a variable. A name followed by a parenthesised,
/// comma-separated list of names is a function signature; the list may be
/// empty.
///
/// # Errors
/// - [`ParseError::InvalidFunctionDefinition`] if a signature is malformed.
/// - [`ParseError::InvalidAssignmentTarget`] for anything else.
///
/// # Example
/// ```
/// use hsolver::interpreter::{
///     parser::assignment::{Target, parse_target},
///     settings::Settings,
/// };
///
/// let settings = Settings::default();
/// assert_eq!(parse_target("x", &settings).unwrap(), Target::Variable("x".into()));
/// assert_eq!(parse_target("f(a, b)", &settings).unwrap(),
///            Target::Function { name:   "f".into(),
///                               params: vec!["a".into(), "b".into()], });
/// assert!(parse_target("2", &settings).is_err());
/// assert!(parse_target("f(a b)", &settings).is_err());
/// ```
pub fn parse_target(target: &str, settings: &Settings) -> ParseResult<Target> {
    let tokens = tokenize(target, settings)?;

    match tokens.as_slice() {
        [Token::Identifier(name), Token::Eof] => Ok(Target::Variable(name.clone())),
        [Token::Identifier(name), Token::OpenParen, rest @ ..] => {
            let Some(params) = parse_parameters(rest) else {
                return Err(ParseError::InvalidFunctionDefinition { definition: target.to_string() });
            };
            Ok(Target::Function { name: name.clone(),
                                  params })
        },
        _ => Err(ParseError::InvalidAssignmentTarget { target: target.to_string() }),
    }
}

/// Parses `a, b, c) <eof>` into `["a", "b", "c"]`.
///
/// Returns `None` unless names and commas alternate and the list is closed by
/// the last tokens of the line.
fn parse_parameters(tokens: &[Token]) -> Option<Vec<String>> {
    let mut params = Vec::new();
    let mut tokens = tokens.iter();

    if let [Token::CloseParen, Token::Eof] = tokens.as_slice() {
        return Some(params);
    }
    loop {
        match tokens.next()? {
            Token::Identifier(name) => params.push(name.clone()),
            _ => return None,
        }
        match tokens.next()? {
            Token::Comma => {},
            Token::CloseParen => break,
            _ => return None,
        }
    }

    (tokens.as_slice() == [Token::Eof]).then_some(params)
}
