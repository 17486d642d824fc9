use std::collections::HashMap;

use crate::{
    error::{Diagnostics, Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::function::core::{BUILTIN_TABLE, BuiltinDef},
        lexer::tokenize,
        parser::core::to_postfix,
        settings::Settings,
        token::{Token, render},
        value::complex::{I, NAN, ONE, Value, ZERO},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Variables every fresh context starts with.
///
/// `ans` is overwritten after each evaluated line; the rest are constants that
/// a user may still reassign.
pub const DEFAULT_VARIABLES: &[(&str, Value)] =
    &[("ans", ZERO),
      ("zero", ZERO),
      ("one", ONE),
      ("inch", Value::real(0.0254)),
      ("foot", Value::real(0.3048)),
      ("mile", Value::real(1609.34)),
      ("i", I),
      ("e", Value::real(std::f64::consts::E)),
      ("pi", Value::real(std::f64::consts::PI)),
      ("tau", Value::real(std::f64::consts::TAU)),
      ("phi", Value::real(1.618_033_988_749_895)),
      ("c", Value::real(299_792_458.0))];

/// A callable entry of the function table.
#[derive(Debug, Clone)]
pub enum Function {
    /// One of the functions in [`BUILTIN_TABLE`].
    Builtin(&'static BuiltinDef),
    /// A function defined with `name(params) = body`.
    ///
    /// The body is kept as the expression text and re-tokenized on every call,
    /// so it sees the settings and variables in effect at call time.
    UserDefined {
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The body expression as written after `=`.
        body:   String,
    },
}

impl Function {
    /// The number of operands a call consumes.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Builtin(def) => def.arity.count(),
            Self::UserDefined { params, .. } => params.len(),
        }
    }
}

/// An evaluation that did not produce a result.
///
/// `partial` carries the best value available when evaluation stopped: the
/// top of the operand stack, or `NaN + NaN i` after a domain error.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Why evaluation stopped.
    pub error:   Error,
    /// The value to show as a possibly erroneous result, if any.
    pub partial: Option<Value>,
}

impl Failure {
    /// Builds a failure from a runtime error raised while `stack` was the
    /// operand stack.
    #[must_use]
    pub fn from_stack(error: RuntimeError, stack: &[Value]) -> Self {
        let partial = if error.is_domain_error() { Some(NAN) } else { stack.last().copied() };
        Self { error: error.into(),
               partial }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ParseError> for Failure {
    fn from(e: ParseError) -> Self {
        Self { error:   e.into(),
               partial: None, }
    }
}

impl From<RuntimeError> for Failure {
    fn from(e: RuntimeError) -> Self {
        Self::from_stack(e, &[])
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the calculator state: variables, the function table and
/// the display settings. It persists across lines of a session.
///
/// ## Usage
///
/// `Context` is created once and reused for every line. [`Context::evaluate`]
/// reads it to resolve names; only the session layer writes to it, after a
/// line has been evaluated.
#[derive(Debug, Clone)]
pub struct Context {
    /// Variable values by name, including `ans` and the seeded constants.
    pub variables: HashMap<String, Value>,
    /// Builtin and user-defined functions by name.
    pub functions: HashMap<String, Function>,
    /// Radix, separators and notation bounds.
    pub settings:  Settings,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context seeded with the default constants, every builtin
    /// function and the default settings.
    ///
    /// # Example
    /// ```
    /// use hsolver::interpreter::{evaluator::core::Context, value::complex::Value};
    ///
    /// let context = Context::new();
    /// assert_eq!(context.variable("ans"), Some(Value::real(0.0)));
    /// assert!(context.functions.contains_key("sqrt"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let variables = DEFAULT_VARIABLES.iter()
                                         .map(|(name, value)| ((*name).to_string(), *value))
                                         .collect();
        let functions = BUILTIN_TABLE.iter()
                                     .map(|def| (def.name.to_string(), Function::Builtin(def)))
                                     .collect();

        Self { variables,
               functions,
               settings: Settings::default() }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Creates or overwrites a variable.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// The result of the last evaluated line.
    #[must_use]
    pub fn ans(&self) -> Value {
        self.variable("ans").unwrap_or(ZERO)
    }

    /// Creates or replaces a user-defined function.
    ///
    /// A user function may shadow a builtin of the same name.
    pub fn define_function(&mut self, name: &str, params: Vec<String>, body: &str) {
        log::debug!("defining {name}({}) = {body}", params.join(", "));
        self.functions.insert(name.to_string(),
                              Function::UserDefined { params,
                                                      body: body.to_string() });
    }

    /// Evaluates an expression against this context.
    ///
    /// The expression is tokenized with the current settings, reordered into
    /// postfix form and then evaluated. Warnings are collected in
    /// `diagnostics`; the context itself is not modified.
    ///
    /// # Errors
    /// Returns a [`Failure`] carrying the parse or runtime error and, where
    /// one exists, a partial result.
    ///
    /// # Example
    /// ```
    /// use hsolver::{
    ///     error::Diagnostics,
    ///     interpreter::{evaluator::core::Context, value::complex::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let mut diagnostics = Diagnostics::new();
    ///
    /// let value = context.evaluate("2 + 3 * 4", &mut diagnostics).unwrap();
    /// assert_eq!(value, Value::real(14.0));
    ///
    /// let failure = context.evaluate("1 / 0", &mut diagnostics).unwrap_err();
    /// assert!(failure.partial.is_some_and(|v| v.re.is_nan()));
    /// ```
    pub fn evaluate(&self,
                    expression: &str,
                    diagnostics: &mut Diagnostics)
                    -> Result<Value, Failure> {
        self.evaluate_with_bindings(expression, None, diagnostics)
    }

    /// Evaluates an expression with parameter bindings that shadow variables.
    ///
    /// Used for user-defined function bodies; `bindings` maps each parameter to
    /// its argument.
    pub(crate) fn evaluate_with_bindings(&self,
                                         expression: &str,
                                         bindings: Option<&HashMap<String, Value>>,
                                         diagnostics: &mut Diagnostics)
                                         -> Result<Value, Failure> {
        let tokens = tokenize(expression, &self.settings).map_err(ParseError::from)?;
        self.evaluate_tokens(tokens, bindings, diagnostics)
    }

    /// Evaluates an already tokenized infix expression.
    ///
    /// # Errors
    /// Returns a [`Failure`] if the tokens cannot be reordered or evaluated.
    pub fn evaluate_tokens(&self,
                           tokens: Vec<Token>,
                           bindings: Option<&HashMap<String, Value>>,
                           diagnostics: &mut Diagnostics)
                           -> Result<Value, Failure> {
        log::debug!("tokens: {}", render(&tokens));

        let postfix = to_postfix(tokens)?;
        log::debug!("postfix: {}", render(&postfix));

        self.eval_postfix(&postfix, bindings, diagnostics)
    }
}
