use std::collections::HashMap;

use crate::{
    error::{Diagnostics, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Failure, Function},
            function::builtin,
            operator::power,
        },
        value::complex::{Value, ZERO},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its first and second argument and the warning sink.
/// Unary builtins are passed zero as the second argument and ignore it.
type BuiltinFn = fn(Value, Value, &mut Diagnostics) -> EvalResult<Value>;

/// The number of arguments a builtin consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One argument.
    Unary,
    /// Two arguments.
    Binary,
}

impl Arity {
    /// The argument count as a number.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table entry),
/// - `BUILTIN_TABLE` (static table the context is seeded from).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// An entry of [`BUILTIN_TABLE`].
        pub struct BuiltinDef {
            /// The name the function is called by.
            pub name:  &'static str,
            /// How many operands a call consumes.
            pub arity: Arity,
            func:      BuiltinFn,
        }
        /// Every builtin function, in the order they are listed.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "add"      => { arity: Arity::Binary, func: |a, b, _| Ok(a + b) },
    "subtract" => { arity: Arity::Binary, func: |a, b, _| Ok(a - b) },
    "multiply" => { arity: Arity::Binary, func: |a, b, _| Ok(a * b) },
    "divide"   => { arity: Arity::Binary, func: |a, b, _| a.checked_div(b) },
    "modulo"   => { arity: Arity::Binary, func: |a, b, _| Ok(a.modulo(b)) },
    "pow"      => { arity: Arity::Binary, func: |a, b, _| power(a, b) },
    "root"     => { arity: Arity::Binary, func: builtin::root },
    "sqrt"     => { arity: Arity::Unary,  func: |a, _, _| Ok(a.sqrt()) },
    "round"    => { arity: Arity::Unary,  func: |a, _, _| Ok(a.map(f64::round)) },
    "floor"    => { arity: Arity::Unary,  func: |a, _, _| Ok(a.map(f64::floor)) },
    "ceil"     => { arity: Arity::Unary,  func: |a, _, _| Ok(a.map(f64::ceil)) },
    "abs"      => { arity: Arity::Unary,  func: |a, _, _| Ok(Value::real(a.abs())) },
    "ln"       => { arity: Arity::Unary,  func: |a, _, _| Ok(a.ln()) },
    "log2"     => { arity: Arity::Unary,  func: builtin::log2 },
    "log10"    => { arity: Arity::Unary,  func: builtin::log10 },
    "exp"      => { arity: Arity::Unary,  func: |a, _, _| Ok(a.exp()) },
    "sin"      => { arity: Arity::Unary,  func: builtin::sin },
    "cos"      => { arity: Arity::Unary,  func: builtin::cos },
    "tan"      => { arity: Arity::Unary,  func: builtin::tan },
    "asin"     => { arity: Arity::Unary,  func: builtin::asin },
    "acos"     => { arity: Arity::Unary,  func: builtin::acos },
    "atan"     => { arity: Arity::Unary,  func: builtin::atan },
    "re"       => { arity: Arity::Unary,  func: |a, _, _| Ok(Value::real(a.re)) },
    "im"       => { arity: Arity::Unary,  func: |a, _, _| Ok(Value::real(a.im)) },
    "conj"     => { arity: Arity::Unary,  func: |a, _, _| Ok(a.conj()) },
    "arg"      => { arity: Arity::Unary,  func: |a, _, _| Ok(Value::real(a.arg())) },
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl BuiltinDef {
    /// Invokes the builtin. `args` holds exactly [`Arity::count`] values.
    fn invoke(&self, args: &[Value], diagnostics: &mut Diagnostics) -> EvalResult<Value> {
        let first = args.first().copied().unwrap_or(ZERO);
        let second = args.get(1).copied().unwrap_or(ZERO);
        (self.func)(first, second, diagnostics)
    }
}

impl Context {
    /// Evaluates a function call found in a postfix stream.
    ///
    /// The function's arguments are the topmost operands of `stack`; the
    /// deepest of them is the first argument. They are removed before the
    /// call. A user-defined function evaluates its body with the arguments
    /// bound to its parameter names, layered over the bindings of the calling
    /// body, so a function called from another function still sees the
    /// caller's parameters. Calls nest as ordinary recursion, so a function
    /// that calls itself without end exhausts the call stack.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `stack`: The operand stack of the calling evaluation.
    /// - `bindings`: Parameter values of the calling body, if any.
    /// - `diagnostics`: Sink for warnings.
    ///
    /// # Returns
    /// The function result, or a [`Failure`] if lookup fails, too few operands
    /// are available or the function itself fails.
    pub(crate) fn call_function(&self,
                                name: &str,
                                stack: &mut Vec<Value>,
                                bindings: Option<&HashMap<String, Value>>,
                                diagnostics: &mut Diagnostics)
                                -> Result<Value, Failure> {
        let Some(function) = self.functions.get(name) else {
            return Err(Failure::from_stack(RuntimeError::UnknownFunction { name: name.to_string() },
                                           stack));
        };

        let expected = function.arity();
        if stack.len() < expected {
            return Err(Failure::from_stack(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                                 expected,
                                                                                 found: stack.len() },
                                           stack));
        }
        let args = stack.split_off(stack.len() - expected);

        match function {
            Function::Builtin(def) => {
                def.invoke(&args, diagnostics).map_err(|e| Failure::from_stack(e, stack))
            },
            Function::UserDefined { params, body } => {
                log::trace!("calling {name} with {args:?}");
                let mut scope = bindings.cloned().unwrap_or_default();
                scope.extend(params.iter().cloned().zip(args));

                self.evaluate_with_bindings(body, Some(&scope), diagnostics)
            },
        }
    }
}
