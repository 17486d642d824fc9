use std::collections::HashMap;

use crate::{
    error::{Diagnostics, RuntimeError, Warning},
    interpreter::{
        evaluator::core::{Context, Failure},
        token::Token,
        value::{
            complex::{Value, ZERO},
            literal::parse_literal,
        },
    },
    util::alloc::push_checked,
};

impl Context {
    /// Evaluates a postfix token stream.
    ///
    /// Literals and variables are pushed onto an operand stack. An operator
    /// pops its right then its left operand; a missing operand counts as zero,
    /// which is what makes `-x` and `-(...)` evaluate as `0 - x`. A function
    /// name pops as many operands as the function declares.
    ///
    /// # Parameters
    /// - `postfix`: The stream produced by
    ///   [`to_postfix`](crate::interpreter::parser::core::to_postfix).
    /// - `bindings`: Parameter values that shadow variables of the same name.
    /// - `diagnostics`: Sink for warnings.
    ///
    /// # Returns
    /// The value on top of the stack once the stream is consumed.
    ///
    /// # Errors
    /// Returns a [`Failure`] if a token cannot be evaluated or the stack ends
    /// up empty.
    pub fn eval_postfix(&self,
                        postfix: &[Token],
                        bindings: Option<&HashMap<String, Value>>,
                        diagnostics: &mut Diagnostics)
                        -> Result<Value, Failure> {
        let mut stack = Vec::new();

        for token in postfix {
            let value = self.eval_token(token, &mut stack, bindings, diagnostics)?;
            push_checked(&mut stack, value, "operand stack").map_err(|e| {
                                                                 Failure::from_stack(e.into(),
                                                                                     &stack)
                                                             })?;
        }

        match stack.as_slice() {
            [] => Err(RuntimeError::EmptyResult.into()),
            [.., result] => {
                if stack.len() > 1 {
                    diagnostics.warn(Warning::ExtraOperands { count: stack.len() - 1 });
                }
                Ok(*result)
            },
        }
    }

    /// Evaluates one token, consuming its operands from `stack`, and returns
    /// the value to push.
    fn eval_token(&self,
                  token: &Token,
                  stack: &mut Vec<Value>,
                  bindings: Option<&HashMap<String, Value>>,
                  diagnostics: &mut Diagnostics)
                  -> Result<Value, Failure> {
        match token {
            Token::NumberLiteral { digits, radix } => {
                Ok(parse_literal(digits, *radix, &self.settings, diagnostics))
            },
            Token::VariableRef(name) => {
                self.lookup(name, bindings).ok_or_else(|| {
                                               Failure::from_stack(RuntimeError::UnknownVariable { name: name.clone() },
                                                                   stack)
                                           })
            },
            Token::Identifier(name) => self.call_function(name, stack, bindings, diagnostics),
            Token::Operator(op) => {
                let rhs = stack.pop().unwrap_or(ZERO);
                let lhs = stack.pop().unwrap_or(ZERO);
                op.apply(lhs, rhs).map_err(|e| Failure::from_stack(e, stack))
            },
            other => {
                Err(Failure::from_stack(RuntimeError::UnexpectedToken { token: other.to_string() },
                                        stack))
            },
        }
    }

    /// Resolves a name, preferring a parameter binding over a variable.
    fn lookup(&self, name: &str, bindings: Option<&HashMap<String, Value>>) -> Option<Value> {
        bindings.and_then(|b| b.get(name).copied())
                .or_else(|| self.variable(name))
    }
}
