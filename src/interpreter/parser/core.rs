use crate::{
    error::ParseError,
    interpreter::token::{Operator, Token},
    util::alloc::push_checked,
};

/// Result type used by the reorderer and the assignment parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token stream into postfix (RPN) order.
///
/// This is the shunting-yard algorithm with two additions:
///
/// - An identifier directly followed by `(` is a function call. It waits on
///   the operator stack and is emitted after its arguments once the matching
///   `)` is reached. Any other identifier becomes a [`Token::VariableRef`].
/// - When a literal, identifier or `(` directly follows a completed value, a
///   multiplication is inserted first, so `2(3+4)`, `2pi` and `(1+1)(2+2)`
///   multiply.
///
/// Operators of equal precedence pop each other, which makes every operator
/// left-associative, `^` included. Processing stops at [`Token::Eof`]; the
/// returned stream does not contain it.
///
/// # Errors
/// - [`ParseError::UnexpectedComma`] for a comma outside of parentheses.
/// - [`ParseError::UnmatchedClosingParen`] for a `)` without a `(`.
/// - [`ParseError::UnmatchedOpeningParen`] for a `(` that is never closed.
/// - [`ParseError::OutOfMemory`] if a buffer cannot grow.
///
/// # Example
/// ```
/// use hsolver::interpreter::{
///     lexer::tokenize,
///     parser::core::to_postfix,
///     settings::Settings,
///     token::render,
/// };
///
/// let settings = Settings::default();
/// let postfix = to_postfix(tokenize("2+3*4", &settings).unwrap()).unwrap();
/// assert_eq!(render(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(tokenize("f(1, 2x)", &settings).unwrap()).unwrap();
/// assert_eq!(render(&postfix), "1 2 x * f");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::new();
    let mut stack = Vec::new();
    let mut after_value = false;
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        match token {
            Token::Eof => break,
            Token::NumberLiteral { .. } | Token::VariableRef(_) => {
                if after_value {
                    push_operator(Operator::Multiply, &mut output, &mut stack)?;
                }
                push_checked(&mut output, token, "postfix output")?;
                after_value = true;
            },
            Token::Identifier(name) => {
                if after_value {
                    push_operator(Operator::Multiply, &mut output, &mut stack)?;
                }
                if tokens.peek() == Some(&Token::OpenParen) {
                    push_checked(&mut stack, Token::Identifier(name), "operator stack")?;
                    after_value = false;
                } else {
                    push_checked(&mut output, Token::VariableRef(name), "postfix output")?;
                    after_value = true;
                }
            },
            Token::OpenParen => {
                if after_value {
                    push_operator(Operator::Multiply, &mut output, &mut stack)?;
                }
                push_checked(&mut stack, Token::OpenParen, "operator stack")?;
                after_value = false;
            },
            Token::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenParen) => break,
                        Some(top) => push_checked(&mut output, top, "postfix output")?,
                        None => return Err(ParseError::UnmatchedClosingParen),
                    }
                }
                if matches!(stack.last(), Some(Token::Identifier(_)))
                   && let Some(call) = stack.pop()
                {
                    push_checked(&mut output, call, "postfix output")?;
                }
                after_value = true;
            },
            Token::Comma => {
                while !matches!(stack.last(), Some(Token::OpenParen)) {
                    let top = stack.pop().ok_or(ParseError::UnexpectedComma)?;
                    push_checked(&mut output, top, "postfix output")?;
                }
                after_value = false;
            },
            Token::Operator(op) => {
                push_operator(op, &mut output, &mut stack)?;
                after_value = false;
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::OpenParen {
            return Err(ParseError::UnmatchedOpeningParen);
        }
        push_checked(&mut output, top, "postfix output")?;
    }

    Ok(output)
}

/// Pushes `op` onto the operator stack after popping every stacked operator
/// of equal or higher precedence into the output.
///
/// Popping stops at `(` and at pending function calls.
fn push_operator(op: Operator,
                 output: &mut Vec<Token>,
                 stack: &mut Vec<Token>)
                 -> ParseResult<()> {
    while let Some(Token::Operator(top)) = stack.last()
          && top.precedence() >= op.precedence()
    {
        let top = Token::Operator(*top);
        stack.pop();
        push_checked(output, top, "postfix output")?;
    }
    push_checked(stack, Token::Operator(op), "operator stack")?;
    Ok(())
}
