use std::collections::HashMap;

use hsolver::{
    error::{Diagnostics, Error, ParseError, RuntimeError, Warning},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::to_postfix,
        settings::{Radix, Settings},
        token::{Operator, Token, render},
        value::complex::Value,
    },
};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> String {
    render(&tokenize(source, &Settings::default()).expect("tokenize"))
}

fn postfix(source: &str) -> Result<String, ParseError> {
    let tokens = tokenize(source, &Settings::default()).expect("tokenize");
    to_postfix(tokens).map(|p| render(&p))
}

#[test]
fn literals_keep_their_radix() {
    let tokens = tokenize("0b1010 0o17 0xff 12.5", &Settings::default()).unwrap();
    assert_eq!(tokens,
               vec![Token::NumberLiteral { digits: "1010".into(),
                                           radix:  Radix::Binary, },
                    Token::NumberLiteral { digits: "17".into(),
                                           radix:  Radix::Octal, },
                    Token::NumberLiteral { digits: "ff".into(),
                                           radix:  Radix::Hexadecimal, },
                    Token::NumberLiteral { digits: "12.5".into(),
                                           radix:  Radix::Decimal, },
                    Token::Eof]);
}

#[test]
fn literal_runs_stop_at_non_digits() {
    assert_eq!(tokens("0b102"), "0b10 2");
    assert_eq!(tokens("2pi"), "2 pi");
    assert_eq!(tokens("12abc"), "12 abc");
}

#[test]
fn unary_minus_is_folded_into_literals() {
    assert_eq!(tokens("-2"), "-2");
    assert_eq!(tokens("3 - -2"), "3 - -2");
    assert_eq!(tokens("f(-1, -0x2)"), "f ( -1 , -0x2 )");
    assert_eq!(tokens("4-2"), "4 - 2");
    assert_eq!(tokens("-x"), "- x");
}

#[test]
fn unknown_characters_are_skipped() {
    assert_eq!(tokens("1 # 2 $"), "1 2");
    assert_eq!(tokens("a;b"), "a b");
}

#[test]
fn bitwise_operator_tokens() {
    let tokens = tokenize("& | ~ < >", &Settings::default()).unwrap();
    let ops = tokens.iter()
                    .filter_map(|t| match t {
                        Token::Operator(op) => Some(*op),
                        _ => None,
                    })
                    .collect::<Vec<_>>();
    assert_eq!(ops,
               vec![Operator::BitAnd,
                    Operator::BitOr,
                    Operator::BitXor,
                    Operator::ShiftLeft,
                    Operator::ShiftRight]);
}

#[test]
fn configurable_separators() {
    let settings = Settings { decimal_separator_in: ',',
                              digit_separator_in: '\'',
                              ..Settings::default() };
    let context = Context { settings,
                            ..Context::new() };
    let mut diagnostics = Diagnostics::new();

    assert_eq!(context.evaluate("1'000,5 * 2", &mut diagnostics), Ok(Value::real(2001.0)));
    assert!(diagnostics.warnings().is_empty());
}

#[test]
fn shunting_yard_precedence() {
    assert_eq!(postfix("1 + 2 * 3 ^ 4").unwrap(), "1 2 3 4 ^ * +");
    assert_eq!(postfix("1 | 2 ~ 3 & 4 < 5 + 6").unwrap(), "1 2 3 4 5 6 + < & ~ |");
    assert_eq!(postfix("2 ^ 3 ^ 2").unwrap(), "2 3 ^ 2 ^");
}

#[test]
fn function_calls_follow_their_arguments() {
    assert_eq!(postfix("f(1 + 2, 3)").unwrap(), "1 2 + 3 f");
    assert_eq!(postfix("g(f(1), 2)").unwrap(), "1 f 2 g");
    assert_eq!(postfix("k()").unwrap(), "k");
}

#[test]
fn implied_multiplication_is_inserted() {
    assert_eq!(postfix("2(3 + 4)").unwrap(), "2 3 4 + *");
    assert_eq!(postfix("2pi").unwrap(), "2 pi *");
    assert_eq!(postfix("(1)(2)").unwrap(), "1 2 *");
    assert_eq!(postfix("2 sqrt(4)").unwrap(), "2 4 sqrt *");
    assert_eq!(postfix("x y").unwrap(), "x y *");
}

#[test]
fn imbalance_is_reported() {
    assert_eq!(postfix("(1"), Err(ParseError::UnmatchedOpeningParen));
    assert_eq!(postfix("1)"), Err(ParseError::UnmatchedClosingParen));
    assert_eq!(postfix("1, 2"), Err(ParseError::UnexpectedComma));
}

#[test]
fn evaluation_with_bindings() {
    let context = Context::new();
    let mut diagnostics = Diagnostics::new();
    let postfix = to_postfix(tokenize("a * pi + b", &context.settings).unwrap()).unwrap();
    let bindings = HashMap::from([("a".to_string(), Value::real(2.0)),
                                  ("pi".to_string(), Value::real(3.0)),
                                  ("b".to_string(), Value::real(1.0))]);

    let value = context.eval_postfix(&postfix, Some(&bindings), &mut diagnostics);
    assert_eq!(value, Ok(Value::real(7.0)));
}

#[test]
fn missing_operands_count_as_zero() {
    let context = Context::new();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(context.evaluate("*3", &mut diagnostics), Ok(Value::real(0.0)));
    assert_eq!(context.evaluate("-(1 + 1)", &mut diagnostics), Ok(Value::real(-2.0)));
}

#[test]
fn failures_carry_partial_results() {
    let context = Context::new();
    let mut diagnostics = Diagnostics::new();

    let failure = context.evaluate("2 + 3 + missing", &mut diagnostics).unwrap_err();
    assert_eq!(failure.error,
               Error::Runtime(RuntimeError::UnknownVariable { name: "missing".into() }));
    assert_eq!(failure.partial, Some(Value::real(5.0)));

    let failure = context.evaluate("(", &mut diagnostics).unwrap_err();
    assert_eq!(failure.partial, None);
}

#[test]
fn extra_operands_are_reported() {
    let context = Context::new();
    let mut diagnostics = Diagnostics::new();
    let postfix = vec![Token::NumberLiteral { digits: "1".into(),
                                              radix:  Radix::Decimal, },
                       Token::NumberLiteral { digits: "2".into(),
                                              radix:  Radix::Decimal, }];

    let value = context.eval_postfix(&postfix, None, &mut diagnostics);
    assert_eq!(value, Ok(Value::real(2.0)));
    assert_eq!(diagnostics.take(), vec![Warning::ExtraOperands { count: 1 }]);
}

#[test]
fn stray_tokens_are_rejected_by_the_evaluator() {
    let context = Context::new();
    let failure = context.eval_postfix(&[Token::Comma], None, &mut Diagnostics::new())
                         .unwrap_err();
    assert_eq!(failure.error,
               Error::Runtime(RuntimeError::UnexpectedToken { token: ",".into() }));
}

#[test]
fn recursion_through_user_functions() {
    let mut context = Context::new();
    let mut diagnostics = Diagnostics::new();
    context.define_function("half", vec!["x".into()], "x / 2");
    context.define_function("quarter", vec!["x".into()], "half(half(x))");

    assert_eq!(context.evaluate("quarter(10)", &mut diagnostics), Ok(Value::real(2.5)));
}
