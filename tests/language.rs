use std::fs;

use hsolver::{
    LineOutcome, default_context, evaluate_line_to,
    error::{Error, ParseError, RuntimeError},
    interpreter::value::complex::Value,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, session) in extract_sessions(&content).into_iter().enumerate() {
            count += 1;
            let inputs = session.inputs.iter().map(String::as_str).collect::<Vec<_>>();
            let output = run(&inputs);
            assert_eq!(output,
                       session.expected,
                       "session {} in {:?} printed unexpected output",
                       i + 1,
                       path);
        }
    }

    assert!(count > 0, "No hsolver sessions found in book/src");
}

/// A ```hsolver block: lines starting with `> ` are typed in, every other
/// line is expected output.
struct Session {
    inputs:   Vec<String>,
    expected: String,
}

fn extract_sessions(content: &str) -> Vec<Session> {
    let mut sessions = Vec::new();
    let mut current: Option<Session> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```hsolver") {
            current = Some(Session { inputs:   Vec::new(),
                                     expected: String::new(), });
            continue;
        }
        let Some(session) = current.as_mut() else {
            continue;
        };
        if trimmed.starts_with("```") {
            sessions.extend(current.take());
        } else if let Some(input) = line.strip_prefix("> ") {
            session.inputs.push(input.to_string());
        } else {
            session.expected.push_str(line);
            session.expected.push('\n');
        }
    }

    sessions
}

/// Evaluates `lines` in order against a fresh context and returns everything
/// printed.
fn run(lines: &[&str]) -> String {
    let mut context = default_context();
    let mut out = Vec::new();
    for line in lines {
        evaluate_line_to(line, &mut context, &mut out).unwrap_or_else(|e| {
                                                           panic!("Writing the output of {line:?} failed: {e}")
                                                       });
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn outcome(line: &str) -> LineOutcome {
    let mut context = default_context();
    evaluate_line_to(line, &mut context, &mut Vec::new()).expect("writing to a Vec succeeds")
}

fn assert_output(lines: &[&str], expected: &str) {
    assert_eq!(run(lines), expected);
}

fn assert_value(line: &str, expected: Value) {
    match outcome(line) {
        LineOutcome::Value(value) => {
            assert!((value.re - expected.re).abs() < 1e-12 && (value.im - expected.im).abs() < 1e-12,
                    "{line:?} evaluated to {value}, expected {expected}");
        },
        other => panic!("{line:?} did not produce a value: {other:?}"),
    }
}

fn assert_real(line: &str, expected: f64) {
    assert_value(line, Value::real(expected));
}

fn assert_failure(line: &str) -> Error {
    match outcome(line) {
        LineOutcome::Failed(e) => e,
        other => panic!("{line:?} was expected to fail, but gave {other:?}"),
    }
}

#[test]
fn operator_precedence() {
    assert_real("2+3*4", 14.0);
    assert_real("(2+3)*4", 20.0);
    assert_real("10 - 4 - 3", 3.0);
    assert_real("2 * 3 ^ 2", 18.0);
    assert_real("7 % 4 + 1", 4.0);
}

#[test]
fn power_is_left_associative() {
    assert_real("2^3^2", 64.0);
    assert_real("2^(3^2)", 512.0);
}

#[test]
fn implied_multiplication() {
    assert_real("2(3+4)", 14.0);
    assert_real("2pi", 2.0 * std::f64::consts::PI);
    assert_real("(1+1)(2+2)", 8.0);
    assert_real("3sqrt(4)", 6.0);
}

#[test]
fn unary_minus() {
    assert_real("-2+3", 1.0);
    assert_real("2*-3", -6.0);
    assert_real("3 - -2", 5.0);
    assert_real("2^-1", 0.5);
    assert_real("-(2+3)", -5.0);
    assert_real("-pi", -std::f64::consts::PI);
    assert_real("abs(-4)", 4.0);
}

#[test]
fn radix_literals() {
    assert_real("0xff", 255.0);
    assert_real("0b101", 5.0);
    assert_real("0o17", 15.0);
    assert_real("0x1.8", 1.5);
    assert_real("1_000_000", 1e6);
    assert_real(".5 + 0.25", 0.75);
    assert_real("0XFF", 255.0);
}

#[test]
fn division_by_zero_yields_nan() {
    assert_output(&["1/0"], "ERROR: Division by zero.\npossibly erroneous: (NaN + NaNi)\n");
    assert_eq!(assert_failure("5 / (2 - 2)"), Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn user_defined_functions() {
    assert_output(&["f(a,b) = a*a+b", "f(2,3)"], "f(a, b) = a*a+b\n7\n");
    assert_output(&["sq(x) = x*x", "sq(sq(3))"], "sq(x) = x*x\n81\n");
    assert_output(&["k() = 42", "k() + 1"], "k() = 42\n43\n");
}

#[test]
fn user_functions_see_current_variables() {
    assert_output(&["scale = 2", "g(x) = x * scale", "g(5)", "scale = 10", "g(5)"],
                  "2\ng(x) = x * scale\n10\n10\n50\n");
}

#[test]
fn nested_calls_see_the_callers_parameters() {
    assert_output(&["g() = a", "f(a) = g()", "f(3)"], "g() = a\nf(a) = g()\n3\n");
    assert_output(&["h(b) = a + b", "f(a) = h(a * 10)", "f(2)"],
                  "h(b) = a + b\nf(a) = h(a * 10)\n22\n");
}

#[test]
fn callee_parameters_shadow_the_callers() {
    assert_output(&["g(a) = a", "f(a) = g(a + 1) + a", "f(1)"],
                  "g(a) = a\nf(a) = g(a + 1) + a\n3\n");
}

#[test]
fn commands_are_rejected_in_function_bodies() {
    assert!(matches!(assert_failure("f(x) = hex x"),
                     Error::Parse(ParseError::InvalidFunctionDefinition { .. })));
    assert_output(&["f(x) = hex x", "255"],
                  "ERROR: Invalid function definition 'f(x) = hex x'. Example: f(x, y) = x * y\n255\n");
    assert_output(&["f(x) = x * 2", "f(x) = list x", "f(4)"],
                  "f(x) = x * 2\nERROR: Invalid function definition 'f(x) = list x'. Example: f(x, y) = x * y\n8\n");
}

#[test]
fn user_functions_can_shadow_builtins() {
    assert_output(&["sqrt(x) = x + 1", "sqrt(4)"], "sqrt(x) = x + 1\n5\n");
}

#[test]
fn too_few_arguments() {
    assert_output(&["f(a, b) = a + b", "f(1)"],
                  "f(a, b) = a + b\nERROR: Function 'f' expects 2 argument(s), but only 1 value(s) were available.\npossibly erroneous: 1\n");
}

#[test]
fn variables_persist_and_update_ans() {
    assert_output(&["x = 5", "x+1", "ans"], "5\n6\n6\n");
    assert_output(&["3 * 4", "ans / 2"], "12\n6\n");
}

#[test]
fn failed_lines_leave_ans_alone() {
    assert_output(&["7", "nope + 1", "ans"],
                  "7\nERROR: Variable 'nope' not found.\n7\n");
}

#[test]
fn unknown_names() {
    assert_eq!(assert_failure("foo + 1"),
               Error::Runtime(RuntimeError::UnknownVariable { name: "foo".into() }));
    assert_eq!(assert_failure("g(1)"),
               Error::Runtime(RuntimeError::UnknownFunction { name: "g".into() }));
    assert_output(&["1 + foo"], "ERROR: Variable 'foo' not found.\npossibly erroneous: 1\n");
}

#[test]
fn syntax_imbalance() {
    assert_eq!(assert_failure("("), Error::Parse(ParseError::UnmatchedOpeningParen));
    assert_eq!(assert_failure(")"), Error::Parse(ParseError::UnmatchedClosingParen));
    assert_eq!(assert_failure("1, 2"), Error::Parse(ParseError::UnexpectedComma));
    assert_output(&["(1 + 2"], "ERROR: More opening than closing parentheses.\n");
}

#[test]
fn invalid_assignment_targets() {
    assert!(matches!(assert_failure("2 = 3"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(assert_failure("f(a b) = a"),
                     Error::Parse(ParseError::InvalidFunctionDefinition { .. })));
    assert!(matches!(assert_failure("f(a) = "),
                     Error::Parse(ParseError::InvalidFunctionDefinition { .. })));
}

#[test]
fn empty_result() {
    assert_eq!(assert_failure("()"), Error::Runtime(RuntimeError::EmptyResult));
    assert_eq!(outcome(""), LineOutcome::Empty);
    assert_eq!(outcome("   "), LineOutcome::Empty);
}

#[test]
fn extra_operands_warn() {
    assert_output(&["sqrt(1, 2)"],
                  "WARNING: 1 extra value(s) left at the end of the calculation, which is slightly odd.\n1.4142135623731\n");
}

#[test]
fn malformed_literal_warns() {
    assert_output(&["1.2.3"],
                  "WARNING: Ignoring unexpected character '.' in number '1.2.3'.\n1.23\n");
}

#[test]
fn complex_arithmetic() {
    assert_value("i*i", Value::real(-1.0));
    assert_value("sqrt(-4)", Value::new(0.0, 2.0));
    assert_value("sqrt(-1)", Value::new(0.0, 1.0));
    assert_value("(3+4i)/(1-2i)", Value::new(-1.0, 2.0));
    assert_value("conj(1+2i)", Value::new(1.0, -2.0));
    assert_real("abs(3+4i)", 5.0);
    assert_real("re(3+4i) + im(3+4i)", 7.0);
    assert_value("ln(-1)", Value::new(0.0, std::f64::consts::PI));
    assert_value("(7+5i) % 4", Value::real(3.0));
}

#[test]
fn real_only_operations() {
    assert_output(&["pow(i, 2)"],
                  "ERROR: Complex numbers are not supported by 'pow'.\npossibly erroneous: (NaN + NaNi)\n");
    assert_eq!(assert_failure("i ^ 2"),
               Error::Runtime(RuntimeError::ComplexUnsupported { operation: "pow" }));
    assert_output(&["sin(i)"],
                  "WARNING: 'sin' only supports real numbers; the imaginary part was ignored.\n0\n");
}

#[test]
fn builtin_functions() {
    assert_real("add(2, 3) + subtract(10, 4)", 11.0);
    assert_real("multiply(2, 3) / divide(8, 4)", 3.0);
    assert_real("modulo(10, 4)", 2.0);
    assert_real("pow(2, 10)", 1024.0);
    assert_real("root(27, 3)", 3.0);
    assert_real("round(2.5) + floor(1.7) + ceil(1.2)", 6.0);
    assert_real("log2(8) + log10(1000)", 6.0);
    assert_real("exp(ln(5))", 5.0);
    assert_real("sin(pi/2) + cos(0) + tan(0)", 2.0);
    assert_real("asin(1) * 2", std::f64::consts::PI);
    assert_real("acos(1) + atan(0)", 0.0);
    assert_real("arg(i)", std::f64::consts::FRAC_PI_2);
    assert_eq!(assert_failure("root(8, 0)"), Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_failure("root(i, 2)"),
               Error::Runtime(RuntimeError::ComplexUnsupported { operation: "root" }));
    assert_output(&["root(4, i)"],
                  "ERROR: Complex numbers are not supported by 'root'.\npossibly erroneous: (NaN + NaNi)\n");
}

#[test]
fn constants() {
    assert_real("foot / inch", 12.0);
    assert_real("mile", 1609.34);
    assert_real("tau / pi", 2.0);
    assert_real("phi^2 - phi", 1.0);
    assert_real("c", 299_792_458.0);
    assert_real("zero + one + e - e", 1.0);
}

#[test]
fn bitwise_operators() {
    assert_real("6 & 3", 2.0);
    assert_real("6 | 3", 7.0);
    assert_real("6 ~ 3", 5.0);
    assert_real("1 < 4", 16.0);
    assert_real("256 > 4", 16.0);
    assert_real("1 + 1 < 2", 8.0);
    assert_real("5.9 & 7", 5.0);
}

#[test]
fn input_is_case_insensitive() {
    assert_output(&["X = 2", "x * PI / Pi"], "2\n2\n");
}

#[test]
fn inline_radix_applies_to_one_line() {
    assert_output(&["hex 255", "255"], "0xFF\n255\n");
    assert_output(&["255 bin", "5"], "0b11111111\n5\n");
    assert_output(&["bin 5", "oct 64"], "0b0101\n0o100\n");
}

#[test]
fn lone_radix_command_sticks() {
    assert_output(&["hex", "255", "dec", "255"], "0xFF\n255\n");
    assert_eq!(outcome("oct"), LineOutcome::Commands);
}

#[test]
fn radix_is_restored_after_a_failure() {
    assert_output(&["hex 1/0", "10"],
                  "ERROR: Division by zero.\npossibly erroneous: (NaN + NaNi)\n10\n");
}

#[test]
fn settings_assignments() {
    assert_output(&["scient_max = 1000", "5000"], "1.000 * 10^3\n5.000 * 10^3\n");
    assert_output(&["scient_min = 0.1", "0.05"], "0.1\n50.000 * 10^-3\n");
    assert_output(&["sep_out = 1", "1234567", "sep_out = 0", "1234567"],
                  "1\n1_234_567\n0\n1234567\n");
    assert_output(&["scient_min = -1"],
                  "ERROR: Invalid value for setting 'scient_min': expected a positive real number, got -1.\n");
}

#[test]
fn settings_are_not_variables() {
    assert_eq!(run(&["sep_out = 1", "sep_out"]),
               "1\nERROR: Variable 'sep_out' not found.\n");
}

#[test]
fn help_list_and_settings_commands() {
    assert!(run(&["help"]).contains("Commands"));

    let listing = run(&["f(x) = x + 1", "list"]);
    assert!(listing.contains("Variables:"));
    assert!(listing.contains("  pi"));
    assert!(listing.contains("f(x)"));
    assert!(listing.contains("= x + 1"));
    assert!(listing.contains("builtin"));

    let settings = run(&["settings"]);
    assert!(settings.contains("radix:              decimal"));
    assert!(settings.contains("digit grouping:     off"));
}

#[test]
fn list_truncates_long_entries() {
    let output = run(&["long(x) = x + x + x + x + x + x + x + x + x + x + x + x", "list"]);
    let (_, listing) = output.split_once("Functions:\n").expect("list prints a function table");
    assert!(listing.contains("  long(x)"));
    assert!(listing.contains(" = x + x + x + x + x + x + x + x + x +...\n"),
            "{listing}");
    assert!(!listing.contains("= x + x + x + x + x + x + x + x + x + x + x + x\n"));
}

#[test]
fn commands_and_an_expression_on_one_line() {
    assert_output(&["hex settings 16"], &format!("{}0x10\n", run(&["hex", "settings"])));
}
