use std::io::{self, Write};

use crate::{
    error::{Diagnostics, Error, ParseError, RuntimeError},
    interpreter::{
        command::{Command, HELP, extract_commands, write_list, write_settings},
        evaluator::core::{Context, Failure},
        format::format_value,
        lexer::tokenize,
        parser::{
            assignment::{Target, parse_target, split_assignment},
            core::to_postfix,
        },
        settings::Settings,
        token::Token,
        value::complex::Value,
    },
};

/// What a line did, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line held nothing to do.
    Empty,
    /// The line held only commands.
    Commands,
    /// An expression or assignment produced this value.
    Value(Value),
    /// A function was defined; holds its signature and body as printed.
    Defined(String),
    /// The line failed; the context is left as it was.
    Failed(Error),
}

/// Evaluates one line against `context` and writes everything it prints to
/// `out`.
///
/// The line is lowercased and split at its first `=`. Inline commands are
/// run and removed first. A radix command applies to this line only, unless
/// the line holds nothing but commands, in which case it sticks. A function
/// body may not contain commands, since it is stored as text and evaluated
/// later. What is left
/// is then either a plain expression, a variable or setting assignment, or a
/// function definition. `ans` is set after every successful expression or
/// assignment.
///
/// Warnings print as `WARNING: ...` lines before the result. A failure prints
/// `ERROR: ...`, followed by `possibly erroneous: ...` if a partial value
/// exists.
///
/// # Errors
/// Returns an [`io::Error`] only if writing to `out` fails.
///
/// # Example
/// ```
/// use hsolver::interpreter::{
///     evaluator::core::Context,
///     session::{LineOutcome, evaluate_line_to},
///     value::complex::Value,
/// };
///
/// let mut context = Context::new();
/// let mut out = Vec::new();
///
/// evaluate_line_to("x = 5", &mut context, &mut out).unwrap();
/// let outcome = evaluate_line_to("x + 1", &mut context, &mut out).unwrap();
///
/// assert_eq!(outcome, LineOutcome::Value(Value::real(6.0)));
/// assert_eq!(context.ans(), Value::real(6.0));
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n6\n");
/// ```
pub fn evaluate_line_to(text: &str,
                        context: &mut Context,
                        out: &mut impl Write)
                        -> io::Result<LineOutcome> {
    let line = text.to_lowercase();
    log::debug!("input: {line}");

    let (target, expression) = split_assignment(&line);
    let tokens = match tokenize(expression, &context.settings) {
        Ok(tokens) => tokens,
        Err(e) => {
            let failure = Failure::from(ParseError::from(e));
            return report_failure(failure, &Diagnostics::new(), &context.settings, out);
        },
    };

    let (commands, tokens) = extract_commands(tokens);
    if !commands.is_empty()
       && let Some(target) = target
       && let Ok(Target::Function { .. }) = parse_target(target, &context.settings)
    {
        let definition = format!("{target} = {expression}");
        let failure = Failure::from(ParseError::InvalidFunctionDefinition { definition });
        return report_failure(failure, &Diagnostics::new(), &context.settings, out);
    }

    let saved_radix = context.settings.radix;
    for command in &commands {
        run_command(*command, context, out)?;
    }

    if target.is_none() && tokens.as_slice() == [Token::Eof] {
        return Ok(if commands.is_empty() { LineOutcome::Empty } else { LineOutcome::Commands });
    }

    let outcome = evaluate_statement(target, expression, tokens, context, out);
    context.settings.radix = saved_radix;
    outcome
}

/// Evaluates one line against `context`, printing to standard output.
///
/// # Errors
/// Returns an [`io::Error`] if standard output cannot be written.
pub fn evaluate_line(text: &str, context: &mut Context) -> io::Result<LineOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    evaluate_line_to(text, context, &mut out)
}

/// Runs a single inline command.
fn run_command(command: Command, context: &mut Context, out: &mut impl Write) -> io::Result<()> {
    log::debug!("command: {command:?}");
    match command {
        Command::Radix(radix) => {
            context.settings.radix = radix;
            Ok(())
        },
        Command::Help => writeln!(out, "{HELP}"),
        Command::List => write_list(context, out),
        Command::Settings => write_settings(context, out),
    }
}

/// Evaluates what is left of a line once commands are removed.
fn evaluate_statement(target: Option<&str>,
                      expression: &str,
                      tokens: Vec<Token>,
                      context: &mut Context,
                      out: &mut impl Write)
                      -> io::Result<LineOutcome> {
    let mut diagnostics = Diagnostics::new();

    let target = match target.map(|t| parse_target(t, &context.settings)).transpose() {
        Ok(target) => target,
        Err(e) => return report_failure(e.into(), &diagnostics, &context.settings, out),
    };

    if let Some(Target::Function { name, params }) = target {
        return define_function(&name, params, expression, tokens, context, out);
    }

    let value = match context.evaluate_tokens(tokens, None, &mut diagnostics) {
        Ok(value) => value,
        Err(failure) => return report_failure(failure, &diagnostics, &context.settings, out),
    };

    if let Some(Target::Variable(name)) = target {
        match apply_setting(&name, value, &mut context.settings) {
            Ok(true) => log::debug!("setting {name} changed"),
            Ok(false) => context.set_variable(&name, value),
            Err(e) => return report_failure(e.into(), &diagnostics, &context.settings, out),
        }
    }
    context.set_variable("ans", value);

    let text = format_value(value, &context.settings, &mut diagnostics);
    write_warnings(&diagnostics, out)?;
    writeln!(out, "{text}")?;

    Ok(LineOutcome::Value(value))
}

/// Stores a function definition after checking that its body reorders.
///
/// The body is kept as text and only evaluated when the function is called.
fn define_function(name: &str,
                   params: Vec<String>,
                   body: &str,
                   tokens: Vec<Token>,
                   context: &mut Context,
                   out: &mut impl Write)
                   -> io::Result<LineOutcome> {
    let signature = format!("{name}({})", params.join(", "));

    let checked = if tokens.as_slice() == [Token::Eof] {
        Err(ParseError::InvalidFunctionDefinition { definition: format!("{signature} =") })
    } else {
        to_postfix(tokens).map(|_| ())
    };
    if let Err(e) = checked {
        return report_failure(e.into(), &Diagnostics::new(), &context.settings, out);
    }

    let printed = format!("{signature} = {body}");
    context.define_function(name, params, body);

    writeln!(out, "{printed}")?;
    Ok(LineOutcome::Defined(printed))
}

/// Applies an assignment to one of the reserved setting names `scient_min`,
/// `scient_max` and `sep_out`.
///
/// # Returns
/// `Ok(true)` if `name` is a setting and was changed, `Ok(false)` if it is an
/// ordinary variable.
///
/// # Errors
/// Returns [`RuntimeError::InvalidSetting`] if the value is out of range for
/// the setting.
fn apply_setting(name: &str, value: Value, settings: &mut Settings) -> Result<bool, RuntimeError> {
    match name {
        "scient_min" => settings.scientific_min = positive_real("scient_min", value)?,
        "scient_max" => settings.scientific_max = positive_real("scient_max", value)?,
        "sep_out" => settings.digit_grouping = !value.is_zero(),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Checks that a setting value is a positive, finite real number.
fn positive_real(name: &'static str, value: Value) -> Result<f64, RuntimeError> {
    if value.is_real() && value.re.is_finite() && value.re > 0.0 {
        Ok(value.re)
    } else {
        Err(RuntimeError::InvalidSetting { name,
                                           details: format!("expected a positive real number, got {value}") })
    }
}

/// Writes the warnings, the error and any partial result of a failed line.
fn report_failure(failure: Failure,
                  diagnostics: &Diagnostics,
                  settings: &Settings,
                  out: &mut impl Write)
                  -> io::Result<LineOutcome> {
    log::debug!("line failed: {failure}");
    let mut diagnostics = diagnostics.clone();
    let partial = failure.partial
                         .map(|value| format_value(value, settings, &mut diagnostics));

    write_warnings(&diagnostics, out)?;
    writeln!(out, "ERROR: {}", failure.error)?;
    if let Some(partial) = partial {
        writeln!(out, "possibly erroneous: {partial}")?;
    }

    Ok(LineOutcome::Failed(failure.error))
}

fn write_warnings(diagnostics: &Diagnostics, out: &mut impl Write) -> io::Result<()> {
    for warning in diagnostics.warnings() {
        writeln!(out, "WARNING: {warning}")?;
    }
    Ok(())
}
