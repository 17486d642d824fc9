use std::process::ExitCode;

use clap::Parser;
use hsolver::{
    Context, LineOutcome, default_context, evaluate_line,
    interpreter::settings::{FRACTIONAL_DIGITS, Radix, SCIENTIFIC_MAX, SCIENTIFIC_MIN, Settings},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// hsolver is a calculator for complex numbers with binary, octal, decimal and
/// hexadecimal input and output.
///
/// Given an expression, it prints the result and exits. Without one, it reads
/// lines interactively; type `help` there for an overview.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output radix: 2, 8, 10 or 16 (or bin, oct, dec, hex).
    #[arg(short, long, value_parser = parse_radix, default_value = "10")]
    radix: Radix,

    /// Decimal values with a smaller magnitude print in scientific notation.
    #[arg(long, value_parser = parse_positive, default_value_t = SCIENTIFIC_MIN)]
    scientific_min: f64,

    /// Decimal values with this magnitude or more print in scientific
    /// notation.
    #[arg(long, value_parser = parse_positive, default_value_t = SCIENTIFIC_MAX)]
    scientific_max: f64,

    /// Character that separates the integer and fractional digits.
    #[arg(long, default_value_t = '.')]
    decimal_separator: char,

    /// Character allowed between digits of a number and used for grouping.
    #[arg(long, default_value_t = '_')]
    digit_separator: char,

    /// Group the digits of results with the digit separator.
    #[arg(short, long)]
    group_digits: bool,

    /// Maximum number of fractional digits shown.
    #[arg(long, default_value_t = FRACTIONAL_DIGITS)]
    fractional_digits: usize,

    /// An expression to evaluate once. Its parts are joined without spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Args {
    /// Builds the initial settings from the command-line options.
    fn settings(&self) -> Result<Settings, String> {
        if self.decimal_separator == self.digit_separator {
            return Err(format!("The decimal and digit separators must differ, both are '{}'.",
                               self.decimal_separator));
        }
        Ok(Settings { radix:                 self.radix,
                      scientific_min:        self.scientific_min,
                      scientific_max:        self.scientific_max,
                      decimal_separator_in:  self.decimal_separator,
                      decimal_separator_out: self.decimal_separator,
                      digit_separator_in:    self.digit_separator,
                      digit_separator_out:   self.digit_separator,
                      digit_grouping:        self.group_digits,
                      fractional_digits:     self.fractional_digits, })
    }
}

fn parse_radix(s: &str) -> Result<Radix, String> {
    match s {
        "2" => Ok(Radix::Binary),
        "8" => Ok(Radix::Octal),
        "10" => Ok(Radix::Decimal),
        "16" => Ok(Radix::Hexadecimal),
        _ => Radix::from_command(s).ok_or_else(|| format!("unknown radix '{s}'")),
    }
}

fn parse_positive(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(format!("'{s}' is not a positive number")),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut context = default_context();
    context.settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if !args.expression.is_empty() {
        let line = args.expression.concat();
        return match evaluate_line(&line, &mut context) {
            Ok(LineOutcome::Failed(_)) => ExitCode::FAILURE,
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to write the result: {e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = run_interactive(&mut context) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Reads and evaluates lines until end of input or an interrupt.
fn run_interactive(context: &mut Context) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                evaluate_line(&line, context)?;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}
