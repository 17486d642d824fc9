use std::io::{self, Write};

use crate::{
    error::Diagnostics,
    interpreter::{
        evaluator::core::{Context, Function},
        format::format_value,
        settings::Radix,
        token::Token,
    },
};

/// Entries of `list` longer than this many characters are cut short.
pub const LIST_ENTRY_WIDTH: usize = 40;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Type an expression and press enter, e.g. `2 + 3 * 4` or `2pi`.

Numbers      42, 3.5, .5, 1_000, 0xff, 0b1010, 0o17
Operators    + - * / % ^ (power, evaluated left to right)
             & and, | or, ~ xor, < shift left, > shift right
Variables    x = 5            define or update a variable
             ans              result of the previous line
Functions    f(a, b) = a*a+b  define or replace a function
             sqrt(2), root(27, 3), pow(2, 8), ...
Settings     scient_min = 1e-4, scient_max = 1e15
             sep_out = 1      group output digits (0 turns it off)
Commands     dec hex oct bin  output radix; for one line, or for good
                              when given on its own
             list             show variables and functions
             settings         show the current settings
             help             show this text";

/// An inline command found among the tokens of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `dec`, `hex`, `oct` or `bin`: switch the output radix.
    Radix(Radix),
    /// `help`: print usage text.
    Help,
    /// `list`: print all variables and functions.
    List,
    /// `settings`: print the current settings.
    Settings,
}

impl Command {
    /// Looks up the command with the given name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "list" => Some(Self::List),
            "settings" => Some(Self::Settings),
            _ => Radix::from_command(name).map(Self::Radix),
        }
    }
}

/// Removes command identifiers from a token stream.
///
/// An identifier directly followed by `(` is a function call and is never
/// taken as a command.
///
/// # Returns
/// The commands in the order they appeared, and the remaining tokens.
///
/// # Example
/// ```
/// use hsolver::interpreter::{
///     command::{Command, extract_commands},
///     lexer::tokenize,
///     settings::{Radix, Settings},
///     token::render,
/// };
///
/// let tokens = tokenize("hex 255 + 1", &Settings::default()).unwrap();
/// let (commands, rest) = extract_commands(tokens);
/// assert_eq!(commands, vec![Command::Radix(Radix::Hexadecimal)]);
/// assert_eq!(render(&rest), "255 + 1");
/// ```
#[must_use]
pub fn extract_commands(tokens: Vec<Token>) -> (Vec<Command>, Vec<Token>) {
    let mut commands = Vec::new();
    let mut rest = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if let Token::Identifier(name) = &token
           && tokens.peek() != Some(&Token::OpenParen)
           && let Some(command) = Command::from_name(name)
        {
            commands.push(command);
            continue;
        }
        rest.push(token);
    }

    (commands, rest)
}

/// Writes a table of all variables followed by all functions, each sorted by
/// name.
///
/// Variables are shown formatted with the current settings; user-defined
/// functions with their stored body text.
pub fn write_list(context: &Context, out: &mut impl Write) -> io::Result<()> {
    let mut diagnostics = Diagnostics::new();

    let mut variables = context.variables.iter().collect::<Vec<_>>();
    variables.sort_by_key(|(name, _)| name.as_str());
    let variables = variables.into_iter()
                             .map(|(name, value)| {
                                 (name.clone(),
                                  format_value(*value, &context.settings, &mut diagnostics))
                             })
                             .collect::<Vec<_>>();

    let mut functions = context.functions.iter().collect::<Vec<_>>();
    functions.sort_by_key(|(name, _)| name.as_str());
    let functions = functions.into_iter()
                             .map(|(name, function)| match function {
                                 Function::Builtin(def) => {
                                     let params = if def.arity.count() == 1 { "x" } else { "a, b" };
                                     (format!("{name}({params})"), "builtin".to_string())
                                 },
                                 Function::UserDefined { params, body } => {
                                     (format!("{name}({})", params.join(", ")), format!("= {body}"))
                                 },
                             })
                             .collect::<Vec<_>>();

    writeln!(out, "Variables:")?;
    write_table(&variables, "= ", out)?;
    writeln!(out, "Functions:")?;
    write_table(&functions, "", out)
}

/// Writes `(left, right)` pairs as two aligned columns, truncating long
/// entries.
fn write_table(rows: &[(String, String)], joiner: &str, out: &mut impl Write) -> io::Result<()> {
    let width = rows.iter()
                    .map(|(left, _)| left.chars().count().min(LIST_ENTRY_WIDTH))
                    .max()
                    .unwrap_or(0);

    for (left, right) in rows {
        writeln!(out,
                 "  {:<width$} {joiner}{}",
                 truncate(left),
                 truncate(right))?;
    }
    Ok(())
}

/// Cuts `text` to [`LIST_ENTRY_WIDTH`] characters, marking the cut with `...`.
fn truncate(text: &str) -> String {
    if text.chars().count() <= LIST_ENTRY_WIDTH {
        return text.to_string();
    }
    let kept = text.chars().take(LIST_ENTRY_WIDTH - 3).collect::<String>();
    format!("{kept}...")
}

/// Writes the current settings, one per line.
pub fn write_settings(context: &Context, out: &mut impl Write) -> io::Result<()> {
    let settings = &context.settings;

    writeln!(out, "radix:              {}", settings.radix.name())?;
    writeln!(out, "scient_min:         {}", settings.scientific_min)?;
    writeln!(out, "scient_max:         {}", settings.scientific_max)?;
    writeln!(out, "decimal separator:  '{}' in, '{}' out",
             settings.decimal_separator_in, settings.decimal_separator_out)?;
    writeln!(out, "digit separator:    '{}' in, '{}' out",
             settings.digit_separator_in, settings.digit_separator_out)?;
    writeln!(out, "digit grouping:     {}", if settings.digit_grouping { "on" } else { "off" })?;
    writeln!(out, "fractional digits:  {}", settings.fractional_digits)
}
