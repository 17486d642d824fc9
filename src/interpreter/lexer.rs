use logos::{Lexer, Logos};

use crate::{
    interpreter::{
        settings::{Radix, Settings},
        token::{Operator, Token},
    },
    util::alloc::{AllocationError, push_checked},
};

/// Represents a lexical token as recognised by the scanner.
///
/// These are converted into [`Token`]s once scanned; the scanner-level enum
/// only exists so that `logos` can drive the character matching.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Number literal tokens such as `42`, `0xff`, `0b1010` or `3.25`. Only
    /// the leading digit is matched here; [`lex_literal`] consumes the rest.
    #[regex(r"[0-9]", lex_literal)]
    Literal(ScannedLiteral),
    /// Identifier tokens; variable, function or command names.
    #[regex(r"[a-z][a-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A number literal as scanned, before evaluation.
#[derive(Debug, PartialEq, Eq, Clone)]
struct ScannedLiteral {
    digits: String,
    radix:  Radix,
}

/// Additional information carried by the lexer during tokenization.
///
/// Holds the separator characters, which are configurable and therefore
/// cannot be part of the static token patterns.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// Character that starts the fractional part of a literal.
    pub decimal_separator: char,
    /// Cosmetic character allowed inside a literal.
    pub digit_separator:   char,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for LexerExtras {
    fn from(settings: &Settings) -> Self {
        Self { decimal_separator: settings.decimal_separator_in,
               digit_separator:   settings.digit_separator_in, }
    }
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Literal(ScannedLiteral { digits, radix }) => {
                Self::NumberLiteral { digits, radix }
            },
            RawToken::Identifier(name) => Self::Identifier(name),
            RawToken::Plus => Self::Operator(Operator::Add),
            RawToken::Minus => Self::Operator(Operator::Subtract),
            RawToken::Star => Self::Operator(Operator::Multiply),
            RawToken::Slash => Self::Operator(Operator::Divide),
            RawToken::Percent => Self::Operator(Operator::Modulo),
            RawToken::Caret => Self::Operator(Operator::Power),
            RawToken::Ampersand => Self::Operator(Operator::BitAnd),
            RawToken::Pipe => Self::Operator(Operator::BitOr),
            RawToken::Tilde => Self::Operator(Operator::BitXor),
            RawToken::Less => Self::Operator(Operator::ShiftLeft),
            RawToken::Greater => Self::Operator(Operator::ShiftRight),
            RawToken::LParen => Self::OpenParen,
            RawToken::RParen => Self::CloseParen,
            RawToken::Comma => Self::Comma,
        }
    }
}

/// Converts a lowercased line into tokens, terminated by [`Token::Eof`].
///
/// Characters that start no token are skipped. A literal may also start with
/// the configured decimal separator, e.g. `.5`. A `-` in unary position
/// directly before a literal is folded into it, so the parser and evaluator
/// only ever see binary operators.
///
/// # Errors
/// Returns an [`AllocationError`] if the token list cannot grow.
///
/// # Example
/// ```
/// use hsolver::interpreter::{lexer::tokenize, settings::Settings, token::render};
///
/// let tokens = tokenize("-2 * (0x1f - .5)", &Settings::default()).unwrap();
/// assert_eq!(render(&tokens), "-2 * ( 0x1f - .5 )");
/// ```
pub fn tokenize(source: &str, settings: &Settings) -> Result<Vec<Token>, AllocationError> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::from(settings));
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let raw = match raw {
            Ok(raw) => raw,
            Err(()) if lexer.slice().starts_with(lexer.extras.decimal_separator) => {
                RawToken::Literal(lex_literal(&mut lexer))
            },
            Err(()) => {
                log::debug!("skipping unexpected character {:?}", lexer.slice());
                continue;
            },
        };
        push_checked(&mut tokens, raw.into(), "token list")?;
    }
    push_checked(&mut tokens, Token::Eof, "token list")?;

    fold_unary_minus(tokens)
}

/// Folds each unary `-` that directly precedes a number literal into it.
///
/// A `-` is unary when it is the first token or follows an operator, a comma
/// or an opening parenthesis.
fn fold_unary_minus(tokens: Vec<Token>) -> Result<Vec<Token>, AllocationError> {
    let mut folded = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if token == Token::Operator(Operator::Subtract)
           && folded.last().is_none_or(Token::admits_unary_minus)
           && let Some(Token::NumberLiteral { digits, .. }) = tokens.peek_mut()
        {
            digits.insert(0, '-');
            continue;
        }
        push_checked(&mut folded, token, "token list")?;
    }

    Ok(folded)
}

/// Consumes a number literal starting at the current token.
///
/// The current slice is the literal's first character, either a digit or the
/// decimal separator. Everything the literal extends over is bumped past.
fn lex_literal(lex: &mut Lexer<'_, RawToken>) -> ScannedLiteral {
    let start = lex.span().start;
    let (literal, len) = scan_literal(&lex.source()[start..], lex.extras);
    lex.bump(len.saturating_sub(lex.slice().len()));
    literal
}

/// Scans a literal at the start of `text` and returns it with its byte length.
///
/// A `0b`, `0o` or `0x` prefix selects the radix. The literal then runs while
/// characters are digits of that radix or one of the separators.
fn scan_literal(text: &str, extras: LexerExtras) -> (ScannedLiteral, usize) {
    let mut chars = text.chars();
    let (radix, prefix_len) = match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) => Radix::from_prefix(c).map_or((Radix::Decimal, 0), |r| (r, 2)),
        _ => (Radix::Decimal, 0),
    };

    let digits = text[prefix_len..].chars()
                                   .take_while(|&c| {
                                       radix.is_digit(c)
                                       || c == extras.decimal_separator
                                       || c == extras.digit_separator
                                   })
                                   .collect::<String>();
    let len = prefix_len + digits.len();

    (ScannedLiteral { digits, radix }, len)
}
