/// Default lower bound below which decimal output switches to scientific
/// notation.
pub const SCIENTIFIC_MIN: f64 = 1e-4;
/// Default upper bound at or above which decimal output switches to
/// scientific notation.
pub const SCIENTIFIC_MAX: f64 = 1e15;
/// Default number of fractional digits generated by the formatter.
pub const FRACTIONAL_DIGITS: usize = 13;

/// Radix of a number literal or of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// Base 2, written with a `0b` prefix.
    Binary,
    /// Base 8, written with a `0o` prefix.
    Octal,
    /// Base 10, written without a prefix.
    #[default]
    Decimal,
    /// Base 16, written with a `0x` prefix.
    Hexadecimal,
}

impl Radix {
    /// The numeric base.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// The two-character prefix written before non-decimal numbers.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::Hexadecimal => "0x",
        }
    }

    /// Selects the radix named by the character following a leading `0` in a
    /// literal, e.g. `x` in `0xff`.
    #[must_use]
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    /// The inline command that switches the output to this radix.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Binary => "bin",
            Self::Octal => "oct",
            Self::Decimal => "dec",
            Self::Hexadecimal => "hex",
        }
    }

    /// Looks up the radix switched to by an inline command such as `hex`.
    #[must_use]
    pub fn from_command(name: &str) -> Option<Self> {
        [Self::Binary, Self::Octal, Self::Decimal, Self::Hexadecimal].into_iter()
                                                                       .find(|r| r.command() == name)
    }

    /// A human readable name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    /// How many integer digits form one group when digit grouping is enabled.
    #[must_use]
    pub const fn group_size(self) -> usize {
        match self {
            Self::Binary | Self::Hexadecimal => 4,
            Self::Decimal => 3,
            Self::Octal => 2,
        }
    }

    /// Whether the formatter generates fractional digits in this radix.
    #[must_use]
    pub const fn supports_fraction(self) -> bool {
        matches!(self, Self::Decimal | Self::Hexadecimal)
    }

    /// Whether `c` is a digit in this radix. Input is lowercase, so only
    /// lowercase hexadecimal letters are accepted.
    #[must_use]
    pub const fn is_digit(self, c: char) -> bool {
        match self {
            Self::Binary => matches!(c, '0'..='1'),
            Self::Octal => matches!(c, '0'..='7'),
            Self::Decimal => c.is_ascii_digit(),
            Self::Hexadecimal => matches!(c, '0'..='9' | 'a'..='f'),
        }
    }
}

/// Display and input settings of a [`Context`](crate::interpreter::evaluator::core::Context).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Output radix.
    pub radix:                 Radix,
    /// Decimal values with a smaller magnitude print in scientific notation.
    pub scientific_min:        f64,
    /// Decimal values with this magnitude or more print in scientific
    /// notation.
    pub scientific_max:        f64,
    /// Character that starts the fractional part of a literal.
    pub decimal_separator_in:  char,
    /// Character written before fractional output digits.
    pub decimal_separator_out: char,
    /// Cosmetic character allowed inside literals, ignored when parsing.
    pub digit_separator_in:    char,
    /// Character inserted between digit groups in the output.
    pub digit_separator_out:   char,
    /// Whether the output groups integer digits.
    pub digit_grouping:        bool,
    /// Maximum number of fractional digits generated by the formatter.
    pub fractional_digits:     usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { radix:                 Radix::Decimal,
               scientific_min:        SCIENTIFIC_MIN,
               scientific_max:        SCIENTIFIC_MAX,
               decimal_separator_in:  '.',
               decimal_separator_out: '.',
               digit_separator_in:    '_',
               digit_separator_out:   '_',
               digit_grouping:        false,
               fractional_digits:     FRACTIONAL_DIGITS, }
    }
}
