//! Core types for the Tafqit engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TafqitError};

/// A number to spell out: a native integer or a string of decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    /// Unsigned native integer
    Unsigned(u128),
    /// Signed native integer (negative values are rejected)
    Signed(i128),
    /// Decimal digit string, possibly longer than any native integer
    Digits(String),
}

impl NumericInput {
    /// Coerce the input to a plain decimal digit string.
    ///
    /// # Errors
    ///
    /// Returns `TafqitError::InvalidInput` for negative values, empty strings,
    /// and strings containing anything but ASCII digits (signs, decimal
    /// points, separators, whitespace).
    pub fn to_digit_string(&self) -> Result<String> {
        match self {
            NumericInput::Unsigned(n) => Ok(n.to_string()),
            NumericInput::Signed(n) if *n < 0 => Err(TafqitError::InvalidInput(format!(
                "negative numbers are not supported: {n}"
            ))),
            NumericInput::Signed(n) => Ok(n.to_string()),
            NumericInput::Digits(s) => {
                if s.is_empty() {
                    return Err(TafqitError::InvalidInput("empty digit string".to_string()));
                }
                if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
                    return Err(TafqitError::InvalidInput(format!(
                        "unexpected character '{bad}' in '{s}'"
                    )));
                }
                Ok(s.clone())
            }
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Unsigned(n) => write!(f, "{n}"),
            NumericInput::Signed(n) => write!(f, "{n}"),
            NumericInput::Digits(s) => f.write_str(s),
        }
    }
}

macro_rules! numeric_input_from {
    ($variant:ident, $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for NumericInput {
                fn from(n: $t) -> Self {
                    NumericInput::$variant(n as $wide)
                }
            }
        )+
    };
}

numeric_input_from!(Unsigned, u128: u8, u16, u32, u64, u128, usize);
numeric_input_from!(Signed, i128: i8, i16, i32, i64, i128, isize);

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Digits(s)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Digits(s.to_string())
    }
}

impl From<&String> for NumericInput {
    fn from(s: &String) -> Self {
        NumericInput::Digits(s.clone())
    }
}

/// Grammatical gender of the counted subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    /// The other gender (11-19 borrow their "ten" from it)
    pub fn opposite(self) -> Self {
        match self {
            Gender::Masculine => Gender::Feminine,
            Gender::Feminine => Gender::Masculine,
        }
    }

    /// Row index into the gender-keyed word tables
    pub(crate) fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
        }
    }
}

/// Grammatical case of the number phrase.
///
/// Accusative and genitive share one suffix set (the oblique forms);
/// they are kept as separate values so callers can state what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalCase {
    #[default]
    Nominative,
    Accusative,
    Genitive,
}

impl GrammaticalCase {
    /// Column index into the case-keyed word tables (0 nominative, 1 oblique)
    pub(crate) fn form_index(self) -> usize {
        match self {
            GrammaticalCase::Nominative => 0,
            GrammaticalCase::Accusative | GrammaticalCase::Genitive => 1,
        }
    }

    /// Lowercase name as used in options
    pub fn as_str(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nominative",
            GrammaticalCase::Accusative => "accusative",
            GrammaticalCase::Genitive => "genitive",
        }
    }
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrammaticalCase {
    type Err = TafqitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nominative" => Ok(GrammaticalCase::Nominative),
            "accusative" => Ok(GrammaticalCase::Accusative),
            "genitive" => Ok(GrammaticalCase::Genitive),
            other => Err(TafqitError::invalid_option("grammaticalCase", other)),
        }
    }
}

/// Spelling of the word "hundred"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HundredSpelling {
    /// مائة (classical spelling)
    #[default]
    Maah,
    /// مئة (modern spelling)
    Miah,
}

impl HundredSpelling {
    /// The hundred word in this spelling
    pub fn word(self) -> &'static str {
        match self {
            HundredSpelling::Maah => "مائة",
            HundredSpelling::Miah => "مئة",
        }
    }

    /// Lowercase name as used in options
    pub fn as_str(self) -> &'static str {
        match self {
            HundredSpelling::Maah => "maah",
            HundredSpelling::Miah => "miah",
        }
    }
}

impl fmt::Display for HundredSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HundredSpelling {
    type Err = TafqitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maah" => Ok(HundredSpelling::Maah),
            "miah" => Ok(HundredSpelling::Miah),
            other => Err(TafqitError::invalid_option("hundredSpelling", other)),
        }
    }
}

/// Per-call grammar configuration.
///
/// Deserializes from camelCase keys (`feminineSubject`, `hundredSpelling`,
/// ...). Missing keys take their defaults; unknown keys are rejected so a
/// misspelled option never silently falls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct WordifyOptions {
    /// Counted subject is feminine (affects the last effective group only)
    pub feminine_subject: bool,
    /// Spelling of the hundred word
    pub hundred_spelling: HundredSpelling,
    /// Put an Arabic comma before each "and" between groups
    pub insert_comma: bool,
    /// Write "ثلاث مائة" instead of "ثلاثمائة"
    pub split_hundred_word: bool,
    /// Name the 10^9 tier بليون instead of مليار
    pub use_billions_naming: bool,
    /// The counted noun follows, so duals take the construct form
    pub trailing_text_follows: bool,
    /// Grammatical case of the whole phrase
    pub grammatical_case: GrammaticalCase,
}

impl WordifyOptions {
    /// Create options with every default (masculine, nominative, مائة)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feminine-subject flag.
    pub fn with_feminine_subject(mut self, on: bool) -> Self {
        self.feminine_subject = on;
        self
    }

    /// Set the hundred spelling.
    pub fn with_hundred_spelling(mut self, spelling: HundredSpelling) -> Self {
        self.hundred_spelling = spelling;
        self
    }

    /// Set the inter-group comma flag.
    pub fn with_comma(mut self, on: bool) -> Self {
        self.insert_comma = on;
        self
    }

    /// Set the split-hundred flag.
    pub fn with_split_hundred_word(mut self, on: bool) -> Self {
        self.split_hundred_word = on;
        self
    }

    /// Set the alternate billion naming flag.
    pub fn with_billions_naming(mut self, on: bool) -> Self {
        self.use_billions_naming = on;
        self
    }

    /// Set the trailing-text flag.
    pub fn with_trailing_text(mut self, on: bool) -> Self {
        self.trailing_text_follows = on;
        self
    }

    /// Set the grammatical case.
    pub fn with_case(mut self, case: GrammaticalCase) -> Self {
        self.grammatical_case = case;
        self
    }

    /// Gender used for a digit group.
    ///
    /// Only the last effective group agrees with a feminine subject; every
    /// other group counts a masculine scale word.
    pub fn gender_for(&self, is_last_effective: bool) -> Gender {
        if self.feminine_subject && is_last_effective {
            Gender::Feminine
        } else {
            Gender::Masculine
        }
    }
}
