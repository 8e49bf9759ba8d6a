//! Word-form tables and per-group grammar context
//!
//! All tables are `const` data. A [`GrammarContext`] is derived fresh for
//! each digit group from the caller's options and the gender that group
//! takes, so no table is ever patched in place and concurrent calls share
//! nothing mutable.
//!
//! Tables keyed by gender use row 0 for masculine and row 1 for feminine.
//! Tables keyed by case use column 0 for nominative and column 1 for the
//! oblique (accusative/genitive) forms.

use crate::types::{Gender, GrammaticalCase, WordifyOptions};

/// The word for zero
pub const ZERO_WORD: &str = "صفر";

/// "and": a space followed by و, which fuses to the next word
pub const AND: &str = " و";

/// Arabic comma placed before "and" between groups when requested
pub const LIST_COMMA: &str = "،";

/// Tanween fath + alef, the accusative indefinite ending of a counted noun
pub const NUNATION: &str = "\u{064B}\u{0627}";

/// Unit words 0-10 by gender. Index 2 is replaced by a case form of the dual.
const UNITS: [[&str; 11]; 2] = [
    [
        "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
    ],
    [
        "", "واحدة", "اثنتان", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع", "عشر",
    ],
];

/// "two" by gender and case
const DUAL_TWO: [[&str; 2]; 2] = [["اثنان", "اثنين"], ["اثنتان", "اثنتين"]];

/// First word of 11 by gender
const ELEVEN_START: [&str; 2] = ["أحد", "إحدى"];

/// First word of 12 by gender and case
const TWELVE_START: [[&str; 2]; 2] = [["إثنا", "إثني"], ["إثنتا", "إثنتي"]];

/// Ones word for 21, 31, ... 91 by gender
const COMPOUND_ONE: [&str; 2] = ["واحد", "إحدى"];

/// Stem of 20; 30-90 use the feminine unit word as stem
const TWENTY_STEM: &str = "عشر";

/// Tens suffix by case (عشرون / عشرين)
const TENS_SUFFIX: [&str; 2] = ["ون", "ين"];

/// Letter inserted before the dual ending of the hundred word (مائة -> مائتان)
const HUNDRED_DUAL_INFIX: &str = "ت";

/// Whether a dual noun is followed by the noun it governs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DualState {
    /// Standalone dual: مائتان, ألفان
    Free,
    /// Construct state, noun follows: مائتا, ألفا
    Construct,
}

impl DualState {
    fn index(self) -> usize {
        match self {
            DualState::Free => 0,
            DualState::Construct => 1,
        }
    }
}

/// Dual noun endings by state and case
const DUAL_SUFFIX: [[&str; 2]; 2] = [["ان", "ين"], ["ا", "ي"]];

/// Resolved word forms for one digit group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarContext {
    gender: Gender,
    case: GrammaticalCase,
    units: [&'static str; 11],
    teen_starts: [&'static str; 10],
    teen_ten: &'static str,
    compound_one: &'static str,
    tens_suffix: &'static str,
    hundred: &'static str,
    split_hundred: bool,
    trailing_text: bool,
}

impl GrammarContext {
    /// Derive the word forms for the given options and gender
    pub fn new(options: &WordifyOptions, gender: Gender) -> Self {
        let g = gender.index();
        let c = options.grammatical_case.form_index();

        let mut units = UNITS[g];
        units[2] = DUAL_TWO[g][c];

        let mut teen_starts = [""; 10];
        teen_starts.copy_from_slice(&UNITS[g][..10]);
        teen_starts[1] = ELEVEN_START[g];
        teen_starts[2] = TWELVE_START[g][c];

        Self {
            gender,
            case: options.grammatical_case,
            units,
            teen_starts,
            teen_ten: UNITS[gender.opposite().index()][10],
            compound_one: COMPOUND_ONE[g],
            tens_suffix: TENS_SUFFIX[c],
            hundred: options.hundred_spelling.word(),
            split_hundred: options.split_hundred_word,
            trailing_text: options.trailing_text_follows,
        }
    }

    /// Context for a digit group, feminine only when the group is the last
    /// effective one and the subject is feminine
    pub fn for_group(options: &WordifyOptions, is_last_effective: bool) -> Self {
        Self::new(options, options.gender_for(is_last_effective))
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Whether the counted noun follows the number
    pub fn trailing_text(&self) -> bool {
        self.trailing_text
    }

    /// Unit word for 0-10 (empty for 0 and anything above 10)
    pub fn unit(&self, n: u8) -> &'static str {
        self.units.get(usize::from(n)).copied().unwrap_or("")
    }

    /// Two-word form of 11-19, e.g. ثلاثة عشر / ثلاث عشرة
    pub fn teen(&self, n: u8) -> String {
        let start = self
            .teen_starts
            .get(usize::from(n % 10))
            .copied()
            .unwrap_or("");
        format!("{start} {}", self.teen_ten)
    }

    /// Tens word for a tens digit 2-9, e.g. عشرون, ثلاثين
    pub fn tens(&self, tens_digit: u8) -> String {
        let stem = if tens_digit == 2 {
            TWENTY_STEM
        } else {
            UNITS[Gender::Feminine.index()]
                .get(usize::from(tens_digit))
                .copied()
                .unwrap_or("")
        };
        format!("{stem}{}", self.tens_suffix)
    }

    /// Ones word inside 21-99
    pub fn compound_unit(&self, ones: u8) -> &'static str {
        if ones == 1 {
            self.compound_one
        } else {
            self.unit(ones)
        }
    }

    /// The hundred word in the selected spelling
    pub fn hundred_word(&self) -> &'static str {
        self.hundred
    }

    /// 300-900: feminine digit word joined to the hundred word
    pub fn hundreds_multiple(&self, hundreds_digit: u8) -> String {
        let digit = UNITS[Gender::Feminine.index()]
            .get(usize::from(hundreds_digit))
            .copied()
            .unwrap_or("");
        let joiner = if self.split_hundred { " " } else { "" };
        format!("{digit}{joiner}{}", self.hundred)
    }

    /// 200: the hundred word with its final letter replaced by a dual ending
    pub fn dual_hundred(&self, state: DualState) -> String {
        let mut stem = self.hundred.to_string();
        stem.pop();
        format!("{stem}{HUNDRED_DUAL_INFIX}{}", self.dual_suffix(state))
    }

    /// Dual of a scale noun, e.g. ألفان, مليوني
    pub fn dual_noun(&self, noun: &str, state: DualState) -> String {
        format!("{noun}{}", self.dual_suffix(state))
    }

    fn dual_suffix(&self, state: DualState) -> &'static str {
        DUAL_SUFFIX[state.index()][self.case.form_index()]
    }
}
