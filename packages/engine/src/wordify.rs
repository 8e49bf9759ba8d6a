//! The wordify pipeline
//!
//! Decompose, convert each non-zero group, assemble. Zero short-circuits to
//! [`ZERO_WORD`] before any group is converted.
//!
//! # Example
//!
//! ```
//! use tafqit_engine::{wordify, WordifyOptions};
//!
//! let options = WordifyOptions::default();
//! assert_eq!(wordify(3000u32, &options).unwrap(), "ثلاثة آلاف");
//! assert_eq!(wordify("1000000", &options).unwrap(), "مليون");
//!
//! let feminine = WordifyOptions::new().with_feminine_subject(true);
//! assert_eq!(wordify(1u8, &feminine).unwrap(), "واحدة");
//! ```

use serde::Serialize;

use crate::assemble::assemble;
use crate::decompose::decompose;
use crate::error::Result;
use crate::grammar::{GrammarContext, ZERO_WORD};
use crate::scale::scale_for;
use crate::triplet::convert_scaled_group;
use crate::types::{NumericInput, WordifyOptions};

/// How one non-zero digit group was spelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupBreakdown {
    /// Position counted from the least significant group
    pub position: usize,
    /// Group value (1-999)
    pub value: u16,
    /// True iff every less significant group is zero
    pub is_last_effective: bool,
    /// Singular scale word of this tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<&'static str>,
    /// The group's words, scale word included
    pub phrase: String,
}

/// Spelled-out number plus the per-group breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordifyResult {
    /// The full text
    pub text: String,
    /// Non-zero groups, most significant first (empty for zero)
    pub groups: Vec<GroupBreakdown>,
}

impl WordifyResult {
    /// Render the breakdown as a tree.
    ///
    /// ```text
    /// مليون وخمسمائة ألف وثلاثة
    /// +-- [2] 1 = مليون
    /// +-- [1] 500 = خمسمائة ألف
    /// `-- [0] 3 (last effective) = ثلاثة
    /// ```
    pub fn render_tree(&self) -> String {
        let mut out = self.text.clone();
        let count = self.groups.len();
        for (i, group) in self.groups.iter().enumerate() {
            let branch = if i + 1 == count { "`--" } else { "+--" };
            let marker = if group.is_last_effective {
                " (last effective)"
            } else {
                ""
            };
            out.push_str(&format!(
                "\n{branch} [{}] {}{marker} = {}",
                group.position, group.value, group.phrase
            ));
        }
        out
    }
}

/// Spell out a non-negative integer in Arabic.
///
/// # Errors
///
/// - `TafqitError::InvalidInput` if the input is not a non-negative integer
///   digit string.
/// - `TafqitError::UnsupportedMagnitude` for values of 10^24 and above.
pub fn wordify(input: impl Into<NumericInput>, options: &WordifyOptions) -> Result<String> {
    wordify_detailed(input, options).map(|result| result.text)
}

/// Spell out a number and report how each digit group was spelled.
///
/// # Errors
///
/// Same as [`wordify`].
pub fn wordify_detailed(
    input: impl Into<NumericInput>,
    options: &WordifyOptions,
) -> Result<WordifyResult> {
    let input = input.into();
    let groups = decompose(&input)?;

    if groups.is_zero() {
        tracing::debug!(input = %input, "Zero input, skipping group conversion");
        return Ok(WordifyResult {
            text: ZERO_WORD.to_string(),
            groups: Vec::new(),
        });
    }

    let mut breakdown = Vec::with_capacity(groups.len());
    for slot in groups.slots().filter(|slot| slot.value != 0) {
        let ctx = GrammarContext::for_group(options, slot.is_last_effective);
        let scale = scale_for(slot.position, options)?;
        let phrase = convert_scaled_group(slot.value, scale, slot.is_last_effective, &ctx)?;
        tracing::trace!(
            position = slot.position,
            value = slot.value,
            last_effective = slot.is_last_effective,
            gender = ?ctx.gender(),
            phrase = %phrase,
            "Converted digit group"
        );
        breakdown.push(GroupBreakdown {
            position: slot.position,
            value: slot.value,
            is_last_effective: slot.is_last_effective,
            scale: scale.map(|scale| scale.singular),
            phrase,
        });
    }

    let text = assemble(
        breakdown
            .iter()
            .map(|group| (group.phrase.as_str(), group.is_last_effective)),
        options.insert_comma,
    );

    tracing::debug!(
        input = %input,
        groups = breakdown.len(),
        case = %options.grammatical_case,
        "Wordified number"
    );

    Ok(WordifyResult {
        text,
        groups: breakdown,
    })
}
