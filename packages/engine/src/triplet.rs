//! Conversion of one three-digit group into words
//!
//! A group value 0-999 is split into hundreds, tens and units. The hundreds
//! and the 1-99 remainder are spelled separately and joined with "and"; a
//! group above the units tier then gets its scale word, whose form depends
//! on the remainder:
//!
//! | value % 100 | scale form                        | example           |
//! |-------------|-----------------------------------|-------------------|
//! | 0           | singular after the hundreds       | مائة ألف          |
//! | 1           | bare singular, "one" dropped      | ألف               |
//! | 2           | dual, "two" dropped               | ألفان / ألفا       |
//! | 3-10        | plural                            | ثلاثة آلاف        |
//! | 11-99       | singular with nunation            | أحد عشر ألفًا      |

use crate::error::{Result, TafqitError};
use crate::grammar::{DualState, GrammarContext, AND, NUNATION};
use crate::scale::{scale_for, ScaleEntry};
use crate::types::WordifyOptions;

/// Convert a group value (0-999) at `position` into words.
///
/// `ctx` must be the context derived for this group (see
/// [`GrammarContext::for_group`]); `options` supplies the scale naming.
/// A zero group yields an empty string.
///
/// # Errors
///
/// - `TafqitError::InvalidInput` if `value` exceeds 999.
/// - `TafqitError::UnsupportedMagnitude` if `position` has no scale word.
pub fn convert_group(
    value: u16,
    position: usize,
    is_last_effective: bool,
    ctx: &GrammarContext,
    options: &WordifyOptions,
) -> Result<String> {
    let scale = scale_for(position, options)?;
    convert_scaled_group(value, scale, is_last_effective, ctx)
}

/// Convert a group whose scale word is already resolved (`None` for units).
pub(crate) fn convert_scaled_group(
    value: u16,
    scale: Option<ScaleEntry>,
    is_last_effective: bool,
    ctx: &GrammarContext,
) -> Result<String> {
    if value > 999 {
        return Err(TafqitError::InvalidInput(format!(
            "digit group value {value} exceeds 999"
        )));
    }
    if value == 0 {
        return Ok(String::new());
    }

    let hundreds = (value / 100) as u8;
    let below_hundred = (value % 100) as u8;

    let hundred_phrase = hundreds_words(hundreds, below_hundred, scale.is_some(), ctx);
    let words = join_and(&hundred_phrase, &below_hundred_words(below_hundred, ctx));

    let Some(scale) = scale else {
        return Ok(words);
    };
    Ok(with_scale(
        &words,
        &hundred_phrase,
        below_hundred,
        is_last_effective,
        scale,
        ctx,
    ))
}

/// Words for the hundreds digit
fn hundreds_words(hundreds: u8, below_hundred: u8, has_scale: bool, ctx: &GrammarContext) -> String {
    match hundreds {
        0 => String::new(),
        1 => ctx.hundred_word().to_string(),
        2 => {
            let construct = (has_scale && below_hundred == 0) || ctx.trailing_text();
            ctx.dual_hundred(if construct {
                DualState::Construct
            } else {
                DualState::Free
            })
        }
        h => ctx.hundreds_multiple(h),
    }
}

/// Words for the 0-99 remainder
fn below_hundred_words(n: u8, ctx: &GrammarContext) -> String {
    match n {
        0 => String::new(),
        1..=10 => ctx.unit(n).to_string(),
        11..=19 => ctx.teen(n),
        _ => {
            let tens = ctx.tens(n / 10);
            match n % 10 {
                0 => tens,
                ones => format!("{}{AND}{tens}", ctx.compound_unit(ones)),
            }
        }
    }
}

/// Attach the scale word to a group's words
fn with_scale(
    words: &str,
    hundred_phrase: &str,
    below_hundred: u8,
    is_last_effective: bool,
    scale: ScaleEntry,
    ctx: &GrammarContext,
) -> String {
    match below_hundred {
        0 => format!("{words} {}", scale.singular),
        1 => join_and(hundred_phrase, scale.singular),
        2 => {
            let state = if is_last_effective && ctx.trailing_text() {
                DualState::Construct
            } else {
                DualState::Free
            };
            join_and(hundred_phrase, &ctx.dual_noun(scale.singular, state))
        }
        3..=10 => format!("{words} {}", scale.plural),
        _ => format!("{words} {}{NUNATION}", scale.singular),
    }
}

/// Join two phrases with "and", skipping empty sides
fn join_and(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left}{AND}{right}"),
    }
}
