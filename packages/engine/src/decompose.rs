//! Splitting numbers into three-digit groups
//!
//! A number is zero-padded on the left to a multiple of three digits and cut
//! into groups, most significant first. Group positions count from the least
//! significant end: 0 is units, 1 thousands, 2 millions, and so on.

use crate::config::{GROUP_WIDTH, MAX_DIGITS, MAX_GROUP_POSITION};
use crate::error::{Result, TafqitError};
use crate::types::NumericInput;

/// Ordered three-digit groups (0-999), most significant first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroups {
    groups: Vec<u16>,
}

/// One group together with where it sits in the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSlot {
    /// Group value (0-999)
    pub value: u16,
    /// Position counted from the least significant group
    pub position: usize,
    /// True iff every less significant group is zero
    pub is_last_effective: bool,
}

impl DigitGroups {
    /// Group values, most significant first
    pub fn as_slice(&self) -> &[u16] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check if every group is zero
    pub fn is_zero(&self) -> bool {
        self.groups.iter().all(|&g| g == 0)
    }

    /// Iterate groups most significant first, with position and
    /// last-effective flag attached.
    pub fn slots(&self) -> impl Iterator<Item = GroupSlot> + '_ {
        let count = self.groups.len();
        let last_nonzero = self.groups.iter().rposition(|&g| g != 0);
        self.groups.iter().enumerate().map(move |(index, &value)| GroupSlot {
            value,
            position: count - 1 - index,
            is_last_effective: last_nonzero.map_or(true, |last| index >= last),
        })
    }
}

/// Decompose a number into three-digit groups.
///
/// Leading zeros of a digit string are insignificant: `"0001000"` yields the
/// same groups as `1000`, however many zeros precede it. Zero itself yields a
/// single zero group.
///
/// # Errors
///
/// - `TafqitError::InvalidInput` if the input is not a non-negative integer
///   digit string.
/// - `TafqitError::UnsupportedMagnitude` if the number has more than
///   [`MAX_DIGITS`] significant digits.
pub fn decompose(input: &NumericInput) -> Result<DigitGroups> {
    let digits = input.to_digit_string()?;

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(DigitGroups { groups: vec![0] });
    }

    let group_count = significant.len().div_ceil(GROUP_WIDTH);
    if significant.len() > MAX_DIGITS {
        return Err(TafqitError::UnsupportedMagnitude {
            position: group_count - 1,
            max: MAX_GROUP_POSITION,
        });
    }

    let padded = format!(
        "{}{significant}",
        "0".repeat(group_count * GROUP_WIDTH - significant.len())
    );
    let groups = padded
        .as_bytes()
        .chunks(GROUP_WIDTH)
        .map(parse_group)
        .collect::<Result<Vec<u16>>>()?;

    Ok(DigitGroups { groups })
}

/// Parse one three-digit chunk
fn parse_group(chunk: &[u8]) -> Result<u16> {
    let text = std::str::from_utf8(chunk)
        .map_err(|e| TafqitError::InvalidInput(format!("malformed digit group: {e}")))?;
    text.parse::<u16>()
        .map_err(|e| TafqitError::InvalidInput(format!("malformed digit group '{text}': {e}")))
}
