//! Scale words (thousand, million, ...) per digit-group position

use serde::Serialize;

use crate::config::MAX_GROUP_POSITION;
use crate::error::{Result, TafqitError};
use crate::types::WordifyOptions;

/// Names of one magnitude tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleEntry {
    /// Singular, also the base of the dual and the nunated form
    pub singular: &'static str,
    /// Plural used after counts 3-10
    pub plural: &'static str,
    /// Tier switches to بليون/بلايين under the alternate billion naming
    pub billions_eligible: bool,
}

impl ScaleEntry {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            billions_eligible: false,
        }
    }
}

/// Tiers 1-7 (index 0 is position 1). Tier 0 has no scale word.
const SCALES: [ScaleEntry; MAX_GROUP_POSITION] = [
    ScaleEntry::new("ألف", "آلاف"),
    ScaleEntry::new("مليون", "ملايين"),
    ScaleEntry {
        singular: "مليار",
        plural: "مليارات",
        billions_eligible: true,
    },
    ScaleEntry::new("ترليون", "ترليونات"),
    ScaleEntry::new("كوادرليون", "كوادرليونات"),
    ScaleEntry::new("كوينتليون", "كوينتليونات"),
    ScaleEntry::new("سكستليون", "سكستليونات"),
];

/// Names substituted on the eligible tier when billions naming is on
const BILLION: ScaleEntry = ScaleEntry {
    singular: "بليون",
    plural: "بلايين",
    billions_eligible: true,
};

/// Resolve the scale word for a group position.
///
/// Returns `None` for the units tier (position 0).
///
/// # Errors
///
/// Returns `TafqitError::UnsupportedMagnitude` for positions above
/// [`MAX_GROUP_POSITION`].
pub fn scale_for(position: usize, options: &WordifyOptions) -> Result<Option<ScaleEntry>> {
    if position == 0 {
        return Ok(None);
    }
    let entry = SCALES
        .get(position - 1)
        .copied()
        .ok_or(TafqitError::UnsupportedMagnitude {
            position,
            max: MAX_GROUP_POSITION,
        })?;

    if entry.billions_eligible && options.use_billions_naming {
        Ok(Some(BILLION))
    } else {
        Ok(Some(entry))
    }
}
