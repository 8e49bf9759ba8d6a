//! Configuration constants for the Tafqit engine
//!
//! Centralized limits used throughout the engine for:
//! - The magnitude ladder (how many digit groups have a scale word)
//! - The largest number accepted, in significant digits
//!
//! Runtime behaviour is configured per call through
//! [`WordifyOptions`](crate::types::WordifyOptions); these values are fixed.

/// Number of digits in one group (units, thousands, millions, ...).
pub const GROUP_WIDTH: usize = 3;

/// Highest group position that has a scale word.
///
/// Position 7 is the sextillion tier (10^21). Anything above it has no
/// Arabic scale name in the table and is rejected.
pub const MAX_GROUP_POSITION: usize = 7;

/// Maximum number of significant digits accepted (10^24 - 1).
///
/// Leading zeros do not count.
pub const MAX_DIGITS: usize = (MAX_GROUP_POSITION + 1) * GROUP_WIDTH;
