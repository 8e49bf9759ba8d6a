//! Tafqit Engine
//!
//! Spells out non-negative integers in Arabic words, applying Arabic
//! numeral grammar:
//! - Gender agreement with the counted subject (masculine/feminine)
//! - Grammatical case (nominative vs. accusative/genitive endings)
//! - Dual forms and construct-state endings (مائتان / مائتا, ألفان / ألفا)
//! - Scale-word plurals and nunation (ثلاثة آلاف, أحد عشر ألفًا)
//!
//! Numbers up to 10^24 - 1 (sextillions) are supported, given as native
//! integers or as digit strings.
//!
//! # Example
//!
//! ```
//! use tafqit_engine::{wordify, GrammaticalCase, WordifyOptions};
//!
//! let options = WordifyOptions::default();
//! assert_eq!(wordify(11000u32, &options)?, "أحد عشر ألفًا");
//!
//! let options = WordifyOptions::new()
//!     .with_case(GrammaticalCase::Accusative)
//!     .with_trailing_text(true);
//! assert_eq!(wordify("2000", &options)?, "ألفي");
//! # Ok::<(), tafqit_engine::TafqitError>(())
//! ```

pub mod assemble;
pub mod config;
pub mod decompose;
pub mod error;
pub mod grammar;
pub mod scale;
pub mod triplet;
pub mod types;
pub mod wordify;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use assemble::assemble;
pub use decompose::{decompose, DigitGroups, GroupSlot};
pub use error::{Result, TafqitError};
pub use grammar::{DualState, GrammarContext, ZERO_WORD};
pub use scale::{scale_for, ScaleEntry};
pub use triplet::convert_group;
pub use types::{Gender, GrammaticalCase, HundredSpelling, NumericInput, WordifyOptions};
pub use wordify::{wordify, wordify_detailed, GroupBreakdown, WordifyResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
