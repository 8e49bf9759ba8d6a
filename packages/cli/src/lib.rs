//! Tafqit CLI - Spell out numbers in Arabic words from the command line.
//!
//! # Example
//!
//! ```
//! use tafqit_cli::config::resolve_options;
//! use tafqit_cli::cli::OptionFlags;
//!
//! let flags = OptionFlags {
//!     feminine: true,
//!     ..OptionFlags::default()
//! };
//! let options = resolve_options(&flags)?;
//! assert!(options.feminine_subject);
//! # Ok::<(), tafqit_cli::CliError>(())
//! ```
//!
//! # Architecture
//!
//! - [`cli`]: Command-line parsing and the `spell`, `explain` and `batch` commands
//! - [`config`]: Options file loading and flag merging
//! - [`error`]: Error types and Result alias

pub mod cli;
pub mod config;
pub mod error;

pub use config::{load_options, resolve_options};
pub use error::{CliError, Result};
