//! Options file loading and flag merging.
//!
//! An options file is YAML using the library's camelCase option names:
//!
//! ```yaml
//! feminineSubject: true
//! hundredSpelling: miah
//! grammaticalCase: genitive
//! ```
//!
//! Command-line flags are applied on top of the file. Flags can only switch
//! an option on; to switch one off, leave it out of the file.

use std::fs;
use std::path::Path;

use tafqit_engine::{HundredSpelling, WordifyOptions};

use crate::cli::OptionFlags;
use crate::error::{CliError, Result};

/// Load options from a YAML file.
///
/// Missing keys take their defaults; unknown keys and out-of-range values
/// are rejected.
pub fn load_options(path: &Path) -> Result<WordifyOptions> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty file means "all defaults"
    if content.trim().is_empty() {
        return Ok(WordifyOptions::default());
    }

    let options = serde_yaml_ng::from_str(&content)?;
    tracing::debug!(path = %path.display(), ?options, "Loaded options file");
    Ok(options)
}

/// Build the effective options: the config file (if any), then the flags.
pub fn resolve_options(flags: &OptionFlags) -> Result<WordifyOptions> {
    let mut options = match &flags.config {
        Some(path) => load_options(path)?,
        None => WordifyOptions::default(),
    };

    if flags.feminine {
        options.feminine_subject = true;
    }
    if flags.miah {
        options.hundred_spelling = HundredSpelling::Miah;
    }
    if flags.comma {
        options.insert_comma = true;
    }
    if flags.split_hundred {
        options.split_hundred_word = true;
    }
    if flags.billions {
        options.use_billions_naming = true;
    }
    if flags.text_after {
        options.trailing_text_follows = true;
    }
    if let Some(case) = flags.case {
        options.grammatical_case = case;
    }

    Ok(options)
}
