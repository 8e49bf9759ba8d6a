//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use tafqit_engine::{wordify, NumericInput, TafqitError, WordifyOptions};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, Default, World)]
pub struct TafqitWorld {
    /// Options for the next wordify call
    pub options: WordifyOptions,
    /// Last wordify result (if successful)
    pub result: Option<String>,
    /// Last error (if wordifying or option parsing failed)
    pub error: Option<TafqitError>,
}

impl TafqitWorld {
    /// Wordify a number and store the result or error
    pub fn wordify(&mut self, input: impl Into<NumericInput>) {
        match wordify(input, &self.options) {
            Ok(text) => {
                self.result = Some(text);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e);
            }
        }
    }

    /// The words from the last call, failing the step if it errored
    pub fn words(&self) -> &str {
        match (&self.result, &self.error) {
            (Some(text), _) => text,
            (None, Some(e)) => panic!("Expected successful wordify, got error: {e}"),
            (None, None) => panic!("No number has been wordified in this scenario"),
        }
    }

    /// Name of the last error variant
    pub fn error_kind(&self) -> Option<&'static str> {
        self.error.as_ref().map(|e| match e {
            TafqitError::InvalidInput(_) => "InvalidInput",
            TafqitError::UnsupportedMagnitude { .. } => "UnsupportedMagnitude",
            TafqitError::InvalidOption { .. } => "InvalidOption",
        })
    }
}
