//! WASM bindings for the Tafqit engine
//!
//! This module exposes `wordify` to JavaScript with the same option names
//! as the library's JSON form (`feminineSubject`, `hundredSpelling`, ...).
//! It is feature-gated behind the `wasm` feature flag.
//!
//! # Key Constraints
//!
//! - **Number precision**: JS numbers are only exact up to 2^53 - 1. Larger
//!   values must be passed as digit strings.
//! - **Efficient serialization**: Uses `serde-wasm-bindgen` for Rust <-> JavaScript conversion
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { wordify, Wordifier } from 'tafqit-engine';
//!
//! await init();
//! wordify(3000);                                   // "ثلاثة آلاف"
//! wordify("1000000000000000000001", { useBillionsNaming: true });
//!
//! const feminine = new Wordifier({ feminineSubject: true });
//! feminine.wordify(21);                            // "إحدى وعشرون"
//! ```

use wasm_bindgen::prelude::*;

use crate::error::TafqitError;
use crate::types::{NumericInput, WordifyOptions};

/// Largest integer a JS number represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Helper to create consistent error JsValues
fn wasm_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

impl From<TafqitError> for JsValue {
    fn from(err: TafqitError) -> Self {
        wasm_error(&err.to_string())
    }
}

/// Convert a JS number into a `NumericInput`.
///
/// Only non-negative integers up to `Number.MAX_SAFE_INTEGER` are exact in
/// JS, so anything else is refused rather than rounded.
fn input_from_f64(n: f64) -> Result<NumericInput, TafqitError> {
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 {
        return Err(TafqitError::InvalidInput(format!(
            "{n} is not a non-negative integer"
        )));
    }
    if n > MAX_SAFE_INTEGER {
        return Err(TafqitError::InvalidInput(format!(
            "{n} exceeds Number.MAX_SAFE_INTEGER; pass it as a string"
        )));
    }
    Ok(NumericInput::Unsigned(n as u128))
}

/// Convert a JS number or string into a `NumericInput`
fn input_from_js(value: &JsValue) -> Result<NumericInput, JsValue> {
    if let Some(digits) = value.as_string() {
        return Ok(NumericInput::Digits(digits));
    }
    if let Some(n) = value.as_f64() {
        return Ok(input_from_f64(n)?);
    }
    Err(wasm_error("Invalid input: expected a number or a digit string"))
}

/// Convert an optional JS options object into `WordifyOptions`
fn options_from_js(value: JsValue) -> Result<WordifyOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(WordifyOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| wasm_error(&format!("Invalid options: {e}")))
}

/// Spell out a number in Arabic.
///
/// # Arguments
/// * `number` - Non-negative safe integer or digit string
/// * `options` - Optional options object (camelCase keys)
#[wasm_bindgen(js_name = wordify)]
pub fn wordify_js(number: JsValue, options: JsValue) -> Result<String, JsValue> {
    let input = input_from_js(&number)?;
    let options = options_from_js(options)?;
    Ok(crate::wordify::wordify(input, &options)?)
}

/// Spell out a number and return `{ text, groups }` with the per-group breakdown.
#[wasm_bindgen(js_name = wordifyDetailed)]
pub fn wordify_detailed_js(number: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let input = input_from_js(&number)?;
    let options = options_from_js(options)?;
    let result = crate::wordify::wordify_detailed(input, &options)?;
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| wasm_error(&format!("Failed to serialize result: {e}")))
}

/// Options validated once, reused for many numbers.
#[wasm_bindgen]
pub struct Wordifier {
    options: WordifyOptions,
}

#[wasm_bindgen]
impl Wordifier {
    /// Create a wordifier; `options` may be omitted for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Wordifier, JsValue> {
        Ok(Self {
            options: options_from_js(options)?,
        })
    }

    /// Spell out a number with this wordifier's options.
    pub fn wordify(&self, number: JsValue) -> Result<String, JsValue> {
        let input = input_from_js(&number)?;
        Ok(crate::wordify::wordify(input, &self.options)?)
    }

    /// The active options as a plain JS object.
    #[wasm_bindgen(getter)]
    pub fn options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.options)
            .map_err(|e| wasm_error(&format!("Failed to serialize options: {e}")))
    }
}
