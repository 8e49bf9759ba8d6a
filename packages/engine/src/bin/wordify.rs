//! CLI binary for wordifying a number via stdin.
//!
//! Usage:
//!   echo '{"number": 2000, "options": {"trailingTextFollows": true}}' \
//!     | cargo run --bin wordify
//!
//! Input (JSON on stdin):
//!   - number: Integer or String: the number to spell out (use a string above 2^64)
//!   - options: Optional<Object>: camelCase options (feminineSubject, hundredSpelling,
//!     insertComma, splitHundredWord, useBillionsNaming, trailingTextFollows, grammaticalCase)
//!
//! Output (JSON on stdout):
//!   - text: String: the number in Arabic words
//!   - groups: Array: per-group breakdown (position, value, is_last_effective, scale, phrase)
//!   - error: Optional<String>: error message if wordifying failed

use std::io::Read;
use tafqit_engine::{wordify_detailed, GroupBreakdown, NumericInput, WordifyOptions};

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct WordifyRequest {
    number: serde_json::Value,
    #[serde(default)]
    options: WordifyOptions,
}

#[derive(serde::Serialize)]
struct WordifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupBreakdown>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> WordifyResponse {
    WordifyResponse {
        text: None,
        groups: None,
        error: Some(msg),
    }
}

fn fail(msg: String) -> ! {
    let resp = error_response(msg);
    println!("{}", serde_json::to_string(&resp).unwrap_or_default());
    std::process::exit(1);
}

fn json_to_input(v: &serde_json::Value) -> Result<NumericInput, String> {
    match v {
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(NumericInput::from(u))
            } else if let Some(i) = n.as_i64() {
                Ok(NumericInput::from(i))
            } else {
                Err(format!("Invalid input: {n} is not an integer"))
            }
        }
        serde_json::Value::String(s) => Ok(NumericInput::from(s)),
        other => Err(format!(
            "Invalid input: expected a number or a digit string, got {other}"
        )),
    }
}

fn parse_request(input: &str) -> Result<WordifyRequest, String> {
    serde_json::from_str(input).map_err(|e| format!("Failed to parse request JSON: {e}"))
}

fn main() {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        fail(format!("Failed to read stdin: {e}"));
    }

    let request = match parse_request(&input) {
        Ok(r) => r,
        Err(e) => fail(e),
    };

    let number = match json_to_input(&request.number) {
        Ok(n) => n,
        Err(e) => fail(e),
    };

    match wordify_detailed(number, &request.options) {
        Ok(result) => {
            let resp = WordifyResponse {
                text: Some(result.text),
                groups: Some(result.groups),
                error: None,
            };
            println!("{}", serde_json::to_string(&resp).unwrap_or_default());
        }
        Err(e) => fail(format!("{e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tafqit_engine::{wordify, GrammaticalCase, TafqitError};

    #[test]
    fn test_unsigned_number() {
        assert_eq!(json_to_input(&json!(2000)).unwrap(), NumericInput::Unsigned(2000));
        assert_eq!(
            json_to_input(&json!(u64::MAX)).unwrap(),
            NumericInput::Unsigned(u128::from(u64::MAX))
        );
    }

    #[test]
    fn test_negative_number_is_rejected_by_the_engine() {
        let input = json_to_input(&json!(-5)).unwrap();
        assert_eq!(input, NumericInput::Signed(-5));
        assert!(matches!(
            wordify(input, &WordifyOptions::default()),
            Err(TafqitError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_float_is_rejected() {
        let err = json_to_input(&json!(1.5)).unwrap_err();
        assert!(err.contains("not an integer"));
    }

    #[test]
    fn test_digit_string() {
        assert_eq!(
            json_to_input(&json!("1000000000000000000000")).unwrap(),
            NumericInput::Digits("1000000000000000000000".to_string())
        );
    }

    #[test]
    fn test_other_json_types_are_rejected() {
        for value in [json!(true), json!(null), json!([1]), json!({"n": 1})] {
            let err = json_to_input(&value).unwrap_err();
            assert!(err.contains("expected a number or a digit string"), "{err}");
        }
    }

    #[test]
    fn test_request_with_options() {
        let request = parse_request(
            r#"{"number": 2000, "options": {"trailingTextFollows": true, "grammaticalCase": "genitive"}}"#,
        )
        .unwrap();
        assert!(request.options.trailing_text_follows);
        assert_eq!(request.options.grammatical_case, GrammaticalCase::Genitive);
        let input = json_to_input(&request.number).unwrap();
        assert_eq!(wordify(input, &request.options).unwrap(), "ألفي");
    }

    #[test]
    fn test_request_options_default() {
        let request = parse_request(r#"{"number": "7"}"#).unwrap();
        assert_eq!(request.options, WordifyOptions::default());
    }

    #[test]
    fn test_request_rejects_unknown_fields() {
        let err = parse_request(r#"{"number": 1, "feminine": true}"#).unwrap_err();
        assert!(err.starts_with("Failed to parse request JSON"));
        assert!(parse_request(r#"{"number": 1, "options": {"feminine": true}}"#).is_err());
        assert!(parse_request(r#"{"options": {}}"#).is_err());
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(error_response("boom".to_string())).unwrap();
        assert_eq!(json, json!({"error": "boom"}));
    }
}
