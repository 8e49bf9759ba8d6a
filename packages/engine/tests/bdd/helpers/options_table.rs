//! Option conversion helpers for Gherkin data tables
//!
//! Converts `| option | value |` rows into `WordifyOptions` through the same
//! serde path callers use, so table keys are the camelCase option names.

use cucumber::gherkin::Table;
use serde_json::{Map, Value};
use tafqit_engine::WordifyOptions;

/// Convert a Gherkin table cell to a JSON value.
///
/// `true` / `false` become booleans, everything else stays a string.
pub fn convert_cell(val: &str) -> Value {
    match val.trim() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

/// Parse a two-column option table into `WordifyOptions`.
///
/// A header row `| option | value |` is skipped if present.
pub fn parse_options_table(table: &Table) -> Result<WordifyOptions, serde_json::Error> {
    let mut map = Map::new();
    for row in &table.rows {
        if row.len() < 2 || row[0].trim() == "option" {
            continue;
        }
        map.insert(row[0].trim().to_string(), convert_cell(&row[1]));
    }
    serde_json::from_value(Value::Object(map))
}
