//! ARB (Application Resource Bundle) parsing.

use std::collections::HashMap;
use std::io::Read;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

/// Keys starting with this prefix carry metadata (`@hello`, `@@locale`), not translations.
pub const METADATA_PREFIX: char = '@';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read resource file: {0}")]
    Io(#[source] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Value of key '{key}' must be a string, found {found}")]
    NonStringValue { key: String, found: &'static str },

    #[error("Translation keys must not be empty")]
    EmptyKey,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() { Self::Io(err.into()) } else { Self::Json(err) }
    }
}

/// Parses an ARB document into its translatable key/value pairs.
///
/// The whole document must be a JSON object. Metadata entries are dropped without looking
/// at their value; every other value must be a string. Nothing is returned unless the
/// whole document is valid.
///
/// # Examples
/// ```
/// use arb_i18n_codegen::input::parse_arb;
///
/// let arb = r#"{"hello": "Bonjour", "@hello": {"description": "greeting"}}"#;
/// let pairs = parse_arb(arb.as_bytes()).unwrap();
///
/// assert_eq!(pairs.get("hello").map(String::as_str), Some("Bonjour"));
/// assert_eq!(pairs.len(), 1);
/// ```
pub fn parse_arb<R: Read>(reader: R) -> Result<HashMap<String, String>, ParseError> {
    let document: Map<String, Value> = serde_json::from_reader(reader)?;

    let mut pairs = HashMap::with_capacity(document.len());
    for (key, value) in document {
        if key.starts_with(METADATA_PREFIX) {
            continue;
        }
        if key.is_empty() {
            return Err(ParseError::EmptyKey);
        }
        match value {
            Value::String(text) => {
                pairs.insert(key, text);
            }
            other => {
                return Err(ParseError::NonStringValue { key, found: json_type_name(&other) });
            }
        }
    }

    Ok(pairs)
}

/// JSON type of `value`, for error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
