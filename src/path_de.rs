//! JSON parsing with path context in error messages.

use serde_json::Value;

/// Parse a JSON document, reporting the JSON path at which deserialization
/// failed. The description ends up verbatim inside a failure marker, so it
/// stays a plain `String` rather than a structured error.
pub fn parse_value(src: &str) -> Result<Value, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, Value>(de).map_err(|err| {
        let path = err.path().to_string();
        format!("at JSON path {path} → {}", err.into_inner())
    })
}
