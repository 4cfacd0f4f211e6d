//! Converter entry points: JSON text or value in, declaration text out.
//!
//! Caller-facing contract: these functions always return a `String` and
//! never raise. Every failure — parse error, unsupported root shape — is
//! folded into a comment-marked line in the target language's comment
//! syntax, because the caller pastes the return value straight into a
//! read-only text area.

use serde_json::Value;
use thiserror::Error;

use crate::profile::Profile;
use crate::registry::ClassRegistry;
use crate::walk::Walker;

/// Internal failure taxonomy. Never escapes the module as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Error parsing JSON: {0}")]
    Parse(String),
    /// Root is null or a bare primitive.
    #[error("Invalid JSON object")]
    InvalidRoot,
    /// Root is an array with no object at index 0 (empty, or primitives).
    #[error("root array holds no object sample")]
    PrimitiveArrayRoot,
}

impl ConvertError {
    fn into_marker(self, profile: &Profile) -> String {
        match self {
            ConvertError::PrimitiveArrayRoot => {
                profile.comment_line(profile.primitive_array_root_msg)
            }
            other => profile.comment_line(&other.to_string()),
        }
    }
}

/// Parse `src` as JSON and convert it. Parse failures come back as a
/// comment-marked diagnostic, path context included.
pub fn convert_str(src: &str, profile: &Profile, root_name: &str) -> String {
    match crate::path_de::parse_value(src) {
        Ok(value) => convert_value(&value, profile, root_name),
        Err(msg) => ConvertError::Parse(msg).into_marker(profile),
    }
}

/// Convert an already-parsed JSON value.
pub fn convert_value(value: &Value, profile: &Profile, root_name: &str) -> String {
    generate(value, profile, root_name).unwrap_or_else(|err| err.into_marker(profile))
}

fn generate(value: &Value, profile: &Profile, root_name: &str) -> Result<String, ConvertError> {
    let mut registry = ClassRegistry::new();
    let mut walker = Walker::new(profile, &mut registry);

    match value {
        Value::Object(map) => walker.register_object(map, root_name),
        // an array root is represented by its item type only
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => walker.register_object(map, root_name),
            _ => return Err(ConvertError::PrimitiveArrayRoot),
        },
        _ => return Err(ConvertError::InvalidRoot),
    }

    Ok(render(&registry, profile))
}

/// Join finished declarations, deepest first and root last, preamble (if
/// any) prefixed once.
fn render(registry: &ClassRegistry, profile: &Profile) -> String {
    let mut out = String::from(profile.preamble);
    let declarations: Vec<&str> = registry.declarations_newest_first().collect();
    out.push_str(&declarations.join("\n\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CSHARP, PYDANTIC};
    use serde_json::json;

    #[test]
    fn csharp_end_to_end_nested_sample() {
        let out = convert_str(
            r#"{"id": 1, "tags": ["a","b"], "owner": {"name": "x"}}"#,
            &CSHARP,
            "Root",
        );
        let expected = "\
public class Owner
{
    public string Name { get; set; }
}

public class Root
{
    public int Id { get; set; }
    public List<string> Tags { get; set; }
    public Owner Owner { get; set; }
}";
        assert_eq!(out, expected);
    }

    #[test]
    fn pydantic_end_to_end_nested_sample() {
        let out = convert_str(
            r#"{"id": 1, "tags": ["a","b"], "owner": {"name": "x"}}"#,
            &PYDANTIC,
            "Root",
        );
        let expected = "\
from typing import List, Optional, Any
from pydantic import BaseModel

class Owner(BaseModel):
    name: str


class Root(BaseModel):
    id: int
    tags: List[str]
    owner: Owner
";
        assert_eq!(out, expected);
    }

    #[test]
    fn root_declaration_is_last() {
        let out = convert_str(r#"{"a": {"b": {"c": 1}}}"#, &CSHARP, "Root");
        let root_at = out.find("public class Root").unwrap();
        let a_at = out.find("public class A").unwrap();
        let b_at = out.find("public class B").unwrap();
        assert!(b_at < a_at && a_at < root_at);
    }

    #[test]
    fn empty_object_uses_placeholder_body() {
        assert_eq!(
            convert_str("{}", &CSHARP, "Root"),
            "public class Root\n{\n}"
        );
        assert_eq!(
            convert_str("{}", &PYDANTIC, "Root"),
            "from typing import List, Optional, Any\nfrom pydantic import BaseModel\n\nclass Root(BaseModel):\n    pass\n"
        );
    }

    #[test]
    fn root_array_of_objects_walks_first_element() {
        let out = convert_str(r#"[{"x": 1.5}, {"ignored": true}]"#, &CSHARP, "Root");
        assert_eq!(
            out,
            "public class Root\n{\n    public double X { get; set; }\n}"
        );
    }

    #[test]
    fn root_array_of_primitives_is_a_marker() {
        assert_eq!(
            convert_str("[1, 2, 3]", &CSHARP, "Root"),
            "// Root is an array of primitives, cannot generate class"
        );
        assert_eq!(
            convert_str("[1, 2, 3]", &PYDANTIC, "Root"),
            "# Root is an array of primitives"
        );
        // empty array has no sample to walk either
        assert_eq!(
            convert_str("[]", &CSHARP, "Root"),
            "// Root is an array of primitives, cannot generate class"
        );
        // null at index 0 is no object sample either
        assert_eq!(
            convert_str("[null]", &CSHARP, "Root"),
            "// Root is an array of primitives, cannot generate class"
        );
        assert_eq!(
            convert_str("[null, {\"x\": 1}]", &PYDANTIC, "Root"),
            "# Root is an array of primitives"
        );
    }

    #[test]
    fn primitive_root_is_a_marker() {
        assert_eq!(convert_str("null", &CSHARP, "Root"), "// Invalid JSON object");
        assert_eq!(convert_str("42", &PYDANTIC, "Root"), "# Invalid JSON object");
        assert_eq!(convert_str("\"hi\"", &CSHARP, "Root"), "// Invalid JSON object");
    }

    #[test]
    fn malformed_input_never_raises() {
        let out = convert_str("{not json", &CSHARP, "Root");
        assert!(out.starts_with("// Error parsing JSON: "));
        let out = convert_str("{not json", &PYDANTIC, "Root");
        assert!(out.starts_with("# Error parsing JSON: "));
    }

    #[test]
    fn conversion_is_stable_across_invocations() {
        let src = r#"{"id": 7, "items": [{"label": "a", "score": 0.5}], "meta": {}}"#;
        let first = convert_str(src, &PYDANTIC, "Root");
        let second = convert_str(src, &PYDANTIC, "Root");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_root_name_is_used_verbatim() {
        let out = convert_value(&json!({"v": true}), &CSHARP, "Payload");
        assert_eq!(
            out,
            "public class Payload\n{\n    public bool V { get; set; }\n}"
        );
    }

    #[test]
    fn integer_versus_float_properties() {
        let out = convert_str(r#"{"a": 5}"#, &CSHARP, "Root");
        assert!(out.contains("public int A { get; set; }"));
        let out = convert_str(r#"{"a": 5.5}"#, &CSHARP, "Root");
        assert!(out.contains("public double A { get; set; }"));
        let out = convert_str(r#"{"a": 5, "b": 5.5}"#, &PYDANTIC, "Root");
        assert!(out.contains("    a: int\n"));
        assert!(out.contains("    b: float\n"));
    }
}
