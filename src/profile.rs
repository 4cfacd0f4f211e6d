//! Emission profiles: everything that differs between target languages,
//! expressed as data so the structural walk stays language-agnostic.
//!
//! Output formatting is contractual down to the byte (the result is meant
//! to be pasted verbatim into a source file), so each profile pins exact
//! header/footer/property templates rather than going through a generic
//! pretty-printer.

use once_cell::sync::Lazy;

use crate::ir::{InferredType, PrimKind};

/// Declarative description of one target language's class/model syntax.
pub struct Profile {
    pub name: &'static str,

    /// Line-comment marker, used for failure markers ("// ..." / "# ...").
    pub comment_prefix: &'static str,
    /// Emitted once before the first declaration (imports etc.). Empty if
    /// the language needs none.
    pub preamble: &'static str,

    // primitive type names
    pub integer_type: &'static str,
    pub float_type: &'static str,
    pub bool_type: &'static str,
    pub text_type: &'static str,
    pub any_type: &'static str,

    // list wrapper syntax, e.g. `List<` + T + `>`
    pub list_prefix: &'static str,
    pub list_suffix: &'static str,

    /// When false, an integer sample inside a list wrapper still renders as
    /// the float type; only direct property samples are narrowed. Matches
    /// profiles that bias toward the wider numeric type except at
    /// property-emission time.
    pub integers_inside_lists: bool,

    pub class_header: fn(&str) -> String,
    pub class_footer: &'static str,
    /// Body line for one property, already-transformed name + rendered type.
    pub property_line: fn(&str, &str) -> String,
    /// Placeholder body for a class with zero properties.
    pub empty_body: &'static str,

    /// Transform applied to derived class names.
    pub class_name: fn(&str) -> String,
    /// Transform applied to property names.
    pub property_name: fn(&str) -> String,
    /// Suffix appended when deriving an item-class name from a singular key.
    pub item_suffix: &'static str,

    /// Failure text for a root that is an array of primitives.
    pub primitive_array_root_msg: &'static str,
}

impl Profile {
    /// Render an inferred type at property position.
    pub fn type_name(&self, ty: &InferredType) -> String {
        self.render(ty, true)
    }

    fn render(&self, ty: &InferredType, at_property: bool) -> String {
        match ty {
            InferredType::Primitive(kind) => self.primitive_name(*kind, at_property).to_string(),
            InferredType::ListOf(item) => {
                format!("{}{}{}", self.list_prefix, self.render(item, false), self.list_suffix)
            }
            InferredType::Named(name) => name.clone(),
        }
    }

    fn primitive_name(&self, kind: PrimKind, at_property: bool) -> &'static str {
        match kind {
            PrimKind::Integer => {
                if at_property || self.integers_inside_lists {
                    self.integer_type
                } else {
                    self.float_type
                }
            }
            PrimKind::Float => self.float_type,
            PrimKind::Bool => self.bool_type,
            PrimKind::Text => self.text_type,
            PrimKind::Any => self.any_type,
        }
    }

    /// Derive the element-class name for an array of objects from the key of
    /// the containing field: strip a trailing pluralizing `s`, otherwise
    /// append the item suffix; then apply the class-name transform.
    pub fn item_class_name(&self, key: &str) -> String {
        let base = match key.strip_suffix('s') {
            Some(stripped) => stripped.to_string(),
            None => format!("{key}{}", self.item_suffix),
        };
        (self.class_name)(&base)
    }

    /// Prefix `msg` with the profile's comment marker.
    pub fn comment_line(&self, msg: &str) -> String {
        format!("{} {msg}", self.comment_prefix)
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

fn identity(s: &str) -> String {
    s.to_string()
}

// ———————————————————————————————————————————————————————————————————————————
// PROFILE A: C# auto-property classes
// ———————————————————————————————————————————————————————————————————————————

pub static CSHARP: Lazy<Profile> = Lazy::new(|| Profile {
    name: "csharp",
    comment_prefix: "//",
    preamble: "",
    integer_type: "int",
    float_type: "double",
    bool_type: "bool",
    text_type: "string",
    any_type: "object",
    list_prefix: "List<",
    list_suffix: ">",
    integers_inside_lists: true,
    class_header: |name| format!("public class {name}\n{{\n"),
    class_footer: "}",
    property_line: |name, ty| format!("    public {ty} {name} {{ get; set; }}\n"),
    empty_body: "",
    class_name: capitalize_first,
    property_name: capitalize_first,
    item_suffix: "Item",
    primitive_array_root_msg: "Root is an array of primitives, cannot generate class",
});

// ———————————————————————————————————————————————————————————————————————————
// PROFILE B: Python Pydantic models
// ———————————————————————————————————————————————————————————————————————————

pub static PYDANTIC: Lazy<Profile> = Lazy::new(|| Profile {
    name: "pydantic",
    comment_prefix: "#",
    preamble: "from typing import List, Optional, Any\nfrom pydantic import BaseModel\n\n",
    integer_type: "int",
    float_type: "float",
    bool_type: "bool",
    text_type: "str",
    any_type: "Any",
    list_prefix: "List[",
    list_suffix: "]",
    // narrowed at property-emission time only
    integers_inside_lists: false,
    class_header: |name| format!("class {name}(BaseModel):\n"),
    class_footer: "",
    property_line: |name, ty| format!("    {name}: {ty}\n"),
    empty_body: "    pass\n",
    class_name: capitalize_first,
    property_name: identity,
    item_suffix: "Item",
    primitive_array_root_msg: "Root is an array of primitives",
});

// ———————————————————————————————————————————————————————————————————————————
// TESTS
// ———————————————————————————————————————————————————————————————————————————
