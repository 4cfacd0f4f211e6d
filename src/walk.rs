//! Single-pass structural walk: JSON sample in, inferred types out, class
//! declarations registered as a side effect.
//!
//! The walk is shared between all emission profiles; everything
//! language-specific comes from the `Profile` it is constructed with. It
//! samples exactly one example per shape — index 0 of arrays, the one
//! object it is handed — and never reconciles heterogeneous evidence.

use serde_json::{Map, Value};

use crate::ir::{InferredType, PrimKind};
use crate::profile::Profile;
use crate::registry::ClassRegistry;

pub struct Walker<'a> {
    profile: &'a Profile,
    registry: &'a mut ClassRegistry,
}

impl<'a> Walker<'a> {
    pub fn new(profile: &'a Profile, registry: &'a mut ClassRegistry) -> Self {
        Self { profile, registry }
    }

    /// Walk one object and register its declaration under `class_name`.
    ///
    /// The name is claimed before any property is inferred, so recursive or
    /// repeated references to the same name short-circuit to `Named` instead
    /// of re-walking (this is the termination guarantee). A later object
    /// with the same derived name but a different shape is silently skipped.
    pub fn register_object(&mut self, obj: &Map<String, Value>, class_name: &str) {
        if self.registry.is_claimed(class_name) {
            return;
        }
        self.registry.claim(class_name);

        let mut body = (self.profile.class_header)(class_name);
        if obj.is_empty() {
            body.push_str(self.profile.empty_body);
        } else {
            for (key, value) in obj {
                let ty = self.property_type(key, value);
                let prop = (self.profile.property_name)(key);
                body.push_str(&(self.profile.property_line)(&prop, &self.profile.type_name(&ty)));
            }
        }
        body.push_str(self.profile.class_footer);

        self.registry.finish(class_name, body);
    }

    /// Infer the type of a field value. Only here is there a key to derive
    /// class names from, so only here do nested objects become named classes.
    fn property_type(&mut self, key: &str, value: &Value) -> InferredType {
        match value {
            Value::Object(map) => {
                let name = (self.profile.class_name)(key);
                self.register_object(map, &name);
                InferredType::Named(name)
            }
            Value::Array(items) => match items.first() {
                Some(Value::Object(map)) => {
                    let name = self.profile.item_class_name(key);
                    self.register_object(map, &name);
                    InferredType::list_of(InferredType::Named(name))
                }
                _ => self.value_type(value),
            },
            _ => self.value_type(value),
        }
    }

    /// Context-free inference: no field key, so no class can be named.
    /// Objects reached this way (e.g. inside an array of arrays) collapse to
    /// the any/unknown primitive.
    fn value_type(&self, value: &Value) -> InferredType {
        match value {
            Value::Null => InferredType::Primitive(PrimKind::Any),
            Value::Bool(_) => InferredType::Primitive(PrimKind::Bool),
            Value::String(_) => InferredType::Primitive(PrimKind::Text),
            Value::Number(n) => {
                let kind = if is_mathematical_integer(n) {
                    PrimKind::Integer
                } else {
                    PrimKind::Float
                };
                InferredType::Primitive(kind)
            }
            Value::Array(items) => match items.first() {
                None => InferredType::list_of(InferredType::Primitive(PrimKind::Any)),
                Some(first) => InferredType::list_of(self.value_type(first)),
            },
            Value::Object(_) => InferredType::Primitive(PrimKind::Any),
        }
    }
}

/// Mathematical integer test, not a type-tag test: `5.0` counts as an
/// integer the same way `5` does.
fn is_mathematical_integer(n: &serde_json::Number) -> bool {
    if n.as_i64().is_some() || n.as_u64().is_some() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}
