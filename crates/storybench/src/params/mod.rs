//! Runtime parameter schemas for controlled stories.
//!
//! A [`ParamsSpec`] is a JSON document describing the object-shaped input of
//! a story's render function: named fields with a kind, an optional default
//! and an optional description. Story files author specs with the builder
//! functions in this module; [`ParamsSpec::from_value`] accepts documents
//! produced elsewhere, in either of the two supported node layouts (see
//! [`introspect`](self) internals: a lowercase `"type"` tag, or the legacy
//! PascalCase `"typeName"` field).

use std::collections::HashMap;

use serde_json::{json, Map, Value};

mod introspect;

pub use introspect::{controls_for, defaults_for, ControlDescriptor, ControlKind};

use introspect::{kind_of, unwrap_field, Kind};

/// Current values of a story's controls, keyed by field name.
pub type ControlValues = HashMap<String, Value>;

/// Error raised by schema resolution and whole-schema introspection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("params schema root is not an object")]
    NotAnObject,

    #[error("missing required field \"{0}\"")]
    MissingField(String),

    #[error("field \"{field}\" expects {expected}")]
    TypeMismatch { field: String, expected: String },
}

/// An object-shaped parameter schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsSpec {
    root: Value,
}

impl ParamsSpec {
    /// Wrap an externally produced schema document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The underlying schema document.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// The field map of the root object, if the root is an object node.
    pub(crate) fn shape(&self) -> Option<&Map<String, Value>> {
        if kind_of(&self.root)? != Kind::Object {
            return None;
        }
        self.root.get("shape")?.as_object()
    }

    /// Resolve an input map against the schema: provided values are
    /// type-checked, absent fields take their declared default, absent
    /// optional/nullable fields are omitted, and absent required fields
    /// are an error.
    ///
    /// Resolving an empty map yields the schema's effective defaults.
    pub fn resolve(&self, input: &ControlValues) -> Result<ControlValues, ParamsError> {
        let shape = self.shape().ok_or(ParamsError::NotAnObject)?;
        let mut out = ControlValues::new();

        for (name, node) in shape {
            let unwrapped = unwrap_field(node);

            match input.get(name) {
                Some(value) => {
                    check_value(name, unwrapped.inner, value)?;
                    out.insert(name.clone(), value.clone());
                }
                None => match unwrapped.default {
                    Some(default) => {
                        out.insert(name.clone(), default);
                    }
                    None if unwrapped.omittable => {}
                    None => return Err(ParamsError::MissingField(name.clone())),
                },
            }
        }

        Ok(out)
    }
}

/// Check a provided value against the fully unwrapped field node.
/// Unclassifiable nodes accept any value.
fn check_value(name: &str, node: &Value, value: &Value) -> Result<(), ParamsError> {
    let mismatch = |expected: &str| ParamsError::TypeMismatch {
        field: name.to_string(),
        expected: expected.to_string(),
    };

    match kind_of(node) {
        Some(Kind::String) if !value.is_string() => Err(mismatch("a string")),
        Some(Kind::Number) if !value.is_number() => Err(mismatch("a number")),
        Some(Kind::Boolean) if !value.is_boolean() => Err(mismatch("a boolean")),
        Some(Kind::Enum) => {
            let allowed = introspect::enum_values(node).unwrap_or_default();
            let ok = value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|v| v == s));
            if ok {
                Ok(())
            } else {
                Err(mismatch(&format!("one of {allowed:?}")))
            }
        }
        Some(Kind::Literal) => {
            let expected = introspect::literal_value(node);
            if expected == Some(value) {
                Ok(())
            } else {
                Err(mismatch("the declared literal value"))
            }
        }
        _ => Ok(()),
    }
}

/// A single field schema under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    node: Value,
}

impl FieldSpec {
    /// Wrap the field in a default-providing layer.
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        Self {
            node: json!({ "type": "default", "value": value.into(), "inner": self.node }),
        }
    }

    /// Mark the field as optional (may be absent from resolved output).
    pub fn optional(self) -> Self {
        Self {
            node: json!({ "type": "optional", "inner": self.node }),
        }
    }

    /// Mark the field as nullable.
    pub fn nullable(self) -> Self {
        Self {
            node: json!({ "type": "nullable", "inner": self.node }),
        }
    }

    /// Attach a human-readable description, used as the control label.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        if let Some(obj) = self.node.as_object_mut() {
            obj.insert("description".to_string(), Value::String(text.into()));
        }
        self
    }
}

/// Build an object schema from named fields. Field order is preserved and
/// drives the order of the derived controls.
pub fn object<I, S>(fields: I) -> ParamsSpec
where
    I: IntoIterator<Item = (S, FieldSpec)>,
    S: Into<String>,
{
    let mut shape = Map::new();
    for (name, field) in fields {
        shape.insert(name.into(), field.node);
    }
    ParamsSpec::from_value(json!({ "type": "object", "shape": shape }))
}

/// A free-text string field.
pub fn string() -> FieldSpec {
    FieldSpec {
        node: json!({ "type": "string" }),
    }
}

/// A numeric field.
pub fn number() -> FieldSpec {
    FieldSpec {
        node: json!({ "type": "number" }),
    }
}

/// A boolean field.
pub fn boolean() -> FieldSpec {
    FieldSpec {
        node: json!({ "type": "boolean" }),
    }
}

/// A closed string enumeration.
pub fn choice<I, S>(values: I) -> FieldSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<Value> = values.into_iter().map(|v| Value::String(v.into())).collect();
    FieldSpec {
        node: json!({ "type": "enum", "values": values }),
    }
}

/// A single fixed literal (string, boolean or number).
pub fn literal(value: impl Into<Value>) -> FieldSpec {
    FieldSpec {
        node: json!({ "type": "literal", "value": value.into() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod builder_tests {
        use super::*;

        #[test]
        fn object_preserves_field_order() {
            let spec = object([
                ("zebra", string()),
                ("apple", number()),
                ("mango", boolean()),
            ]);

            let names: Vec<&String> = spec.shape().expect("object shape").keys().collect();
            assert_eq!(names, ["zebra", "apple", "mango"]);
        }

        #[test]
        fn default_value_wraps_the_inner_node() {
            let field = string().default_value("hello");
            assert_eq!(field.node["type"], "default");
            assert_eq!(field.node["value"], "hello");
            assert_eq!(field.node["inner"]["type"], "string");
        }

        #[test]
        fn describe_annotates_the_outermost_node() {
            let field = boolean().default_value(false).describe("Disabled state");
            assert_eq!(field.node["description"], "Disabled state");
        }
    }

    mod resolve_tests {
        use super::*;

        fn button_spec() -> ParamsSpec {
            object([
                ("variant", choice(["default", "secondary"]).default_value("default")),
                ("disabled", boolean().default_value(false)),
                ("hint", string().optional()),
            ])
        }

        #[test]
        fn empty_input_yields_declared_defaults() {
            let resolved = button_spec().resolve(&ControlValues::new()).expect("resolves");

            assert_eq!(resolved.get("variant"), Some(&json!("default")));
            assert_eq!(resolved.get("disabled"), Some(&json!(false)));
            assert!(!resolved.contains_key("hint"));
        }

        #[test]
        fn provided_values_override_defaults() {
            let mut input = ControlValues::new();
            input.insert("variant".to_string(), json!("secondary"));

            let resolved = button_spec().resolve(&input).expect("resolves");
            assert_eq!(resolved.get("variant"), Some(&json!("secondary")));
            assert_eq!(resolved.get("disabled"), Some(&json!(false)));
        }

        #[test]
        fn required_field_without_default_is_an_error() {
            let spec = object([("name", string())]);
            let err = spec.resolve(&ControlValues::new()).expect_err("must fail");
            assert_eq!(err, ParamsError::MissingField("name".to_string()));
        }

        #[test]
        fn type_mismatch_is_reported_per_field() {
            let spec = object([("count", number().default_value(1))]);
            let mut input = ControlValues::new();
            input.insert("count".to_string(), json!("three"));

            let err = spec.resolve(&input).expect_err("must fail");
            assert!(matches!(err, ParamsError::TypeMismatch { ref field, .. } if field == "count"));
        }

        #[test]
        fn enum_value_outside_the_declared_set_is_rejected() {
            let spec = object([("variant", choice(["a", "b"]).default_value("a"))]);
            let mut input = ControlValues::new();
            input.insert("variant".to_string(), json!("c"));

            assert!(spec.resolve(&input).is_err());
        }

        #[test]
        fn non_object_root_is_rejected() {
            let spec = ParamsSpec::from_value(json!({ "type": "string" }));
            let err = spec.resolve(&ControlValues::new()).expect_err("must fail");
            assert_eq!(err, ParamsError::NotAnObject);
        }
    }
}
