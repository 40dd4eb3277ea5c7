//! Schema introspection: derives controls panel descriptors and default
//! values from a [`ParamsSpec`] document.
//!
//! Two node layouts are tolerated: the current one tags nodes with a
//! lowercase `"type"` string, the legacy exporter used a PascalCase
//! `"typeName"` field (with `"innerType"` / `"defaultValue"` instead of
//! `"inner"` / `"value"`). Detection tries the current layout first and
//! falls back to the legacy one; a node matching neither is simply not
//! introspectable and its field is dropped from the panel.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{ControlValues, ParamsError, ParamsSpec};

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel-boundary pattern"));

/// Wrapper layers are unwrapped at most this many times per field, so a
/// malformed self-referencing document cannot hang introspection.
const MAX_UNWRAP_DEPTH: usize = 10;

/// The kind of widget a control renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Text,
    Number,
    Boolean,
    Select,
}

/// One entry of the controls panel, derived from a single schema field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDescriptor {
    pub kind: ControlKind,
    /// Field name in the schema (and in the values map).
    pub name: String,
    /// Display label: the field's description, or the name split on word
    /// boundaries and capitalized.
    pub label: String,
    /// Effective default value for the field.
    pub default: Value,
    /// Allowed values, for `Select` controls only.
    pub options: Vec<String>,
}

/// Canonical node kinds shared by both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    String,
    Number,
    Boolean,
    Enum,
    Literal,
    Default,
    Optional,
    Nullable,
    Object,
}

/// Classify a schema node's kind, trying the current lowercase `"type"`
/// tag first and the legacy `"typeName"` field second.
pub(crate) fn kind_of(node: &Value) -> Option<Kind> {
    let obj = node.as_object()?;

    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_ascii_lowercase)
        .or_else(|| {
            obj.get("typeName")
                .and_then(Value::as_str)
                .map(str::to_ascii_lowercase)
        })?;

    match tag.as_str() {
        "string" => Some(Kind::String),
        "number" => Some(Kind::Number),
        "boolean" => Some(Kind::Boolean),
        "enum" => Some(Kind::Enum),
        "literal" => Some(Kind::Literal),
        "default" => Some(Kind::Default),
        "optional" => Some(Kind::Optional),
        "nullable" => Some(Kind::Nullable),
        "object" => Some(Kind::Object),
        _ => None,
    }
}

fn inner_of(node: &Value) -> Option<&Value> {
    let obj = node.as_object()?;
    obj.get("inner").or_else(|| obj.get("innerType"))
}

fn default_value_of(node: &Value) -> Option<&Value> {
    let obj = node.as_object()?;
    obj.get("defaultValue").or_else(|| obj.get("value"))
}

fn description_of(node: &Value) -> Option<String> {
    node.get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The string values of an enum node; `None` when absent or empty.
pub(crate) fn enum_values(node: &Value) -> Option<Vec<String>> {
    let values: Vec<String> = node
        .get("values")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// The fixed value of a literal node.
pub(crate) fn literal_value(node: &Value) -> Option<&Value> {
    node.get("value")
}

pub(crate) struct Unwrapped<'a> {
    /// The innermost non-wrapper node.
    pub inner: &'a Value,
    /// The outermost declared default, if any wrapper provided one.
    pub default: Option<Value>,
    /// The outermost description found at any depth.
    pub description: Option<String>,
    /// Whether an optional/nullable wrapper was crossed.
    pub omittable: bool,
}

/// Peel default/optional/nullable wrappers off a field node, capturing the
/// outermost default and description on the way in.
pub(crate) fn unwrap_field(node: &Value) -> Unwrapped<'_> {
    let mut current = node;
    let mut default = None;
    let mut description = description_of(current);
    let mut omittable = false;

    for _ in 0..MAX_UNWRAP_DEPTH {
        let next = match kind_of(current) {
            Some(Kind::Default) => {
                if default.is_none() {
                    default = default_value_of(current).cloned();
                }
                inner_of(current)
            }
            Some(Kind::Optional) | Some(Kind::Nullable) => {
                omittable = true;
                inner_of(current)
            }
            _ => None,
        };

        let Some(next) = next else { break };
        current = next;
        if description.is_none() {
            description = description_of(current);
        }
    }

    Unwrapped {
        inner: current,
        default,
        description,
        omittable,
    }
}

struct Classified {
    kind: ControlKind,
    default: Value,
    options: Vec<String>,
}

/// Map a fully unwrapped node to a control kind with its builtin default.
/// Unsupported kinds (objects, arrays, unknown layouts) yield `None`.
fn classify(node: &Value) -> Option<Classified> {
    match kind_of(node)? {
        Kind::String => Some(Classified {
            kind: ControlKind::Text,
            default: json!(""),
            options: Vec::new(),
        }),
        Kind::Number => Some(Classified {
            kind: ControlKind::Number,
            default: json!(0),
            options: Vec::new(),
        }),
        Kind::Boolean => Some(Classified {
            kind: ControlKind::Boolean,
            default: json!(false),
            options: Vec::new(),
        }),
        Kind::Enum => {
            let options = enum_values(node)?;
            let first = options.first()?.clone();
            Some(Classified {
                kind: ControlKind::Select,
                default: Value::String(first),
                options,
            })
        }
        Kind::Literal => {
            let value = literal_value(node)?;
            match value {
                Value::String(s) => Some(Classified {
                    kind: ControlKind::Select,
                    default: value.clone(),
                    options: vec![s.clone()],
                }),
                Value::Bool(_) => Some(Classified {
                    kind: ControlKind::Boolean,
                    default: value.clone(),
                    options: Vec::new(),
                }),
                Value::Number(_) => Some(Classified {
                    kind: ControlKind::Number,
                    default: value.clone(),
                    options: Vec::new(),
                }),
                _ => None,
            }
        }
        _ => None,
    }
}

fn field_control(name: &str, node: &Value) -> Option<ControlDescriptor> {
    let unwrapped = unwrap_field(node);
    let classified = classify(unwrapped.inner)?;

    Some(ControlDescriptor {
        kind: classified.kind,
        name: name.to_string(),
        label: unwrapped
            .description
            .unwrap_or_else(|| format_label(name)),
        default: unwrapped.default.unwrap_or(classified.default),
        options: classified.options,
    })
}

/// Derive the controls panel descriptors for an object schema, in field
/// order. Fields that cannot be mapped to a supported control kind are
/// omitted; only a root that is not an object at all is an error.
pub fn controls_for(spec: &ParamsSpec) -> Result<Vec<ControlDescriptor>, ParamsError> {
    let shape = spec.shape().ok_or(ParamsError::NotAnObject)?;
    Ok(shape
        .iter()
        .filter_map(|(name, node)| field_control(name, node))
        .collect())
}

/// Effective default values for an object schema.
///
/// Resolving an empty input reproduces the schema's own defaulting rules;
/// if that fails (a required field has no default) the defaults are
/// assembled from the per-field descriptors instead.
pub fn defaults_for(spec: &ParamsSpec) -> ControlValues {
    match spec.resolve(&ControlValues::new()) {
        Ok(values) => values,
        Err(err) => {
            tracing::debug!(error = %err, "schema does not resolve empty input, using per-control defaults");
            let mut out = ControlValues::new();
            if let Ok(controls) = controls_for(spec) {
                for control in controls {
                    out.insert(control.name, control.default);
                }
            }
            out
        }
    }
}

/// Turn a field name into a display label: camel-case boundaries and
/// underscore/dash/space separators become word breaks, each word is
/// capitalized. `maxRetries` becomes "Max Retries".
pub(crate) fn format_label(name: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    spaced
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{boolean, choice, literal, number, object, string};
    use super::*;

    mod kind_detection_tests {
        use super::*;

        #[test]
        fn current_layout_uses_the_lowercase_type_tag() {
            assert_eq!(kind_of(&json!({ "type": "string" })), Some(Kind::String));
            assert_eq!(kind_of(&json!({ "type": "enum" })), Some(Kind::Enum));
            assert_eq!(kind_of(&json!({ "type": "default" })), Some(Kind::Default));
        }

        #[test]
        fn current_layout_tags_are_case_normalized() {
            assert_eq!(kind_of(&json!({ "type": "String" })), Some(Kind::String));
            assert_eq!(kind_of(&json!({ "type": "BOOLEAN" })), Some(Kind::Boolean));
        }

        #[test]
        fn legacy_layout_falls_back_to_type_name() {
            assert_eq!(kind_of(&json!({ "typeName": "String" })), Some(Kind::String));
            assert_eq!(kind_of(&json!({ "typeName": "Optional" })), Some(Kind::Optional));
        }

        #[test]
        fn current_layout_wins_when_both_are_present() {
            let node = json!({ "type": "number", "typeName": "String" });
            assert_eq!(kind_of(&node), Some(Kind::Number));
        }

        #[test]
        fn unrecognized_layouts_are_not_classified() {
            assert_eq!(kind_of(&json!({ "type": "tuple" })), None);
            assert_eq!(kind_of(&json!({ "kind": "string" })), None);
            assert_eq!(kind_of(&json!("string")), None);
        }
    }

    mod unwrap_tests {
        use super::*;

        #[test]
        fn default_wrapper_yields_inner_node_and_default() {
            let node = json!({
                "type": "default",
                "value": "secondary",
                "inner": { "type": "string" }
            });

            let unwrapped = unwrap_field(&node);
            assert_eq!(kind_of(unwrapped.inner), Some(Kind::String));
            assert_eq!(unwrapped.default, Some(json!("secondary")));
        }

        #[test]
        fn legacy_wrapper_keys_are_understood() {
            let node = json!({
                "typeName": "Default",
                "defaultValue": 3,
                "innerType": { "typeName": "Number" }
            });

            let unwrapped = unwrap_field(&node);
            assert_eq!(kind_of(unwrapped.inner), Some(Kind::Number));
            assert_eq!(unwrapped.default, Some(json!(3)));
        }

        #[test]
        fn outermost_description_wins() {
            let node = json!({
                "type": "default",
                "value": true,
                "description": "outer",
                "inner": { "type": "boolean", "description": "inner" }
            });

            assert_eq!(unwrap_field(&node).description.as_deref(), Some("outer"));
        }

        #[test]
        fn description_is_found_at_any_depth() {
            let node = json!({
                "type": "optional",
                "inner": { "type": "string", "description": "inner docs" }
            });

            assert_eq!(unwrap_field(&node).description.as_deref(), Some("inner docs"));
        }

        #[test]
        fn optional_wrappers_mark_the_field_omittable() {
            let node = json!({ "type": "optional", "inner": { "type": "string" } });
            assert!(unwrap_field(&node).omittable);
            assert!(!unwrap_field(&json!({ "type": "string" })).omittable);
        }

        #[test]
        fn unwrapping_is_bounded() {
            // A wrapper tower deeper than the cap never reaches a concrete
            // inner node; the field is dropped rather than looping.
            let mut node = json!({ "type": "string" });
            for _ in 0..15 {
                node = json!({ "type": "optional", "inner": node });
            }

            let unwrapped = unwrap_field(&node);
            assert_eq!(kind_of(unwrapped.inner), Some(Kind::Optional));
            assert!(classify(unwrapped.inner).is_none());
        }
    }

    mod label_tests {
        use super::*;

        #[test]
        fn camel_case_splits_into_capitalized_words() {
            assert_eq!(format_label("maxRetries"), "Max Retries");
            assert_eq!(format_label("disabled"), "Disabled");
        }

        #[test]
        fn underscores_and_dashes_are_word_breaks() {
            assert_eq!(format_label("max_retries"), "Max Retries");
            assert_eq!(format_label("text-input"), "Text Input");
        }
    }

    mod controls_tests {
        use super::*;

        #[test]
        fn primitive_kinds_map_to_their_controls() {
            let spec = object([
                ("title", string()),
                ("count", number()),
                ("active", boolean()),
                ("tone", choice(["info", "warn"])),
            ]);

            let controls = controls_for(&spec).expect("object schema");
            let kinds: Vec<ControlKind> = controls.iter().map(|c| c.kind).collect();
            assert_eq!(
                kinds,
                [
                    ControlKind::Text,
                    ControlKind::Number,
                    ControlKind::Boolean,
                    ControlKind::Select
                ]
            );
        }

        #[test]
        fn builtin_defaults_apply_when_no_default_is_declared() {
            let spec = object([("title", string()), ("count", number()), ("on", boolean())]);

            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls[0].default, json!(""));
            assert_eq!(controls[1].default, json!(0));
            assert_eq!(controls[2].default, json!(false));
        }

        #[test]
        fn enum_defaults_to_its_first_value_unless_overridden() {
            let spec = object([
                ("plain", choice(["a", "b"])),
                ("picked", choice(["a", "b"]).default_value("b")),
            ]);

            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls[0].default, json!("a"));
            assert_eq!(controls[1].default, json!("b"));
        }

        #[test]
        fn literals_degenerate_to_fixed_controls() {
            let spec = object([
                ("tag", literal("beta")),
                ("flag", literal(true)),
                ("answer", literal(42)),
            ]);

            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls[0].kind, ControlKind::Select);
            assert_eq!(controls[0].options, ["beta"]);
            assert_eq!(controls[1].kind, ControlKind::Boolean);
            assert_eq!(controls[1].default, json!(true));
            assert_eq!(controls[2].kind, ControlKind::Number);
            assert_eq!(controls[2].default, json!(42));
        }

        #[test]
        fn description_becomes_the_label() {
            let spec = object([("variant", string().describe("Button variant"))]);
            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls[0].label, "Button variant");
        }

        #[test]
        fn unsupported_fields_are_omitted_without_affecting_the_rest() {
            let spec = ParamsSpec::from_value(json!({
                "type": "object",
                "shape": {
                    "nested": { "type": "object", "shape": {} },
                    "mystery": { "type": "tuple" },
                    "label": { "type": "string" }
                }
            }));

            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls.len(), 1);
            assert_eq!(controls[0].name, "label");
        }

        #[test]
        fn empty_enums_are_omitted() {
            let spec = ParamsSpec::from_value(json!({
                "type": "object",
                "shape": { "tone": { "type": "enum", "values": [] } }
            }));

            assert!(controls_for(&spec).expect("object schema").is_empty());
        }

        #[test]
        fn legacy_layout_schemas_introspect_like_current_ones() {
            let spec = ParamsSpec::from_value(json!({
                "typeName": "Object",
                "shape": {
                    "variant": {
                        "typeName": "Default",
                        "defaultValue": "default",
                        "innerType": { "typeName": "Enum", "values": ["default", "secondary"] }
                    },
                    "disabled": { "typeName": "Boolean" }
                }
            }));

            let controls = controls_for(&spec).expect("object schema");
            assert_eq!(controls.len(), 2);
            assert_eq!(controls[0].kind, ControlKind::Select);
            assert_eq!(controls[0].default, json!("default"));
            assert_eq!(controls[1].kind, ControlKind::Boolean);
        }

        #[test]
        fn non_object_root_is_a_whole_schema_error() {
            let spec = ParamsSpec::from_value(json!({ "type": "string" }));
            assert_eq!(controls_for(&spec), Err(ParamsError::NotAnObject));
        }
    }

    mod defaults_tests {
        use super::*;

        #[test]
        fn declared_defaults_are_extracted() {
            let spec = object([
                (
                    "variant",
                    choice(["default", "secondary"]).default_value("default"),
                ),
                ("disabled", boolean().default_value(false)),
            ]);

            let defaults = defaults_for(&spec);
            assert_eq!(defaults.len(), 2);
            assert_eq!(defaults.get("variant"), Some(&json!("default")));
            assert_eq!(defaults.get("disabled"), Some(&json!(false)));
        }

        #[test]
        fn required_fields_fall_back_to_builtin_defaults() {
            // `resolve` on an empty input fails here, so defaults come from
            // the descriptors instead.
            let spec = object([("name", string()), ("count", number().default_value(7))]);

            let defaults = defaults_for(&spec);
            assert_eq!(defaults.get("name"), Some(&json!("")));
            assert_eq!(defaults.get("count"), Some(&json!(7)));
        }
    }
}
