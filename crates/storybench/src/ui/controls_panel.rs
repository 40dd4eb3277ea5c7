//! The controls panel: one editable row per schema-derived descriptor.

use dioxus::prelude::*;
use serde_json::{json, Value};

use crate::params::{ControlDescriptor, ControlKind, ControlValues};

#[derive(Props, Clone, PartialEq)]
pub struct ControlsPanelProps {
    pub controls: Vec<ControlDescriptor>,
    /// Current values; the panel reads, edits flow out through `on_change`.
    pub values: ControlValues,
    pub on_change: EventHandler<(String, Value)>,
    pub on_reset: EventHandler<()>,
}

#[component]
pub fn ControlsPanel(props: ControlsPanelProps) -> Element {
    if props.controls.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "border-top: 1px solid #e5e5e5; background-color: #fafafa; flex-shrink: 0;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 1rem; border-bottom: 1px solid #e5e5e5;",
                span {
                    style: "font-weight: 500; font-size: 0.875rem; color: #404040;",
                    "Controls"
                }
                button {
                    style: "border: none; background: none; color: #737373; font-size: 0.75rem; cursor: pointer;",
                    onclick: move |_| props.on_reset.call(()),
                    "Reset"
                }
            }
            div {
                style: "max-height: 16rem; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 1rem;",
                {props.controls.iter().cloned().map(|control| {
                    let value = props.values.get(&control.name).cloned().unwrap_or(Value::Null);
                    let key = control.name.clone();
                    let name = control.name.clone();
                    rsx! {
                        ControlField {
                            key: "{key}",
                            control,
                            value,
                            on_change: move |new_value| props.on_change.call((name.clone(), new_value)),
                        }
                    }
                })}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ControlFieldProps {
    control: ControlDescriptor,
    /// Current value; `Null` when the field has no value yet.
    value: Value,
    on_change: EventHandler<Value>,
}

#[component]
fn ControlField(props: ControlFieldProps) -> Element {
    let control = &props.control;
    let on_change = props.on_change;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.25rem;",
            label {
                style: "font-size: 0.75rem; font-weight: 500; color: #525252;",
                "{control.label}"
            }
            match control.kind {
                ControlKind::Text => {
                    let current = props.value.as_str().unwrap_or("").to_string();
                    rsx! {
                        input {
                            r#type: "text",
                            style: "width: 100%; padding: 0.375rem 0.5rem; border: 1px solid #d4d4d4; border-radius: 4px; font-size: 0.875rem;",
                            value: "{current}",
                            oninput: move |e| on_change.call(json!(e.value())),
                        }
                    }
                }
                ControlKind::Number => {
                    let current = props.value.as_f64().unwrap_or(0.0);
                    rsx! {
                        input {
                            r#type: "number",
                            style: "width: 100%; padding: 0.375rem 0.5rem; border: 1px solid #d4d4d4; border-radius: 4px; font-size: 0.875rem;",
                            value: "{current}",
                            oninput: move |e| {
                                if let Ok(parsed) = e.value().parse::<f64>() {
                                    on_change.call(json!(parsed));
                                }
                            },
                        }
                    }
                }
                ControlKind::Boolean => {
                    let checked = props.value.as_bool().unwrap_or(false);
                    rsx! {
                        input {
                            r#type: "checkbox",
                            style: "width: 1rem; height: 1rem;",
                            checked,
                            onchange: move |e| on_change.call(json!(e.checked())),
                        }
                    }
                }
                ControlKind::Select => {
                    let current = props.value.as_str().unwrap_or("").to_string();
                    rsx! {
                        select {
                            style: "width: 100%; padding: 0.375rem 0.5rem; border: 1px solid #d4d4d4; border-radius: 4px; font-size: 0.875rem; background-color: white;",
                            value: "{current}",
                            onchange: move |e| on_change.call(json!(e.value())),
                            {control.options.iter().map(|option| rsx! {
                                option {
                                    key: "{option}",
                                    value: "{option}",
                                    selected: *option == current,
                                    "{option}"
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
