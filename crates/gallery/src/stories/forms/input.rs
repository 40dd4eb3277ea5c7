//! Text input stories.

use dioxus::prelude::*;
use serde_json::Value;

use storybench::params;
use storybench::{story, story_with_controls, ModuleExport, StoryModule};

use crate::components::TextInput;

pub fn module() -> StoryModule {
    let mut module = StoryModule::new();

    module.insert(
        "Default".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { TextInput { label: "Email", placeholder: "you@example.com" } }
        })),
    );

    module.insert(
        "Disabled".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { TextInput { label: "Email", value: "read only", disabled: true } }
        })),
    );

    module.insert(
        "Interactive".to_string(),
        ModuleExport::Story(story_with_controls(
            params::object([
                (
                    "label",
                    params::string().default_value("Email").describe("Field label"),
                ),
                (
                    "placeholder",
                    params::string()
                        .default_value("you@example.com")
                        .describe("Placeholder text"),
                ),
                (
                    "disabled",
                    params::boolean().default_value(false).describe("Disabled state"),
                ),
            ]),
            |values| {
                let get = |key: &str| {
                    values
                        .get(key)
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string()
                };
                let disabled = values.get("disabled").and_then(Value::as_bool).unwrap_or(false);

                rsx! {
                    TextInput {
                        label: get("label"),
                        placeholder: get("placeholder"),
                        disabled,
                    }
                }
            },
        )),
    );

    module
}
