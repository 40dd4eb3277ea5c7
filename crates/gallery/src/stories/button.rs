//! Button stories: one per fixed variant, plus an interactive story with
//! schema-driven controls.

use dioxus::prelude::*;
use serde_json::Value;

use storybench::params;
use storybench::{story, story_with_controls, ModuleExport, StoryModule};

use crate::components::{Button, ButtonVariant};

pub fn module() -> StoryModule {
    let mut module = StoryModule::new();

    module.insert(
        "Default".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { "Click me" } }
        })),
    );

    module.insert(
        "Secondary".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { variant: ButtonVariant::Secondary, "Secondary" } }
        })),
    );

    module.insert(
        "Destructive".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { variant: ButtonVariant::Destructive, "Delete" } }
        })),
    );

    module.insert(
        "Outline".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { variant: ButtonVariant::Outline, "Outline" } }
        })),
    );

    module.insert(
        "Ghost".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { variant: ButtonVariant::Ghost, "Ghost" } }
        })),
    );

    module.insert(
        "Disabled".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Button { disabled: true, "Disabled" } }
        })),
    );

    module.insert(
        "Interactive".to_string(),
        ModuleExport::Story(story_with_controls(
            params::object([
                (
                    "variant",
                    params::choice(["default", "secondary", "destructive", "outline", "ghost"])
                        .default_value("default")
                        .describe("Button variant"),
                ),
                (
                    "disabled",
                    params::boolean().default_value(false).describe("Disabled state"),
                ),
                (
                    "label",
                    params::string()
                        .default_value("Interactive Button")
                        .describe("Button text"),
                ),
            ]),
            |values| {
                let variant = ButtonVariant::from_name(
                    values.get("variant").and_then(Value::as_str).unwrap_or(""),
                );
                let disabled = values.get("disabled").and_then(Value::as_bool).unwrap_or(false);
                let label = values
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or("Interactive Button")
                    .to_string();

                rsx! { Button { variant, disabled, "{label}" } }
            },
        )),
    );

    module
}
