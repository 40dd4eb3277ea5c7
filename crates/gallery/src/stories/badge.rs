//! Badge stories.

use dioxus::prelude::*;
use serde_json::Value;

use storybench::params;
use storybench::{story, story_with_controls, ModuleExport, StoryModule};

use crate::components::{Badge, BadgeTone};

pub fn module() -> StoryModule {
    let mut module = StoryModule::new();

    module.insert(
        "Neutral".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Badge { "Neutral" } }
        })),
    );

    module.insert(
        "Success".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { Badge { tone: BadgeTone::Success, "Success" } }
        })),
    );

    module.insert(
        "Interactive".to_string(),
        ModuleExport::Story(story_with_controls(
            params::object([
                (
                    "tone",
                    params::choice(["neutral", "success", "warning", "danger"])
                        .default_value("neutral")
                        .describe("Badge tone"),
                ),
                (
                    "text",
                    params::string().default_value("Badge").describe("Badge text"),
                ),
            ]),
            |values| {
                let tone =
                    BadgeTone::from_name(values.get("tone").and_then(Value::as_str).unwrap_or(""));
                let text = values
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or("Badge")
                    .to_string();

                rsx! { Badge { tone, "{text}" } }
            },
        )),
    );

    module
}
