//! File templates written by `cargo xtask init`.

/// Crate name the templates import the workbench under.
pub const DEFAULT_ALIAS: &str = "storybench";

/// Rewrite workbench imports to an alternate crate name.
pub fn apply_alias(template: &str, alias: &str) -> String {
    if alias == DEFAULT_ALIAS {
        template.to_string()
    } else {
        template.replace(
            &format!("{DEFAULT_ALIAS}::"),
            &format!("{}::", alias.replace('-', "_")),
        )
    }
}

pub const MAIN: &str = r##"//! Composition root for the component workbench.

mod stories;
mod workbench;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storybench=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dioxus::launch(workbench::app);
}
"##;

pub const WORKBENCH: &str = r##"//! Workbench routes and shell wiring.

use dioxus::prelude::*;
use storybench::{StoryPage, StoryRegistry, WorkbenchShell};

use crate::stories;

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/ui/:..segments")]
    Workbench { segments: Vec<String> },
}

pub fn app() -> Element {
    use_context_provider(stories::registry);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Workbench { segments: Vec::<String>::new() }
    }
}

#[component]
fn Workbench(segments: Vec<String>) -> Element {
    let registry = use_context::<StoryRegistry>();
    let navigator = use_navigator();

    rsx! {
        WorkbenchShell {
            tree: registry.tree.clone(),
            loaders: registry.loaders.clone(),
            current_path: segments.clone(),
            on_navigate: move |segments: Vec<String>| {
                navigator.push(Route::Workbench { segments });
            },
            StoryPage {
                tree: registry.tree.clone(),
                loaders: registry.loaders.clone(),
                path: segments.clone(),
            }
        }
    }
}
"##;

pub const STORIES: &str = r##"//! Story registrations.

pub mod example;

use storybench::{build_registry, module_loader, StoryModules, StoryRegistry};

pub fn registry() -> StoryRegistry {
    build_registry(
        StoryModules::new().story("example", module_loader(|| async { Ok(example::module()) })),
    )
}
"##;

pub const EXAMPLE_STORY: &str = r##"//! An example story module. Copy this file to add your own.

use dioxus::prelude::*;
use serde_json::Value;

use storybench::params;
use storybench::{story, story_with_controls, ModuleExport, StoryModule};

pub fn module() -> StoryModule {
    let mut module = StoryModule::new();

    module.insert(
        "Default".to_string(),
        ModuleExport::Story(story(|| {
            rsx! { p { "Hello from Storybench" } }
        })),
    );

    module.insert(
        "Interactive".to_string(),
        ModuleExport::Story(story_with_controls(
            params::object([
                (
                    "text",
                    params::string().default_value("Hello").describe("Message text"),
                ),
                (
                    "loud",
                    params::boolean().default_value(false).describe("Uppercase"),
                ),
            ]),
            |values| {
                let mut text = values
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                if values.get("loud").and_then(Value::as_bool).unwrap_or(false) {
                    text = text.to_uppercase();
                }
                rsx! { p { "{text}" } }
            },
        )),
    );

    module
}
"##;
