//! App root: router with a catch-all workbench route, and the registry
//! provided once through context.

use dioxus::prelude::*;

use storybench::{StoryPage, StoryRegistry, WorkbenchShell};

use crate::stories;

const BASE_STYLE: &str = "\
    * { box-sizing: border-box; } \
    body { margin: 0; font-family: system-ui, -apple-system, sans-serif; } \
    button { font-family: inherit; } \
    input, select { font-family: inherit; }";

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/ui/:..segments")]
    Workbench { segments: Vec<String> },
}

pub fn app() -> Element {
    // Built once per app; the tree and loader map are read-only afterwards.
    use_context_provider(stories::registry);

    rsx! {
        document::Style { "{BASE_STYLE}" }
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
