//! The story viewer: lazily loads the targeted story module, renders the
//! story in an isolated preview surface and hosts the controls panel.

mod model;

pub use model::{ReadyStory, ViewerError, ViewerModel, ViewerPhase};

use std::panic::{catch_unwind, AssertUnwindSafe};

use dioxus::prelude::*;
use serde_json::Value;

use crate::params::ControlValues;
use crate::registry::{LoadError, Loaders};
use crate::story::{RenderFn, Story};
use crate::ui::ControlsPanel;

/// Invoke a story's render function with the current control values,
/// catching panics at the boundary so a crashing story cannot take the
/// shell down with it.
pub fn try_render(story: &Story, values: &ControlValues) -> Result<Element, String> {
    catch_unwind(AssertUnwindSafe(|| match story.render_fn() {
        RenderFn::Simple(render) => render(),
        RenderFn::WithControls(render) => render(values),
    }))
    .map_err(panic_message)
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "story render panicked".to_string()
    }
}

/// Preview surface behind the rendered story.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum BackgroundKind {
    #[default]
    Default,
    Striped,
    Magenta,
}

const BACKGROUNDS: [BackgroundKind; 3] = [
    BackgroundKind::Default,
    BackgroundKind::Striped,
    BackgroundKind::Magenta,
];

impl BackgroundKind {
    fn label(self) -> &'static str {
        match self {
            BackgroundKind::Default => "Default",
            BackgroundKind::Striped => "Striped",
            BackgroundKind::Magenta => "Magenta",
        }
    }

    fn surface_style(self) -> &'static str {
        match self {
            BackgroundKind::Default => "background-color: #fafafa;",
            BackgroundKind::Striped => {
                "background-image: repeating-linear-gradient(45deg, #fff, #fff 10px, #e5e5e5 10px, #e5e5e5 20px);"
            }
            BackgroundKind::Magenta => "background-color: #ff00ff;",
        }
    }
}

/// Props for [`StoryViewer`].
#[derive(Props, Clone, PartialEq)]
pub struct StoryViewerProps {
    pub loaders: Loaders,
    /// Module key of the story file to load.
    pub module_key: String,
    /// Requested export; matched case-insensitively against the module.
    pub export_name: String,
    /// Heading shown above the preview.
    pub title: String,
}

/// Loads one (module key, export) target and renders it with live
/// controls. The hosting page keys this component by the full target
/// path, so navigating remounts it and starts a fresh load; results of
/// superseded loads are discarded by the model's generation guard.
#[component]
pub fn StoryViewer(props: StoryViewerProps) -> Element {
    let mut model = use_signal(ViewerModel::new);
    let mut render_error: Signal<Option<String>> = use_signal(|| None);
    let mut background = use_signal(BackgroundKind::default);

    // Kick off the load on mount.
    {
        let loaders = props.loaders.clone();
        let module_key = props.module_key.clone();
        let export_name = props.export_name.clone();
        use_effect(move || {
            let module_key = module_key.clone();
            let export_name = export_name.clone();
            let loader = loaders.get(&module_key);
            let generation = model.write().begin_load();
            spawn(async move {
                let result = match loader {
                    Some(load) => load().await,
                    None => Err(LoadError::UnknownKey(module_key)),
                };
                model.write().finish_load(generation, &export_name, result);
            });
        });
    }

    let phase = model.read().phase().clone();

    let canvas_body = match &phase {
        ViewerPhase::Idle | ViewerPhase::Loading => rsx! {
            p {
                style: "color: #9ca3af; text-align: center;",
                "Loading story..."
            }
        },
        ViewerPhase::Failed(message) => rsx! {
            ErrorCard {
                heading: "Error loading story",
                message: message.clone(),
            }
        },
        ViewerPhase::Ready(ready) => {
            if let Some(message) = render_error.read().clone() {
                rsx! {
                    ErrorCard {
                        heading: "Story crashed",
                        message,
                        on_retry: move |_| render_error.set(None),
                    }
                }
            } else {
                match try_render(&ready.story, &ready.values) {
                    Ok(element) => element,
                    Err(message) => {
                        tracing::error!(%message, "story render panicked");
                        let displayed = message.clone();
                        spawn(async move { render_error.set(Some(message)) });
                        rsx! {
                            ErrorCard {
                                heading: "Story crashed",
                                message: displayed,
                                on_retry: move |_| render_error.set(None),
                            }
                        }
                    }
                }
            }
        }
    };

    let surface = background().surface_style();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",

            header {
                style: "display: flex; align-items: center; justify-content: space-between; flex-shrink: 0; padding: 1rem 1.5rem; border-bottom: 1px solid #e5e5e5;",
                h1 {
                    style: "margin: 0; font-size: 1.125rem; font-weight: 600;",
                    "{props.title}"
                }
                BackgroundSwitcher {
                    value: background(),
                    on_change: move |kind| background.set(kind),
                }
            }

            // Story canvas
            div {
                style: "flex: 1; overflow: auto; padding: 1.5rem; display: flex; align-items: flex-start; justify-content: center;",
                div {
                    style: "border: 1px dashed #d4d4d4; border-radius: 8px; padding: 2rem; {surface}",
                    {canvas_body}
                }
            }

            if let ViewerPhase::Ready(ready) = &phase {
                if !ready.controls.is_empty() {
                    ControlsPanel {
                        controls: ready.controls.clone(),
                        values: ready.values.clone(),
                        on_change: move |(name, value): (String, Value)| {
                            model.write().set_value(&name, value);
                        },
                        on_reset: move |_| model.write().reset_values(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ErrorCardProps {
    heading: String,
    message: String,
    on_retry: Option<EventHandler<()>>,
}

#[component]
fn ErrorCard(props: ErrorCardProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #fecaca; background-color: #fef2f2; border-radius: 6px; padding: 1rem; color: #b91c1c; max-width: 32rem;",
            p {
                style: "margin: 0; font-weight: 500;",
                "{props.heading}"
            }
            p {
                style: "margin: 0.25rem 0 0; font-size: 0.875rem; font-family: monospace;",
                "{props.message}"
            }
            if let Some(retry) = props.on_retry {
                button {
                    style: "margin-top: 0.75rem; padding: 0.25rem 0.75rem; border: none; border-radius: 4px; background-color: #dc2626; color: white; font-size: 0.875rem; cursor: pointer;",
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BackgroundSwitcherProps {
    value: BackgroundKind,
    on_change: EventHandler<BackgroundKind>,
}

#[component]
fn BackgroundSwitcher(props: BackgroundSwitcherProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.375rem;",
            for kind in BACKGROUNDS {
                button {
                    key: "{kind.label()}",
                    title: "{kind.label()}",
                    style: if props.value == kind {
                        "width: 1.75rem; height: 1.75rem; border-radius: 4px; border: 2px solid #171717; cursor: pointer; {kind.surface_style()}"
                    } else {
                        "width: 1.75rem; height: 1.75rem; border-radius: 4px; border: 2px solid #d4d4d4; cursor: pointer; {kind.surface_style()}"
                    },
                    onclick: move |_| props.on_change.call(kind),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{choice, object};
    use crate::story::{story, story_with_controls};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    mod render_boundary_tests {
        use super::*;

        #[test]
        fn panicking_render_is_caught_with_its_message() {
            let bad = story(|| panic!("kaboom"));
            let error = try_render(&bad, &ControlValues::new()).expect_err("panic must be caught");
            assert!(error.contains("kaboom"));
        }

        #[test]
        fn sibling_stories_are_unaffected_by_a_panic() {
            let bad = story(|| panic!("kaboom"));
            let good = story(VNode::empty);

            let _ = try_render(&bad, &ControlValues::new());
            assert!(try_render(&good, &ControlValues::new()).is_ok());
        }

        #[test]
        fn controlled_renders_receive_the_current_values() {
            let seen: Rc<RefCell<Option<serde_json::Value>>> = Rc::new(RefCell::new(None));
            let sink = seen.clone();

            let controlled = story_with_controls(
                object([("variant", choice(["default", "secondary"]))]),
                move |values| {
                    *sink.borrow_mut() = values.get("variant").cloned();
                    VNode::empty()
                },
            );

            let mut values = ControlValues::new();
            values.insert("variant".to_string(), json!("secondary"));

            assert!(try_render(&controlled, &values).is_ok());
            assert_eq!(*seen.borrow(), Some(json!("secondary")));
        }

        #[test]
        fn string_panic_payloads_are_preserved() {
            let bad = story(|| panic!("{}", String::from("formatted failure")));
            let error = try_render(&bad, &ControlValues::new()).expect_err("panic must be caught");
            assert_eq!(error, "formatted failure");
        }
    }
}
