//! Maps a URL path onto page content: the welcome view, group/variant
//! placeholders, a not-found notice, or the story viewer itself.

use dioxus::prelude::*;

use crate::registry::Loaders;
use crate::tree::{capitalize_first, count_leaves, resolve_path, PathResolution, TreeNode};
use crate::viewer::StoryViewer;

#[derive(Props, Clone, PartialEq)]
pub struct StoryPageProps {
    pub tree: Vec<TreeNode>,
    pub loaders: Loaders,
    /// URL path segments below the base path.
    pub path: Vec<String>,
}

#[component]
pub fn StoryPage(props: StoryPageProps) -> Element {
    match resolve_path(&props.tree, &props.path) {
        PathResolution::Index => {
            let count = count_leaves(&props.tree);
            let noun = if count == 1 { "story" } else { "stories" };
            rsx! {
                div {
                    style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; padding: 2rem; text-align: center;",
                    h1 {
                        style: "margin: 0 0 1rem; font-size: 1.875rem; font-weight: 700;",
                        "Welcome to Storybench"
                    }
                    p {
                        style: "margin: 0 0 0.5rem; color: #525252;",
                        "Select a story from the sidebar to get started."
                    }
                    p {
                        style: "margin: 0; color: #737373; font-size: 0.875rem;",
                        "{count} {noun} available"
                    }
                }
            }
        }
        PathResolution::Group(node) => rsx! {
            CenteredNotice {
                heading: node.name.clone(),
                message: "Select a story from the sidebar.",
            }
        },
        PathResolution::Story { node, export: None, .. } => rsx! {
            CenteredNotice {
                heading: node.name.clone(),
                message: "Select a story variant from the sidebar.",
            }
        },
        PathResolution::Story {
            module_key,
            export: Some(export),
            ..
        } => {
            let title = props
                .path
                .iter()
                .map(|s| capitalize_first(s))
                .collect::<Vec<_>>()
                .join(" / ");
            let key = props.path.join("/").to_lowercase();
            rsx! {
                StoryViewer {
                    key: "{key}",
                    loaders: props.loaders.clone(),
                    module_key: module_key.to_string(),
                    export_name: export,
                    title,
                }
            }
        }
        PathResolution::NotFound => rsx! {
            CenteredNotice {
                heading: "Story not found",
                message: "The requested story does not exist.",
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct CenteredNoticeProps {
    heading: String,
    message: String,
}

#[component]
fn CenteredNotice(props: CenteredNoticeProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; padding: 2rem; text-align: center;",
            h1 {
                style: "margin: 0 0 1rem; font-size: 1.25rem; font-weight: 700;",
                "{props.heading}"
            }
            p {
                style: "margin: 0; color: #525252;",
                "{props.message}"
            }
        }
    }
}
