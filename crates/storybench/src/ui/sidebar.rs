//! Sidebar: searchable, collapsible navigation over the story tree.
//!
//! A leaf's export list is discovered the first time the leaf is expanded
//! and lives in the leaf item's local state; the shared tree is never
//! written back to.

use dioxus::prelude::*;

use crate::registry::Loaders;
use crate::story::story_exports;
use crate::tree::{filter_tree, TreeNode};

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub tree: Vec<TreeNode>,
    pub loaders: Loaders,
    /// Current URL path segments below the base path, for highlighting.
    #[props(default)]
    pub current_path: Vec<String>,
    /// Called with the full path segments of a clicked entry.
    pub on_navigate: EventHandler<Vec<String>>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut search = use_signal(String::new);
    let filtered = filter_tree(&props.tree, search.read().as_str());

    rsx! {
        aside {
            style: "display: flex; flex-direction: column; width: 16rem; height: 100%; border-right: 1px solid #e5e5e5; background-color: #fafafa;",

            div {
                style: "padding: 1rem; border-bottom: 1px solid #e5e5e5;",
                button {
                    style: "border: none; background: none; padding: 0; font-size: 1.125rem; font-weight: 600; cursor: pointer; color: #171717;",
                    onclick: move |_| props.on_navigate.call(Vec::new()),
                    "Storybench"
                }
            }

            div {
                style: "padding: 0.5rem; border-bottom: 1px solid #e5e5e5;",
                input {
                    r#type: "text",
                    placeholder: "Search stories...",
                    style: "width: 100%; padding: 0.375rem 0.75rem; border: 1px solid #e5e5e5; border-radius: 4px; font-size: 0.875rem; background-color: white;",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            nav {
                style: "flex: 1; overflow-y: auto; padding: 0.5rem;",
                if filtered.is_empty() {
                    p {
                        style: "padding: 1rem 0.5rem; text-align: center; color: #737373; font-size: 0.875rem;",
                        "No stories found"
                    }
                } else {
                    TreeNodes {
                        nodes: filtered,
                        loaders: props.loaders.clone(),
                        depth: 0,
                        parent_path: Vec::<String>::new(),
                        current_path: props.current_path.clone(),
                        on_navigate: move |path| props.on_navigate.call(path),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TreeNodesProps {
    nodes: Vec<TreeNode>,
    loaders: Loaders,
    depth: usize,
    parent_path: Vec<String>,
    current_path: Vec<String>,
    on_navigate: EventHandler<Vec<String>>,
}

#[component]
fn TreeNodes(props: TreeNodesProps) -> Element {
    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 2px;",
            {props.nodes.iter().cloned().map(|node| {
                let key = node.segment.clone();
                rsx! {
                    TreeNodeItem {
                        key: "{key}",
                        node,
                        loaders: props.loaders.clone(),
                        depth: props.depth,
                        parent_path: props.parent_path.clone(),
                        current_path: props.current_path.clone(),
                        on_navigate: move |path| props.on_navigate.call(path),
                    }
                }
            })}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TreeNodeItemProps {
    node: TreeNode,
    loaders: Loaders,
    depth: usize,
    parent_path: Vec<String>,
    current_path: Vec<String>,
    on_navigate: EventHandler<Vec<String>>,
}

#[component]
fn TreeNodeItem(props: TreeNodeItemProps) -> Element {
    let mut open = use_signal(|| true);
    let mut exports: Signal<Option<Vec<String>>> = use_signal(|| None);
    let mut loading = use_signal(|| false);

    let mut node_path = props.parent_path.clone();
    node_path.push(props.node.segment.clone());

    let padding = props.depth * 12 + 8;
    let is_ancestor_of_active = is_path_prefix(&node_path, &props.current_path);

    // Discover a leaf's exports on first expansion.
    {
        let node = props.node.clone();
        let loaders = props.loaders.clone();
        use_effect(move || {
            let Some(module_key) = node.module_key.clone() else {
                return;
            };
            if !*open.read() || exports.read().is_some() || *loading.read() {
                return;
            }

            let Some(loader) = loaders.get(&module_key) else {
                exports.set(Some(Vec::new()));
                return;
            };

            loading.set(true);
            spawn(async move {
                match loader().await {
                    Ok(module) => exports.set(Some(story_exports(&module))),
                    Err(error) => {
                        tracing::error!(%module_key, %error, "failed to load story exports");
                        exports.set(Some(Vec::new()));
                    }
                }
                loading.set(false);
            });
        });
    }

    rsx! {
        li {
            ExpandButton {
                name: props.node.name.clone(),
                open: open(),
                active: is_ancestor_of_active,
                padding,
                on_toggle: move |_| {
                    let was_open = *open.read();
                    open.set(!was_open);
                },
            }

            if open() {
                if props.node.is_leaf() {
                    LeafExports {
                        exports: exports.read().clone().unwrap_or_default(),
                        loading: loading() || exports.read().is_none(),
                        node_path: node_path.clone(),
                        current_path: props.current_path.clone(),
                        padding: padding + 20,
                        on_navigate: move |path| props.on_navigate.call(path),
                    }
                } else {
                    TreeNodes {
                        nodes: props.node.children.clone(),
                        loaders: props.loaders.clone(),
                        depth: props.depth + 1,
                        parent_path: node_path.clone(),
                        current_path: props.current_path.clone(),
                        on_navigate: move |path| props.on_navigate.call(path),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ExpandButtonProps {
    name: String,
    open: bool,
    active: bool,
    padding: usize,
    on_toggle: EventHandler<()>,
}

#[component]
fn ExpandButton(props: ExpandButtonProps) -> Element {
    let arrow_style = if props.open {
        "display: inline-block; width: 1rem; font-size: 0.625rem; transform: rotate(90deg);"
    } else {
        "display: inline-block; width: 1rem; font-size: 0.625rem;"
    };
    let color = if props.active { "#171717" } else { "#525252" };
    let weight = if props.active { "500" } else { "400" };

    rsx! {
        button {
            style: "display: flex; align-items: center; gap: 0.25rem; width: 100%; border: none; background: none; padding: 0.375rem 0.5rem; padding-left: {props.padding}px; border-radius: 4px; font-size: 0.875rem; text-align: left; cursor: pointer; color: {color}; font-weight: {weight};",
            onclick: move |_| props.on_toggle.call(()),
            span { style: "{arrow_style}", "\u{25b6}" }
            "{props.name}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LeafExportsProps {
    exports: Vec<String>,
    /// True until discovery for this leaf has finished.
    loading: bool,
    node_path: Vec<String>,
    current_path: Vec<String>,
    padding: usize,
    on_navigate: EventHandler<Vec<String>>,
}

#[component]
fn LeafExports(props: LeafExportsProps) -> Element {
    if props.loading {
        return rsx! {
            p {
                style: "margin: 0; padding: 0.375rem 0.5rem; padding-left: {props.padding}px; color: #a3a3a3; font-size: 0.875rem;",
                "Loading..."
            }
        };
    }

    let exports = props.exports.clone();
    if exports.is_empty() {
        return rsx! {
            p {
                style: "margin: 0; padding: 0.375rem 0.5rem; padding-left: {props.padding}px; color: #a3a3a3; font-size: 0.875rem;",
                "No stories"
            }
        };
    }

    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 0;",
            {exports.into_iter().map(|export| {
                let mut path = props.node_path.clone();
                path.push(export.to_lowercase());
                let active = paths_equal(&path, &props.current_path);
                let background = if active { "#e5e5e5" } else { "transparent" };
                let key = export.clone();
                rsx! {
                    li {
                        key: "{key}",
                        button {
                            style: "display: block; width: 100%; border: none; padding: 0.375rem 0.5rem; padding-left: {props.padding}px; border-radius: 4px; font-size: 0.875rem; text-align: left; cursor: pointer; color: #525252; background-color: {background};",
                            onclick: move |_| props.on_navigate.call(path.clone()),
                            "{export}"
                        }
                    }
                }
            })}
        }
    }
}

fn is_path_prefix(prefix: &[String], path: &[String]) -> bool {
    prefix.len() <= path.len()
        && prefix
            .iter()
            .zip(path)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

fn paths_equal(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && is_path_prefix(a, b)
}
