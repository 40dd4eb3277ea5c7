//! The outer workbench layout: sidebar navigation plus the content area.

use dioxus::prelude::*;

use crate::registry::Loaders;
use crate::tree::TreeNode;
use crate::ui::Sidebar;

#[derive(Props, Clone, PartialEq)]
pub struct WorkbenchShellProps {
    pub tree: Vec<TreeNode>,
    pub loaders: Loaders,
    /// Current URL path segments below the base path.
    #[props(default)]
    pub current_path: Vec<String>,
    /// Called with the full path segments of a clicked sidebar entry; the
    /// host maps them onto its router.
    pub on_navigate: EventHandler<Vec<String>>,
    pub children: Element,
}

#[component]
pub fn WorkbenchShell(props: WorkbenchShellProps) -> Element {
    rsx! {
        div {
            style: "display: flex; height: 100vh; overflow: hidden; background-color: white; color: #171717;",
            Sidebar {
                tree: props.tree.clone(),
                loaders: props.loaders.clone(),
                current_path: props.current_path.clone(),
                on_navigate: move |path| props.on_navigate.call(path),
            }
            main {
                style: "flex: 1; overflow: hidden;",
                {props.children}
            }
        }
    }
}
