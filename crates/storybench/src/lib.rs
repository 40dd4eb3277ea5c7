//! Storybench - an embedded component-story workbench for Dioxus.
//!
//! Story files export named [`Story`] values (optionally parameterized by a
//! [`ParamsSpec`] schema), a registry builds a navigable tree from lazily
//! loaded story modules, and the shell renders the tree, a live preview and
//! a schema-derived controls panel.

pub mod params;
pub mod registry;
pub mod story;
pub mod tree;
pub mod ui;
pub mod viewer;

// Re-export commonly used entrypoints
pub use params::{
    controls_for, defaults_for, ControlDescriptor, ControlKind, ControlValues, FieldSpec,
    ParamsError, ParamsSpec,
};
pub use registry::{
    build_registry, enumerate_story_paths, module_loader, LoadError, Loaders, StoryLoader,
    StoryModules, StoryRegistry,
};
pub use story::{
    is_story, story, story_exports, story_with_controls, ModuleExport, RenderFn, Story, StoryModule,
};
pub use tree::{count_leaves, filter_tree, resolve_path, segments_to_url, PathResolution, TreeNode};
pub use ui::{ControlsPanel, Sidebar, StoryPage, WorkbenchShell};
pub use viewer::{try_render, StoryViewer, ViewerError, ViewerModel, ViewerPhase};
