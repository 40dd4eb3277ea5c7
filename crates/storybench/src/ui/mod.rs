//! Navigation shell: sidebar tree, controls panel, page dispatch and the
//! outer layout component.

mod controls_panel;
mod shell;
mod sidebar;
mod story_page;

pub use controls_panel::ControlsPanel;
pub use shell::WorkbenchShell;
pub use sidebar::Sidebar;
pub use story_page::StoryPage;
