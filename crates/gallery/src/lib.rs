//! Storybench gallery - demo components and the stories that exercise
//! them, wired into the workbench shell behind a catch-all route.

pub mod app;
pub mod components;
pub mod stories;

// Re-export the app entrypoint for the binary
pub use app::app;
