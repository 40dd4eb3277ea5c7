//! The story runtime contract: what a "story" is and how story modules
//! expose them.
//!
//! A story module is a plain map of export name to [`ModuleExport`]. The
//! export value is a tagged variant, and the tag alone decides whether an
//! export is a story; no identity or downcast check is involved, so story
//! values built by independently compiled registrations stay recognizable.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::Element;

use crate::params::{ControlValues, ParamsSpec};

/// Render function of a story. Controlled stories receive the current
/// control values; uncontrolled stories take no input.
#[derive(Clone)]
pub enum RenderFn {
    Simple(Rc<dyn Fn() -> Element>),
    WithControls(Rc<dyn Fn(&ControlValues) -> Element>),
}

/// A named, self-contained example of a component's rendering, optionally
/// parameterized by a schema-described set of controls.
#[derive(Clone)]
pub struct Story {
    params: Option<ParamsSpec>,
    render: RenderFn,
}

impl Story {
    /// The schema describing the story's controls, when it has any.
    pub fn params(&self) -> Option<&ParamsSpec> {
        self.params.as_ref()
    }

    /// Whether the story declares controls.
    pub fn is_controlled(&self) -> bool {
        self.params.is_some()
    }

    pub fn render_fn(&self) -> &RenderFn {
        &self.render
    }
}

/// Create an uncontrolled story from a plain render function.
pub fn story<F>(render: F) -> Story
where
    F: Fn() -> Element + 'static,
{
    Story {
        params: None,
        render: RenderFn::Simple(Rc::new(render)),
    }
}

/// Create a controlled story: `params` describes the render input and
/// drives the auto-generated controls panel.
pub fn story_with_controls<F>(params: ParamsSpec, render: F) -> Story
where
    F: Fn(&ControlValues) -> Element + 'static,
{
    Story {
        params: Some(params),
        render: RenderFn::WithControls(Rc::new(render)),
    }
}

/// A value exported from a story module. Only `Story` exports are shown in
/// the workbench; anything else a module wants to export rides along as
/// plain data.
#[derive(Clone)]
pub enum ModuleExport {
    Story(Story),
    Value(serde_json::Value),
}

impl ModuleExport {
    pub fn as_story(&self) -> Option<&Story> {
        match self {
            ModuleExport::Story(story) => Some(story),
            ModuleExport::Value(_) => None,
        }
    }
}

/// Whether an export is a story. Never fails; non-story exports are false.
pub fn is_story(export: &ModuleExport) -> bool {
    export.as_story().is_some()
}

/// A loaded story module: export name to exported value.
pub type StoryModule = HashMap<String, ModuleExport>;

/// Names of the story-valued exports of a module, sorted for stable
/// display. Names with a leading underscore are private and skipped.
pub fn story_exports(module: &StoryModule) -> Vec<String> {
    let mut exports: Vec<String> = module
        .iter()
        .filter(|(name, export)| !name.starts_with('_') && is_story(export))
        .map(|(name, _)| name.clone())
        .collect();
    exports.sort_by_key(|name| name.to_lowercase());
    exports
}
