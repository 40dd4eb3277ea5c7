//! The viewer's load/ready/error state machine, kept free of UI concerns
//! so the transitions are unit-testable.

use serde_json::Value;

use crate::params::{controls_for, defaults_for, ControlDescriptor, ControlValues};
use crate::registry::LoadError;
use crate::story::{Story, StoryModule};

/// Error shown in the preview area when a target cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    #[error("export \"{0}\" not found or not a valid story")]
    NotAStory(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// A successfully loaded story plus its live control state.
#[derive(Clone)]
pub struct ReadyStory {
    pub story: Story,
    pub controls: Vec<ControlDescriptor>,
    defaults: ControlValues,
    pub values: ControlValues,
}

#[derive(Clone, Default)]
pub enum ViewerPhase {
    #[default]
    Idle,
    Loading,
    Ready(Box<ReadyStory>),
    Failed(String),
}

/// State machine behind a single viewer instance.
///
/// Loads are identified by a generation counter: `begin_load` hands out a
/// generation, and `finish_load` with any older generation is a no-op, so
/// a superseded load's result is discarded instead of overwriting the
/// newer target's state.
#[derive(Clone, Default)]
pub struct ViewerModel {
    phase: ViewerPhase,
    generation: u64,
}

impl ViewerModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    /// Enter `Loading` and return the generation tag for this load.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ViewerPhase::Loading;
        self.generation
    }

    /// Apply a finished load. Stale generations are ignored. The export
    /// name is matched case-insensitively (URLs arrive lowercased); the
    /// matched export must satisfy the story predicate.
    pub fn finish_load(
        &mut self,
        generation: u64,
        export_name: &str,
        result: Result<StoryModule, LoadError>,
    ) {
        if generation != self.generation {
            tracing::debug!(export_name, "discarding stale story load result");
            return;
        }

        let module = match result {
            Ok(module) => module,
            Err(error) => {
                self.phase = ViewerPhase::Failed(ViewerError::from(error).to_string());
                return;
            }
        };

        let story = module
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(export_name))
            .and_then(|(_, export)| export.as_story())
            .cloned();

        let Some(story) = story else {
            self.phase =
                ViewerPhase::Failed(ViewerError::NotAStory(export_name.to_string()).to_string());
            return;
        };

        let (controls, defaults) = match story.params() {
            None => (Vec::new(), ControlValues::new()),
            Some(spec) => match controls_for(spec) {
                Ok(controls) => (controls, defaults_for(spec)),
                Err(error) => {
                    tracing::warn!(%error, "story params are not introspectable, showing no controls");
                    (Vec::new(), ControlValues::new())
                }
            },
        };

        self.phase = ViewerPhase::Ready(Box::new(ReadyStory {
            story,
            controls,
            values: defaults.clone(),
            defaults,
        }));
    }

    /// Merge a single edited control value; other fields are untouched.
    pub fn set_value(&mut self, name: &str, value: Value) {
        if let ViewerPhase::Ready(ready) = &mut self.phase {
            ready.values.insert(name.to_string(), value);
        }
    }

    /// Restore every control to its captured default.
    pub fn reset_values(&mut self) {
        if let ViewerPhase::Ready(ready) = &mut self.phase {
            ready.values = ready.defaults.clone();
        }
    }
}
