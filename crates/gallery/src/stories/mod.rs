//! Story registrations for the gallery.
//!
//! The registry is built from module keys alone; a story module's body is
//! only produced when its loader runs, i.e. when the module is first
//! opened in the workbench.

pub mod badge;
pub mod button;
pub mod forms;

use storybench::{build_registry, module_loader, StoryModules, StoryRegistry};

pub fn registry() -> StoryRegistry {
    build_registry(
        StoryModules::new()
            .story("badge", module_loader(|| async { Ok(badge::module()) }))
            .story("button", module_loader(|| async { Ok(button::module()) }))
            .group("forms", |g| {
                g.story("input", module_loader(|| async { Ok(forms::input::module()) }))
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybench::{count_leaves, resolve_path, PathResolution};

    #[test]
    fn registry_exposes_every_story_module() {
        let registry = registry();
        let keys: Vec<&str> = registry.loaders.keys().collect();
        assert_eq!(keys, ["badge", "button", "forms/input"]);
        assert_eq!(count_leaves(&registry.tree), 3);
    }

    #[test]
    fn nested_story_urls_resolve() {
        let registry = registry();
        let path: Vec<String> = ["forms", "input", "interactive"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        match resolve_path(&registry.tree, &path) {
            PathResolution::Story {
                module_key, export, ..
            } => {
                assert_eq!(module_key, "forms/input");
                assert_eq!(export.as_deref(), Some("interactive"));
            }
            other => panic!("expected story resolution, got {other:?}"),
        }
    }

    #[test]
    fn loaded_modules_expose_their_story_exports() {
        let registry = registry();
        let loader = registry.loaders.get("button").expect("button loader");
        let module = futures::executor::block_on(loader()).expect("button module loads");

        let exports = storybench::story_exports(&module);
        assert!(exports.contains(&"Default".to_string()));
        assert!(exports.contains(&"Interactive".to_string()));
    }
}
