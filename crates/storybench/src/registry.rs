//! Story registry: turns a nested map of lazy module loaders into the
//! navigation tree plus the flat module-key → loader map.
//!
//! Building the registry never invokes a loader; the tree is derived from
//! the keys alone, and module bodies are loaded only when a target is
//! actually navigated to (or when every path is enumerated for static
//! export).

use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::story::{story_exports, StoryModule};
use crate::tree::{build_tree, collect_leaves, TreeNode};

/// Error produced by a failing story module loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("story module failed to load: {0}")]
    Failed(String),

    #[error("no loader registered for module key \"{0}\"")]
    UnknownKey(String),
}

impl LoadError {
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed(reason.to_string())
    }
}

/// A zero-argument async loader resolving to a story module.
pub type StoryLoader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<StoryModule, LoadError>>>;

/// Box an async closure into a [`StoryLoader`].
pub fn module_loader<F, Fut>(load: F) -> StoryLoader
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<StoryModule, LoadError>> + 'static,
{
    Rc::new(move || load().boxed_local())
}

enum ModuleEntry {
    Loader(StoryLoader),
    Group(StoryModules),
}

/// Nested, insertion-ordered registration of story modules.
#[derive(Default)]
pub struct StoryModules {
    entries: Vec<(String, ModuleEntry)>,
}

impl StoryModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a story module under `key`.
    pub fn story(mut self, key: impl Into<String>, loader: StoryLoader) -> Self {
        self.entries.push((key.into(), ModuleEntry::Loader(loader)));
        self
    }

    /// Register a named group of further modules.
    pub fn group(mut self, key: impl Into<String>, build: impl FnOnce(StoryModules) -> StoryModules) -> Self {
        self.entries
            .push((key.into(), ModuleEntry::Group(build(StoryModules::new()))));
        self
    }

    fn flatten(self, prefix: &str, out: &mut BTreeMap<String, StoryLoader>) {
        for (key, entry) in self.entries {
            let full_key = if prefix.is_empty() {
                key
            } else {
                format!("{prefix}/{key}")
            };
            match entry {
                ModuleEntry::Loader(loader) => {
                    out.insert(full_key, loader);
                }
                ModuleEntry::Group(group) => group.flatten(&full_key, out),
            }
        }
    }
}

/// Shared read-only handle over the flattened loader map.
#[derive(Clone)]
pub struct Loaders {
    map: Rc<BTreeMap<String, StoryLoader>>,
}

impl PartialEq for Loaders {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.map, &other.map)
    }
}

impl Loaders {
    pub fn get(&self, key: &str) -> Option<StoryLoader> {
        self.map.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

/// The built registry: the navigation tree plus the loader map.
#[derive(Clone, PartialEq)]
pub struct StoryRegistry {
    pub tree: Vec<TreeNode>,
    pub loaders: Loaders,
}

/// Build a registry from nested module registrations. Pure: no I/O, no
/// loader calls; an empty registration yields an empty tree.
pub fn build_registry(modules: StoryModules) -> StoryRegistry {
    let mut map = BTreeMap::new();
    modules.flatten("", &mut map);

    let tree = build_tree(map.keys().cloned());
    tracing::debug!(modules = map.len(), "built story registry");

    StoryRegistry {
        tree,
        loaders: Loaders { map: Rc::new(map) },
    }
}

/// Enumerate every URL path the workbench can serve: the index path plus
/// one path per (leaf, story export) pair, with lowercase segments. Loads
/// every module; a failing leaf is skipped with a warning.
pub async fn enumerate_story_paths(registry: &StoryRegistry) -> Vec<Vec<String>> {
    let mut paths = vec![Vec::new()];

    for (segments, module_key) in collect_leaves(&registry.tree) {
        let Some(loader) = registry.loaders.get(&module_key) else {
            continue;
        };

        match loader().await {
            Ok(module) => {
                for export in story_exports(&module) {
                    let mut path: Vec<String> =
                        segments.iter().map(|s| s.to_lowercase()).collect();
                    path.push(export.to_lowercase());
                    paths.push(path);
                }
            }
            Err(error) => {
                tracing::warn!(%module_key, %error, "skipping story module during enumeration");
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{story, ModuleExport};
    use dioxus::prelude::VNode;

    fn two_story_module() -> StoryModule {
        let mut module = StoryModule::new();
        module.insert("Default".to_string(), ModuleExport::Story(story(VNode::empty)));
        module.insert("Disabled".to_string(), ModuleExport::Story(story(VNode::empty)));
        module
    }

    fn sample_registry() -> StoryRegistry {
        build_registry(
            StoryModules::new()
                .story("button", module_loader(|| async { Ok(two_story_module()) }))
                .group("forms", |g| {
                    g.story("input", module_loader(|| async { Ok(two_story_module()) }))
                }),
        )
    }

    mod build_tests {
        use super::*;

        #[test]
        fn nested_groups_flatten_to_slash_joined_keys() {
            let registry = sample_registry();
            let keys: Vec<&str> = registry.loaders.keys().collect();
            assert_eq!(keys, ["button", "forms/input"]);
        }

        #[test]
        fn tree_and_loaders_cover_the_same_leaves() {
            let registry = sample_registry();
            assert_eq!(crate::tree::count_leaves(&registry.tree), registry.loaders.len());
        }

        #[test]
        fn empty_registration_builds_an_empty_registry() {
            let registry = build_registry(StoryModules::new());
            assert!(registry.tree.is_empty());
            assert!(registry.loaders.is_empty());
            assert_eq!(crate::tree::count_leaves(&registry.tree), 0);
        }

        #[test]
        fn unknown_keys_have_no_loader() {
            let registry = sample_registry();
            assert!(registry.loaders.get("missing").is_none());
            assert!(registry.loaders.get("forms/input").is_some());
        }
    }

    mod enumeration_tests {
        use super::*;

        #[test]
        fn every_leaf_export_becomes_a_lowercase_path() {
            let registry = sample_registry();
            let paths = futures::executor::block_on(enumerate_story_paths(&registry));

            assert!(paths.contains(&Vec::new()));
            assert!(paths.contains(&vec!["button".to_string(), "default".to_string()]));
            assert!(paths.contains(&vec![
                "forms".to_string(),
                "input".to_string(),
                "disabled".to_string()
            ]));
            // index + 2 exports per leaf
            assert_eq!(paths.len(), 5);
        }

        #[test]
        fn failing_leaves_are_skipped() {
            let registry = build_registry(
                StoryModules::new()
                    .story("ok", module_loader(|| async { Ok(two_story_module()) }))
                    .story(
                        "broken",
                        module_loader(|| async { Err(LoadError::failed("boom")) }),
                    ),
            );

            let paths = futures::executor::block_on(enumerate_story_paths(&registry));
            assert!(paths.iter().all(|p| p.first().map(String::as_str) != Some("broken")));
            assert_eq!(paths.len(), 3);
        }
    }
}
