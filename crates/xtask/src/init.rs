//! Scaffolds the conventional workbench file layout into an app crate's
//! source directory: an app entry, the route/shell wiring, a stories
//! module and one example story file.

use std::path::PathBuf;

use crate::templates;

pub struct InitOptions {
    /// Source directory of the target crate.
    pub target_dir: PathBuf,
    /// Crate name used for workbench imports in the generated code.
    pub alias: String,
    /// Overwrite existing files instead of skipping them.
    pub overwrite: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("src"),
            alias: templates::DEFAULT_ALIAS.to_string(),
            overwrite: false,
        }
    }
}

#[derive(Default)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub errors: Vec<String>,
}

impl InitReport {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn init(options: &InitOptions) -> InitReport {
    let mut report = InitReport::default();
    let target = &options.target_dir;

    if !target.is_dir() {
        report
            .errors
            .push(format!("target directory not found: {}", target.display()));
        return report;
    }

    let stories_dir = target.join("stories");
    if !stories_dir.exists() {
        if let Err(err) = std::fs::create_dir_all(&stories_dir) {
            report.errors.push(format!(
                "failed to create directory {}: {err}",
                stories_dir.display()
            ));
            return report;
        }
    }

    let files = [
        (
            target.join("main.rs"),
            templates::apply_alias(templates::MAIN, &options.alias),
        ),
        (
            target.join("workbench.rs"),
            templates::apply_alias(templates::WORKBENCH, &options.alias),
        ),
        (
            stories_dir.join("mod.rs"),
            templates::apply_alias(templates::STORIES, &options.alias),
        ),
        (
            stories_dir.join("example.rs"),
            templates::apply_alias(templates::EXAMPLE_STORY, &options.alias),
        ),
    ];

    for (path, content) in files {
        if path.exists() && !options.overwrite {
            report.skipped.push(path);
        } else {
            match std::fs::write(&path, content) {
                Ok(()) => report.created.push(path),
                Err(err) => report
                    .errors
                    .push(format!("failed to write {}: {err}", path.display())),
            }
        }
    }

    report
}
