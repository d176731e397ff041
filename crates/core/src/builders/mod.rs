//! Task builders, one per lifecycle phase
//!
//! Every builder takes a [`Project`] and its own options struct and returns
//! `Ok(None)` when the phase does not apply to the project.

pub mod build;
pub mod clean;
pub mod docs;
pub mod format;
pub mod lint;
pub mod package;
pub mod publish;

pub use build::build_task;
pub use clean::clean_task;
pub use docs::docs_task;
pub use format::format_task;
pub use lint::lint_task;
pub use package::package_task;
pub use publish::publish_task;
pub use test::test_task;

use crate::{
    error::Result,
    project::{Directory, Project},
    task::{Action, Task},
};

/// Wrap `task` so it re-runs when files with `extension` change in `dirs`
pub(crate) fn watch_dirs(
    name: impl Into<String>,
    description: impl Into<String>,
    dirs: &[Directory],
    extension: &str,
    task: Task,
) -> Result<Task> {
    let patterns = dirs
        .iter()
        .map(|dir| dir.pattern(extension))
        .collect::<Result<Vec<_>>>()?;
    let paths = dirs.iter().map(|dir| dir.path().to_path_buf()).collect();
    Ok(Task::watch(name, description, paths, patterns, task))
}

/// Source and test globs for the project's language
pub(crate) fn source_globs(project: &Project) -> Vec<String> {
    let root = project.root_dir();
    let ext = project.source_extension();
    vec![root.child("src").glob(ext), root.child("test").glob(ext)]
}

/// Copy `package.json` next to the built JavaScript when that lives outside
/// the project root, so npm can run there
pub(crate) fn manifest_task(project: &Project) -> Option<Task> {
    let js_root = project.js_root_dir();
    if js_root == *project.root_dir() {
        return None;
    }
    Some(Task::action(
        "copy-manifest",
        "Copies the package manifest to the working directory",
        Action::CopyFile {
            from: project.root_dir().file("package.json"),
            to: js_root.file("package.json"),
        },
    ))
}
