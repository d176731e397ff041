//! Documentation phase: jsdoc for JavaScript, typedoc for TypeScript

mod jsdoc;
mod typedoc;

pub use jsdoc::jsdoc_task;
pub use typedoc::typedoc_task;

use crate::{
    error::Result,
    options::TaskOptions,
    project::{Language, Project},
    task::Task,
};

pub const DOCS_DESCRIPTION: &str = "Generates project documentation";

/// Generate API documentation with the generator for the project's language
pub fn docs_task(project: &Project, _options: &TaskOptions) -> Result<Option<Task>> {
    let task = match project.language() {
        Language::JavaScript => jsdoc_task(project),
        Language::TypeScript => typedoc_task(project),
    };

    Ok(Some(
        task.with_display_name("docs")
            .with_description(DOCS_DESCRIPTION),
    ))
}
