//! Build phase: copies JavaScript assets and compiles TypeScript

mod js;
mod ts;

pub use js::build_js_task;
pub use ts::build_ts_task;

use tracing::debug;

use crate::{error::Result, options::BuildOptions, project::Project, task::Task};

/// Build the project's sources into its working directory.
///
/// Applies only to TypeScript projects and microservices; the JavaScript
/// asset copy always runs, the TypeScript compile runs alongside it when
/// the project uses TypeScript.
pub fn build_task(project: &Project, options: &BuildOptions) -> Result<Option<Task>> {
    if !project.has_typescript() && !project.is_microservice() {
        debug!(
            "No build step for {} project without TypeScript",
            project.project_type()
        );
        return Ok(None);
    }

    let mut tasks = vec![build_js_task(project, options)?];
    if project.has_typescript() {
        tasks.push(build_ts_task(project, options)?);
    }

    let task = if options.watch {
        Task::parallel(
            "watch-build",
            "Automatically rebuilds the project on file changes",
            tasks,
        )
    } else {
        Task::parallel("build", "Builds the project", tasks)
    };
    Ok(Some(task))
}
