use crate::{
    builders::source_globs,
    error::Result,
    options::LintOptions,
    project::Project,
    task::{ProcessCommand, Task},
};

/// Lint source and test files with eslint
pub fn lint_task(project: &Project, options: &LintOptions) -> Result<Option<Task>> {
    let mut args = Vec::new();
    if options.fix {
        args.push("--fix".to_string());
    }
    args.extend(source_globs(project));

    Ok(Some(Task::process(
        "lint",
        "Lints source and test files",
        ProcessCommand::new(project.tool("eslint"), args)
            .with_working_dir(project.root_dir().path()),
    )))
}
