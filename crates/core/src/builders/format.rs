use crate::{
    builders::source_globs,
    error::Result,
    options::FormatOptions,
    project::Project,
    task::{ProcessCommand, Task},
};

/// Format source and test files with prettier
pub fn format_task(project: &Project, options: &FormatOptions) -> Result<Option<Task>> {
    let mut args = vec![if options.check { "--check" } else { "--write" }.to_string()];
    args.extend(source_globs(project));

    let description = if options.check {
        "Verifies formatting of source and test files"
    } else {
        "Formats source and test files"
    };

    Ok(Some(Task::process(
        "format",
        description,
        ProcessCommand::new(project.tool("prettier"), args)
            .with_working_dir(project.root_dir().path()),
    )))
}
