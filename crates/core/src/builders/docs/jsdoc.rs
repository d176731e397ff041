use crate::{
    project::Project,
    task::{ProcessCommand, Task},
};

pub fn jsdoc_task(project: &Project) -> Task {
    let root = project.root_dir();
    let args = vec![
        "--readme".to_string(),
        "README.md".to_string(),
        "--package".to_string(),
        "package.json".to_string(),
        "--destination".to_string(),
        root.file(&project.config().docs_dir)
            .to_string_lossy()
            .to_string(),
        "--recurse".to_string(),
        "src".to_string(),
    ];

    Task::process(
        "docs-js",
        "Generates documentation from JSDoc comments",
        ProcessCommand::new(project.tool("jsdoc"), args).with_working_dir(root.path()),
    )
}
