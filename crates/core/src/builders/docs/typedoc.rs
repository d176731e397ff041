use crate::{
    project::Project,
    task::{ProcessCommand, Task},
};

pub fn typedoc_task(project: &Project) -> Task {
    let root = project.root_dir();
    let args = vec![
        "--out".to_string(),
        root.file(&project.config().docs_dir)
            .to_string_lossy()
            .to_string(),
        "src".to_string(),
    ];

    Task::process(
        "docs-ts",
        "Generates documentation from TypeScript sources",
        ProcessCommand::new(project.tool("typedoc"), args).with_working_dir(root.path()),
    )
}
