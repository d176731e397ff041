use crate::{
    error::Result,
    options::TaskOptions,
    project::Project,
    task::{Action, Task},
};

/// Remove generated output: coverage, docs, distributables and the working tree
pub fn clean_task(project: &Project, _options: &TaskOptions) -> Result<Option<Task>> {
    let root = project.root_dir();
    let config = project.config();

    let mut dirs = vec![
        root.file(&config.coverage_dir),
        root.file(&config.docs_dir),
        root.file(&config.dist_dir),
    ];
    if project.has_typescript() || project.is_microservice() {
        dirs.push(project.working_dir().path().to_path_buf());
    }

    Ok(Some(Task::action(
        "clean",
        "Cleans out working, distribution and temporary files and directories",
        Action::RemoveDirs(dirs),
    )))
}
