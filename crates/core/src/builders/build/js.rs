use crate::{
    builders::watch_dirs,
    error::Result,
    options::BuildOptions,
    project::Project,
    task::{Action, Task},
};

/// Copy non-TypeScript sources (JavaScript, JSON, templates) into the working tree
pub fn build_js_task(project: &Project, options: &BuildOptions) -> Result<Task> {
    let src = project.root_dir().child("src");
    let copy = Task::action(
        "build-js",
        "Copies JavaScript and other assets to the working directory",
        Action::CopyFiles {
            from: src.path().to_path_buf(),
            to: project.working_dir().child("src").path().to_path_buf(),
            exclude_ext: Some(".ts".to_string()),
        },
    );

    if !options.watch {
        return Ok(copy);
    }
    watch_dirs(
        "watch-build-js",
        "Copies assets to the working directory on change",
        &[src],
        "",
        copy,
    )
}
