use crate::{
    builders::watch_dirs,
    error::Result,
    options::BuildOptions,
    project::Project,
    task::{ProcessCommand, Task},
};

/// Compile TypeScript sources into the working tree with `tsc`
pub fn build_ts_task(project: &Project, options: &BuildOptions) -> Result<Task> {
    let root = project.root_dir();
    let args = vec![
        "--project".to_string(),
        root.file("tsconfig.json").to_string_lossy().to_string(),
        "--outDir".to_string(),
        project.working_dir().to_string(),
    ];
    let compile = Task::process(
        "build-ts",
        "Compiles TypeScript sources",
        ProcessCommand::new(project.tool("tsc"), args).with_working_dir(root.path()),
    );

    if !options.watch {
        return Ok(compile);
    }
    watch_dirs(
        "watch-build-ts",
        "Recompiles TypeScript sources on change",
        &[root.child("src")],
        ".ts",
        compile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Language, ProjectType};
    use std::path::Path;

    #[test]
    fn test_tsc_arguments() {
        let project = Project::new(
            "lib",
            "1.0.0",
            Language::TypeScript,
            ProjectType::Lib,
            "/w/lib",
        );
        let task = build_ts_task(&project, &BuildOptions::default()).unwrap();
        let command = task.command().unwrap();

        assert_eq!(command.program, Path::new("/w/lib/node_modules/.bin/tsc"));
        assert_eq!(
            command.args,
            vec!["--project", "/w/lib/tsconfig.json", "--outDir", "/w/lib/working"]
        );
    }
}
