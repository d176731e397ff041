//! Package phase: npm tarballs for libraries, zip bundles for microservices

use crate::{
    builders::manifest_task,
    error::Result,
    options::TaskOptions,
    project::Project,
    task::{Action, ProcessCommand, Task},
};

const DESCRIPTION: &str = "Packages the project for distribution";

/// Produce a distributable under the project's dist directory
pub fn package_task(project: &Project, _options: &TaskOptions) -> Result<Option<Task>> {
    let dist_dir = project.root_dir().file(&project.config().dist_dir);
    let dist = dist_dir.to_string_lossy().to_string();

    let ensure_dist = Task::action(
        "package-dist",
        "Creates the distribution directory",
        Action::EnsureDir(dist_dir.clone()),
    );

    if !project.is_microservice() {
        let pack = ProcessCommand::new(
            "npm",
            vec!["pack".to_string(), "--pack-destination".to_string(), dist],
        )
        .with_working_dir(project.js_root_dir().path());

        let mut steps: Vec<Task> = manifest_task(project).into_iter().collect();
        steps.push(ensure_dist);
        steps.push(Task::process("package-pack", "Creates the npm tarball", pack));
        return Ok(Some(Task::series("package", DESCRIPTION, steps)));
    }

    let working = project.working_dir();
    let archive = dist_dir.join(format!("{}-{}.zip", project.name(), project.version()));

    // The bundle carries production dependencies next to the built sources
    let mut steps: Vec<Task> = manifest_task(project).into_iter().collect();
    steps.extend([
        ensure_dist,
        Task::process(
            "package-install",
            "Installs production dependencies",
            ProcessCommand::new(
                "npm",
                vec!["install".to_string(), "--production".to_string()],
            )
            .with_working_dir(working.path()),
        ),
        Task::process(
            "package-zip",
            "Bundles the working directory",
            ProcessCommand::new(
                "zip",
                vec![
                    "-qr".to_string(),
                    "-FS".to_string(),
                    archive.to_string_lossy().to_string(),
                    ".".to_string(),
                ],
            )
            .with_working_dir(working.path()),
        ),
    ]);

    Ok(Some(Task::series("package", DESCRIPTION, steps)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Language, ProjectType};
    use crate::runner::TaskRunner;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn step_names(task: &Task) -> Vec<&str> {
        task.children()
            .into_iter()
            .map(|t| t.display_name.as_str())
            .collect()
    }

    /// Run every step except the trailing npm/zip invocations
    fn run_local_steps(task: &Task, external: usize) {
        let steps = task.children();
        let runner = TaskRunner::default();
        for step in &steps[..steps.len() - external] {
            runner.run(step).unwrap();
        }
    }

    #[test]
    fn test_library_packs_from_js_root() {
        let project = Project::new(
            "util",
            "1.2.0",
            Language::TypeScript,
            ProjectType::Lib,
            "/w/util",
        );
        let task = package_task(&project, &TaskOptions::default()).unwrap().unwrap();
        assert_eq!(
            step_names(&task),
            vec!["copy-manifest", "package-dist", "package-pack"]
        );

        let steps = task.children();
        let pack = steps[2].command().unwrap();
        assert_eq!(pack.args, vec!["pack", "--pack-destination", "/w/util/dist"]);
        assert_eq!(pack.working_dir(), Some(Path::new("/w/util/working")));
    }

    #[test]
    fn test_plain_js_library_packs_in_place() {
        let project = Project::new(
            "util",
            "1.2.0",
            Language::JavaScript,
            ProjectType::Lib,
            "/w/u",
        );
        let task = package_task(&project, &TaskOptions::default()).unwrap().unwrap();

        assert_eq!(step_names(&task), vec!["package-dist", "package-pack"]);
        let steps = task.children();
        assert_eq!(steps[1].command().unwrap().working_dir(), Some(Path::new("/w/u")));
    }

    #[test]
    fn test_package_after_build_prepares_typescript_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/schema.json"), "{}").unwrap();
        fs::write(root.join("package.json"), r#"{ "name": "util" }"#).unwrap();
        let project = Project::new(
            "util",
            "1.2.0",
            Language::TypeScript,
            ProjectType::Lib,
            root,
        );

        let build = crate::builders::build_task(&project, &Default::default())
            .unwrap()
            .unwrap();
        // build-js only; build-ts needs the compiler
        TaskRunner::default().run(build.children()[0]).unwrap();

        let package = package_task(&project, &TaskOptions::default()).unwrap().unwrap();
        run_local_steps(&package, 1);

        assert!(root.join("working/src/schema.json").exists());
        assert!(root.join("working/package.json").exists());
        assert!(root.join("dist").is_dir());
    }

    #[test]
    fn test_package_creates_missing_dist() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let project = Project::new(
            "util",
            "1.2.0",
            Language::JavaScript,
            ProjectType::Lib,
            root,
        );
        assert!(!root.join("dist").exists());

        let package = package_task(&project, &TaskOptions::default()).unwrap().unwrap();
        run_local_steps(&package, 1);

        assert!(root.join("dist").is_dir());
    }

    #[test]
    fn test_microservice_bundles_in_order() {
        let project = Project::new(
            "orders",
            "3.0.1",
            Language::JavaScript,
            ProjectType::AwsMicroservice,
            "/w/orders",
        );
        let task = package_task(&project, &TaskOptions::default()).unwrap().unwrap();
        assert_eq!(
            step_names(&task),
            vec!["copy-manifest", "package-dist", "package-install", "package-zip"]
        );

        let steps = task.children();
        let zip = steps[3].command().unwrap();
        assert_eq!(zip.args[2], "/w/orders/dist/orders-3.0.1.zip");
        assert_eq!(zip.working_dir(), Some(Path::new("/w/orders/working")));
    }
}
