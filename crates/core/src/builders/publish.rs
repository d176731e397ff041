use tracing::debug;

use crate::{
    builders::manifest_task,
    error::Result,
    options::PublishOptions,
    project::Project,
    task::{ProcessCommand, Task},
};

/// Publish the package to the npm registry. Microservices are deployed, not
/// published, so they get no task.
pub fn publish_task(project: &Project, options: &PublishOptions) -> Result<Option<Task>> {
    if project.is_microservice() {
        debug!("No publish step for {} projects", project.project_type());
        return Ok(None);
    }

    let mut args = vec!["publish".to_string()];
    if options.dry_run {
        args.push("--dry-run".to_string());
    }
    if let Some(tag) = &options.tag {
        args.push("--tag".to_string());
        args.push(tag.clone());
    }

    let description = "Publishes the package to the npm registry";
    let publish = ProcessCommand::new("npm", args).with_working_dir(project.js_root_dir().path());

    match manifest_task(project) {
        Some(copy_manifest) => Ok(Some(Task::series(
            "publish",
            description,
            vec![
                copy_manifest,
                Task::process("publish-npm", description, publish),
            ],
        ))),
        None => Ok(Some(Task::process("publish", description, publish))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Language, ProjectType};
    use crate::runner::TaskRunner;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_microservices_are_not_published() {
        let project = Project::new(
            "svc",
            "1.0.0",
            Language::TypeScript,
            ProjectType::AwsMicroservice,
            "/w/svc",
        );
        assert!(publish_task(&project, &PublishOptions::default()).unwrap().is_none());
    }

    #[test]
    fn test_publish_flags() {
        let project = Project::new(
            "lib",
            "1.0.0",
            Language::JavaScript,
            ProjectType::Lib,
            "/w/lib",
        );
        let options = PublishOptions {
            dry_run: true,
            tag: Some("next".to_string()),
        };
        let task = publish_task(&project, &options).unwrap().unwrap();
        assert_eq!(
            task.command().unwrap().args,
            vec!["publish", "--dry-run", "--tag", "next"]
        );
    }

    #[test]
    fn test_typescript_publish_copies_manifest_first() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), r#"{ "name": "lib" }"#).unwrap();
        let project = Project::new("lib", "1.0.0", Language::TypeScript, ProjectType::Lib, root);

        let task = publish_task(&project, &PublishOptions::default()).unwrap().unwrap();
        let steps = task.children();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].display_name, "copy-manifest");

        let npm = steps[1].command().unwrap();
        assert_eq!(npm.working_dir(), Some(root.join("working").as_path()));

        TaskRunner::default().run(steps[0]).unwrap();
        assert!(root.join("working/package.json").exists());
    }
}
