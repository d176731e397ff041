use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Directory;
use crate::{
    config::Config,
    error::{Error, Result},
};

/// Source language of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "js", alias = "javascript")]
    JavaScript,
    #[serde(rename = "ts", alias = "typescript")]
    TypeScript,
}

impl Language {
    /// Extension of source files, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => ".js",
            Language::TypeScript => ".ts",
        }
    }
}

/// Packaging characteristics of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    Lib,
    Cli,
    Api,
    AwsMicroservice,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Lib => "lib",
            ProjectType::Cli => "cli",
            ProjectType::Api => "api",
            ProjectType::AwsMicroservice => "aws-microservice",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    build_metadata: BuildMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildMetadata {
    #[serde(default)]
    project_type: ProjectType,
    #[serde(default)]
    language: Language,
}

/// Describes the project the builders generate tasks for.
///
/// Read-only once constructed.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    version: String,
    language: Language,
    project_type: ProjectType,
    root_dir: Directory,
    config: Config,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        language: Language,
        project_type: ProjectType,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            language,
            project_type,
            root_dir: Directory::new(root),
            config: Config::default(),
        }
    }

    /// Read the descriptor from `<root>/package.json` and the nearest config file
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join("package.json");
        let contents = std::fs::read_to_string(&manifest_path)?;
        let manifest: PackageJson = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!(
                "Invalid project manifest {}: {e}",
                manifest_path.display()
            ))
        })?;

        let config = Config::load_or_default(root)?;
        let project = Self::new(
            manifest.name,
            manifest.version,
            manifest.build_metadata.language,
            manifest.build_metadata.project_type,
            root,
        )
        .with_config(config);

        tracing::debug!(
            "Loaded project {} ({}, {:?})",
            project.name,
            project.project_type,
            project.language
        );
        Ok(project)
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    pub fn is_microservice(&self) -> bool {
        self.project_type == ProjectType::AwsMicroservice
    }

    pub fn root_dir(&self) -> &Directory {
        &self.root_dir
    }

    /// Build output tree
    pub fn working_dir(&self) -> Directory {
        self.root_dir.child("working")
    }

    /// Directory holding the runnable JavaScript of the project
    pub fn js_root_dir(&self) -> Directory {
        if self.has_typescript() || self.is_microservice() {
            self.working_dir()
        } else {
            self.root_dir.clone()
        }
    }

    pub fn source_extension(&self) -> &'static str {
        self.language.extension()
    }

    /// Path of an installed tool executable
    pub fn tool(&self, name: &str) -> PathBuf {
        self.root_dir.path().join(&self.config.bin_dir).join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_js_root_dir_by_project_kind() {
        let lib = Project::new("a", "1.0.0", Language::JavaScript, ProjectType::Lib, "/p");
        assert_eq!(lib.js_root_dir().path(), Path::new("/p"));

        let ts = Project::new("a", "1.0.0", Language::TypeScript, ProjectType::Lib, "/p");
        assert_eq!(ts.js_root_dir().path(), Path::new("/p/working"));

        let service = Project::new(
            "a",
            "1.0.0",
            Language::JavaScript,
            ProjectType::AwsMicroservice,
            "/p",
        );
        assert_eq!(service.js_root_dir().path(), Path::new("/p/working"));
    }

    #[test]
    fn test_load_from_package_json() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = serde_json::json!({
            "name": "orders-service",
            "version": "2.1.0",
            "buildMetadata": {
                "projectType": "aws-microservice",
                "language": "ts"
            }
        });
        std::fs::write(
            temp_dir.path().join("package.json"),
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .unwrap();

        let project = Project::load(temp_dir.path()).unwrap();
        assert_eq!(project.name(), "orders-service");
        assert_eq!(project.version(), "2.1.0");
        assert_eq!(project.project_type(), ProjectType::AwsMicroservice);
        assert!(project.has_typescript());
        assert_eq!(
            project.tool("tsc"),
            temp_dir.path().join("node_modules/.bin/tsc")
        );
    }

    #[test]
    fn test_load_defaults_missing_build_metadata() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), r#"{ "name": "util" }"#).unwrap();

        let project = Project::load(temp_dir.path()).unwrap();
        assert_eq!(project.project_type(), ProjectType::Lib);
        assert_eq!(project.language(), Language::JavaScript);
    }

    #[test]
    fn test_load_rejects_unknown_project_type() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("package.json"),
            r#"{ "name": "x", "buildMetadata": { "projectType": "mainframe" } }"#,
        )
        .unwrap();

        let err = Project::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_load_missing_manifest_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Project::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
