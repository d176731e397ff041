//! phase-runner - lifecycle task builders for JavaScript and TypeScript projects
//!
//! This crate provides functionality to:
//! - Describe a project by language and packaging type
//! - Build clean, format, lint, build, test, package, publish and docs tasks
//!   that delegate to the project's own tooling
//! - Run those tasks once, as parallel or serial groups, or in watch mode
pub mod builders;
pub mod config;
pub mod error;
pub mod options;
pub mod project;
pub mod registry;
pub mod runner;
pub mod task;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use options::{
    BuildOptions, FormatOptions, LintOptions, PublishOptions, TaskOptions, TestOptions, TestType,
};
pub use project::{Directory, Language, Project, ProjectType};
pub use registry::Phase;
pub use runner::TaskRunner;
pub use task::{Action, ProcessCommand, Task, TaskKind};
