//! Phase names and their builders

use std::fmt;
use std::str::FromStr;

use crate::{
    builders,
    error::{Error, Result},
    options::TaskOptions,
    project::Project,
    task::Task,
};

/// A lifecycle phase with a task builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Clean,
    Format,
    Lint,
    Build,
    Test,
    Package,
    Publish,
    Docs,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Clean,
        Phase::Format,
        Phase::Lint,
        Phase::Build,
        Phase::Test,
        Phase::Package,
        Phase::Publish,
        Phase::Docs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Clean => "clean",
            Phase::Format => "format",
            Phase::Lint => "lint",
            Phase::Build => "build",
            Phase::Test => "test",
            Phase::Package => "package",
            Phase::Publish => "publish",
            Phase::Docs => "docs",
        }
    }

    /// Build this phase's task, or `None` if it does not apply to `project`
    pub fn build(&self, project: &Project, options: &TaskOptions) -> Result<Option<Task>> {
        match self {
            Phase::Clean => builders::clean_task(project, options),
            Phase::Format => builders::format_task(project, &options.into()),
            Phase::Lint => builders::lint_task(project, &options.into()),
            Phase::Build => builders::build_task(project, &options.into()),
            Phase::Test => builders::test_task(project, &options.into()),
            Phase::Package => builders::package_task(project, options),
            Phase::Publish => builders::publish_task(project, &options.into()),
            Phase::Docs => builders::docs_task(project, options),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| Error::UnknownPhase(s.to_string()))
    }
}

/// Every applicable phase task for `project`, in phase order
pub fn tasks(project: &Project, options: &TaskOptions) -> Result<Vec<(Phase, Task)>> {
    let mut tasks = Vec::new();
    for phase in Phase::ALL {
        if let Some(task) = phase.build(project, options)? {
            tasks.push((phase, task));
        }
    }
    Ok(tasks)
}
