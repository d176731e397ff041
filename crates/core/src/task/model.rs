use glob::Pattern;
use std::fmt::Write;
use std::path::PathBuf;

use super::{Action, ProcessCommand};
use crate::{error::Result, runner::TaskRunner};

/// A named, described, runnable unit of work
#[derive(Debug, Clone)]
pub struct Task {
    pub display_name: String,
    pub description: String,
    pub kind: TaskKind,
}

#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Invoke one external process
    Process(ProcessCommand),
    /// Do file-system work in process
    Action(Action),
    /// Run members concurrently; fails if any member fails
    Parallel(Vec<Task>),
    /// Run members in order, stopping at the first failure
    Series(Vec<Task>),
    /// Run `task`, then re-run it whenever a file under `paths` matching
    /// one of `patterns` changes
    Watch {
        paths: Vec<PathBuf>,
        patterns: Vec<Pattern>,
        task: Box<Task>,
    },
}

impl Task {
    fn new(name: impl Into<String>, description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            display_name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn process(
        name: impl Into<String>,
        description: impl Into<String>,
        command: ProcessCommand,
    ) -> Self {
        Self::new(name, description, TaskKind::Process(command))
    }

    pub fn action(
        name: impl Into<String>,
        description: impl Into<String>,
        action: Action,
    ) -> Self {
        Self::new(name, description, TaskKind::Action(action))
    }

    pub fn parallel(
        name: impl Into<String>,
        description: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Self {
        Self::new(name, description, TaskKind::Parallel(tasks))
    }

    pub fn series(
        name: impl Into<String>,
        description: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Self {
        Self::new(name, description, TaskKind::Series(tasks))
    }

    pub fn watch(
        name: impl Into<String>,
        description: impl Into<String>,
        paths: Vec<PathBuf>,
        patterns: Vec<Pattern>,
        task: Task,
    ) -> Self {
        Self::new(
            name,
            description,
            TaskKind::Watch {
                paths,
                patterns,
                task: Box::new(task),
            },
        )
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Direct members of a composite, the watched task of a watch, nothing for leaves
    pub fn children(&self) -> Vec<&Task> {
        match &self.kind {
            TaskKind::Parallel(tasks) | TaskKind::Series(tasks) => tasks.iter().collect(),
            TaskKind::Watch { task, .. } => vec![task.as_ref()],
            TaskKind::Process(_) | TaskKind::Action(_) => Vec::new(),
        }
    }

    /// The process this task invokes, if it is a process leaf
    pub fn command(&self) -> Option<&ProcessCommand> {
        match &self.kind {
            TaskKind::Process(command) => Some(command),
            _ => None,
        }
    }

    pub fn is_watch(&self) -> bool {
        matches!(self.kind, TaskKind::Watch { .. })
    }

    /// Run with a default runner
    pub fn run(&self) -> Result<()> {
        TaskRunner::default().run(self)
    }

    /// Render the task tree with the commands each leaf would run
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_into(&mut out, 0);
        out
    }

    fn describe_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{}: {}", self.display_name, self.description);
        match &self.kind {
            TaskKind::Process(command) => {
                let _ = writeln!(out, "{indent}  $ {}", command.to_shell_command());
            }
            TaskKind::Action(action) => {
                let _ = writeln!(out, "{indent}  > {}", action.describe());
            }
            TaskKind::Parallel(tasks) | TaskKind::Series(tasks) => {
                for task in tasks {
                    task.describe_into(out, depth + 1);
                }
            }
            TaskKind::Watch {
                patterns, task, ..
            } => {
                let patterns: Vec<_> = patterns.iter().map(Pattern::as_str).collect();
                let _ = writeln!(out, "{indent}  watching {}", patterns.join(", "));
                task.describe_into(out, depth + 1);
            }
        }
    }
}
