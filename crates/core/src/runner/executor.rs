use std::thread;
use std::time::Duration;
use tracing::{info, warn};

use super::watch;
use crate::{
    config::Config,
    error::{Error, Result},
    task::{Task, TaskKind},
};

/// Runs tasks on the calling thread, using scoped threads for parallel groups
#[derive(Debug, Clone)]
pub struct TaskRunner {
    dry_run: bool,
    debounce: Duration,
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl TaskRunner {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dry_run: false,
            debounce: Duration::from_millis(config.watch_debounce_ms),
        }
    }

    /// Print the task tree instead of running it
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn run(&self, task: &Task) -> Result<()> {
        if self.dry_run {
            info!("Dry run of {}", task.display_name);
            print!("{}", task.describe());
            return Ok(());
        }
        self.execute(task)
    }

    pub(crate) fn execute(&self, task: &Task) -> Result<()> {
        match &task.kind {
            TaskKind::Process(command) => {
                let shell_cmd = command.to_shell_command();
                info!("[{}] Running: {}", task.display_name, shell_cmd);
                if let Some(dir) = command.working_dir() {
                    info!("Working directory: {}", dir.display());
                }

                let status = command.execute().map_err(|source| Error::SpawnError {
                    command: shell_cmd.clone(),
                    source,
                })?;

                if status.success() {
                    Ok(())
                } else {
                    Err(Error::ProcessFailed {
                        command: shell_cmd,
                        code: status.code(),
                    })
                }
            }
            TaskKind::Action(action) => {
                info!("[{}] {}", task.display_name, action.describe());
                action.perform()
            }
            TaskKind::Parallel(tasks) => self.execute_parallel(&task.display_name, tasks),
            TaskKind::Series(tasks) => {
                for member in tasks {
                    self.execute(member)?;
                }
                Ok(())
            }
            TaskKind::Watch {
                paths,
                patterns,
                task: inner,
            } => watch::watch_and_rerun(self, paths, patterns, inner, self.debounce),
        }
    }

    fn execute_parallel(&self, name: &str, tasks: &[Task]) -> Result<()> {
        let results: Vec<(String, Result<()>)> = thread::scope(|scope| {
            let handles: Vec<_> = tasks
                .iter()
                .map(|member| {
                    (
                        member.display_name.clone(),
                        scope.spawn(move || self.execute(member)),
                    )
                })
                .collect();

            handles
                .into_iter()
                .map(|(member, handle)| {
                    let result = handle
                        .join()
                        .unwrap_or_else(|_| Err(Error::Other(format!("task {member} panicked"))));
                    (member, result)
                })
                .collect()
        });

        let mut first_error = None;
        for (member, result) in results {
            if let Err(e) = result {
                warn!("[{}] member {} failed: {}", name, member, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
