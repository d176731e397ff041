use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// An external executable invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ProcessCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program.to_string_lossy());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    /// Run the program with inherited stdio and wait for it to exit
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            tracing::debug!("Setting env: {}={}", key, value);
            cmd.env(key, value);
        }

        cmd.status()
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_quotes_spaces() {
        let command = ProcessCommand::new(
            "node_modules/.bin/eslint",
            vec!["--fix".to_string(), "my src/**/*.js".to_string()],
        );
        assert_eq!(
            command.to_shell_command(),
            "node_modules/.bin/eslint --fix 'my src/**/*.js'"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_exit_status() {
        let ok = ProcessCommand::new("sh", vec!["-c".into(), "exit 0".into()]);
        assert!(ok.execute().unwrap().success());

        let failing = ProcessCommand::new("sh", vec!["-c".into(), "exit 3".into()]);
        assert_eq!(failing.execute().unwrap().code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_uses_working_dir_and_env() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let command = ProcessCommand::new(
            "sh",
            vec!["-c".into(), "echo \"$MARKER\" > marker.txt".into()],
        )
        .with_working_dir(temp_dir.path())
        .with_env("MARKER", "hello");

        assert!(command.execute().unwrap().success());
        let written = std::fs::read_to_string(temp_dir.path().join("marker.txt")).unwrap();
        assert_eq!(written.trim(), "hello");
    }
}
