pub mod init;
pub mod list;
pub mod run;

pub use init::init_command;
pub use list::list_command;
pub use run::run_command;

use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// Resolve the project directory from `--cwd` or the current directory
pub(crate) fn project_root(cwd: Option<&str>) -> Result<PathBuf> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("Failed to canonicalize project root {}", root.display()))
}
