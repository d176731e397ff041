use glob::Pattern;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A handle on a project directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the directory at `relative` below this one
    pub fn child(&self, relative: impl AsRef<Path>) -> Directory {
        Directory::new(self.path.join(relative))
    }

    /// Get a file path below this directory
    pub fn file(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Glob matching every file with `extension` anywhere below this directory.
    /// `extension` includes the leading dot; an empty extension matches all files.
    pub fn glob(&self, extension: &str) -> String {
        format!("{}/**/*{}", self.path.to_string_lossy(), extension)
    }

    /// Compiled form of [`Directory::glob`]. Glob metacharacters in the
    /// directory path itself match literally.
    pub fn pattern(&self, extension: &str) -> Result<Pattern> {
        let dir = Pattern::escape(&self.path.to_string_lossy());
        Ok(Pattern::new(&format!("{dir}/**/*{extension}"))?)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
