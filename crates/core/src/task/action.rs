//! In-process file-system work

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete directories recursively. Missing directories are skipped.
    RemoveDirs(Vec<PathBuf>),
    /// Copy a directory tree, skipping files whose extension is `exclude_ext`
    CopyFiles {
        from: PathBuf,
        to: PathBuf,
        exclude_ext: Option<String>,
    },
    /// Copy one file, creating the destination's parent directories
    CopyFile { from: PathBuf, to: PathBuf },
    /// Create a directory and its parents if missing
    EnsureDir(PathBuf),
}

impl Action {
    pub fn perform(&self) -> Result<()> {
        match self {
            Action::RemoveDirs(dirs) => {
                for dir in dirs {
                    if dir.exists() {
                        tracing::debug!("Removing {}", dir.display());
                        fs::remove_dir_all(dir)?;
                    }
                }
                Ok(())
            }
            Action::CopyFiles {
                from,
                to,
                exclude_ext,
            } => copy_tree(from, to, exclude_ext.as_deref()),
            Action::CopyFile { from, to } => {
                if let Some(parent) = to.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(from, to)?;
                Ok(())
            }
            Action::EnsureDir(dir) => {
                fs::create_dir_all(dir)?;
                Ok(())
            }
        }
    }

    /// One-line summary for dry runs
    pub fn describe(&self) -> String {
        match self {
            Action::RemoveDirs(dirs) => {
                let dirs: Vec<_> = dirs.iter().map(|d| d.display().to_string()).collect();
                format!("remove {}", dirs.join(" "))
            }
            Action::CopyFiles {
                from,
                to,
                exclude_ext,
            } => match exclude_ext {
                Some(ext) => format!(
                    "copy {} -> {} (excluding *{ext})",
                    from.display(),
                    to.display()
                ),
                None => format!("copy {} -> {}", from.display(), to.display()),
            },
            Action::CopyFile { from, to } => {
                format!("copy {} -> {}", from.display(), to.display())
            }
            Action::EnsureDir(dir) => format!("mkdir {}", dir.display()),
        }
    }
}

fn copy_tree(from: &Path, to: &Path, exclude_ext: Option<&str>) -> Result<()> {
    let exclude = exclude_ext.map(|ext| ext.trim_start_matches('.'));
    let mut copied = 0usize;

    for entry in WalkDir::new(from) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(ext) = exclude {
            if path.extension().and_then(|e| e.to_str()) == Some(ext) {
                continue;
            }
        }

        let Ok(relative) = path.strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        copied += 1;
    }

    tracing::debug!("Copied {} files from {} to {}", copied, from.display(), to.display());
    Ok(())
}
