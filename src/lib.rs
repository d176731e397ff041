//! Fixtures shared by the cross-crate integration tests

use std::fs;
use std::io;
use std::path::Path;

/// Lay out a minimal project: package.json with build metadata, `src/`,
/// and one directory per test suite in `suites`
pub fn write_project(
    root: &Path,
    name: &str,
    project_type: &str,
    language: &str,
    suites: &[&str],
) -> io::Result<()> {
    let manifest = serde_json::json!({
        "name": name,
        "version": "1.0.0",
        "buildMetadata": {
            "projectType": project_type,
            "language": language
        }
    });
    fs::write(
        root.join("package.json"),
        serde_json::to_string_pretty(&manifest).map_err(io::Error::other)?,
    )?;

    fs::create_dir_all(root.join("src"))?;
    for suite in suites {
        fs::create_dir_all(root.join("test").join(suite))?;
    }
    Ok(())
}
