use anyhow::{Context, Result};
use phase_runner_core::{Phase, Project};

use super::project_root;

pub fn list_command(cwd: Option<&str>) -> Result<()> {
    let root = project_root(cwd)?;
    let project = Project::load(&root)
        .with_context(|| format!("Failed to load project at {}", root.display()))?;

    println!(
        "{} {} ({} project, {:?})",
        project.name(),
        project.version(),
        project.project_type(),
        project.language()
    );

    let options = project.config().defaults.clone();
    for phase in Phase::ALL {
        match phase.build(&project, &options) {
            Ok(Some(task)) => println!("  {:<8} {}", phase.as_str(), task.description),
            Ok(None) => println!("  {:<8} (not applicable)", phase.as_str()),
            Err(e) => println!("  {:<8} (error: {})", phase.as_str(), e),
        }
    }

    Ok(())
}
