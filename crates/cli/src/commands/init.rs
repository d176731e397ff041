use anyhow::{Context, Result};
use phase_runner_core::{Config, config::CONFIG_FILE_NAME};
use tracing::info;

use super::project_root;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = project_root(cwd)?;
    let config_path = project_root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        println!("Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote default configuration");
    println!("Created config: {}", config_path.display());
    Ok(())
}
