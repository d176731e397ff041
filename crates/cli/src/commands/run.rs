use anyhow::{Context, Result};
use phase_runner_core::{Project, TaskOptions, TaskRunner};
use tracing::{debug, error, info};

use super::project_root;
use crate::cli::RunArgs;

pub fn run_command(args: RunArgs) -> Result<()> {
    let root = project_root(args.cwd.as_deref())?;
    let project = Project::load(&root)
        .with_context(|| format!("Failed to load project at {}", root.display()))?;

    let options = merge_options(&args, &project.config().defaults);
    debug!("Running phase {} with {:?}", args.phase, options);

    let Some(task) = args
        .phase
        .build(&project, &options)
        .with_context(|| format!("Failed to build the {} task", args.phase))?
    else {
        println!(
            "Phase {} does not apply to this {} project",
            args.phase,
            project.project_type()
        );
        return Ok(());
    };

    let runner = TaskRunner::from_config(project.config()).with_dry_run(args.dry_run);
    info!("Running task {}: {}", task.display_name, task.description);
    if let Err(e) = runner.run(&task) {
        error!("{} failed: {}", task.display_name, e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

/// Flags given on the command line win over configured defaults
pub(crate) fn merge_options(args: &RunArgs, defaults: &TaskOptions) -> TaskOptions {
    TaskOptions {
        watch: args.watch || defaults.watch,
        test_type: args.test_type.unwrap_or(defaults.test_type),
        fix: args.fix || defaults.fix,
        check: args.check || defaults.check,
        dry_run: args.publish_dry_run || defaults.dry_run,
        tag: args.tag.clone().or_else(|| defaults.tag.clone()),
    }
}
