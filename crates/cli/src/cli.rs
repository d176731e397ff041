use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use phase_runner_core::{Phase, TestType};

use crate::commands::{init_command, list_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "phase-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every phase and whether it applies to the project
    #[command(visible_alias = "ls")]
    List {
        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,
    },
    /// Build and run the task for a phase
    #[command(visible_alias = "r")]
    Run(RunArgs),
    /// Write a default .phase-runner.json to the project directory
    Init {
        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Phase to run: clean, format, lint, build, test, package, publish or docs
    pub phase: Phase,

    /// Project directory (defaults to current directory)
    #[arg(long)]
    pub cwd: Option<String>,

    /// Re-run on file changes (build and test)
    #[arg(short, long)]
    pub watch: bool,

    /// Test suite to run: unit or api
    #[arg(short = 't', long)]
    pub test_type: Option<TestType>,

    /// Apply lint fixes
    #[arg(long)]
    pub fix: bool,

    /// Check formatting without rewriting files
    #[arg(long)]
    pub check: bool,

    /// Distribution tag for publish
    #[arg(long)]
    pub tag: Option<String>,

    /// Ask the registry for a publish dry run
    #[arg(long)]
    pub publish_dry_run: bool,

    /// Print the task without executing it
    #[arg(short, long)]
    pub dry_run: bool,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::List { cwd } => list_command(cwd.as_deref()),
            Commands::Run(args) => run_command(args),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
