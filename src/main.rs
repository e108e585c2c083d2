//! apigen CLI
//!
//! Usage: apigen [--config PATH] [--project DIR] [-v...] [-q] <COMMAND>
//!
//! Commands:
//!   list      List discovered contract documents
//!   plan      Show the task graph
//!   roots     Print generated source roots
//!   generate  Run generation tasks

mod commands;

use anyhow::Result;
use clap::Parser;

use apigen::application::BuildContext;
use apigen::config::Config;
use apigen::infrastructure::FsSpecificationLocator;
use apigen::logging;
use apigen::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = commands::resolve_project_root(cli.project.as_deref())?;
    let (config, warnings) = Config::load_for_project(&project_root, cli.config.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let context = BuildContext::discover(project_root, config, &FsSpecificationLocator::new())?;

    match cli.command {
        Commands::List => commands::cmd_list(&context),
        Commands::Plan { json } => commands::cmd_plan(&context, json),
        Commands::Roots => commands::cmd_roots(&context),
        Commands::Generate {
            tasks,
            jobs,
            force,
            skip_compile,
        } => commands::cmd_generate(&context, tasks, jobs, force, skip_compile),
    }
}
