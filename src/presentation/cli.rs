//! CLI Argument Parsing
//!
//! Global flags (--config, --project, --verbose, --quiet) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// apigen - task graphs for contract-driven code generation
#[derive(Parser, Debug)]
#[command(name = "apigen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: <project>/apigen.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered contract documents
    List,

    /// Show the task graph without running anything
    Plan {
        /// Print the graph as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the generated source roots, one per line
    Roots,

    /// Run generation tasks
    Generate {
        /// Tasks to run (default: everything up to the compile step)
        #[arg(value_name = "TASK")]
        tasks: Vec<String>,

        /// Worker threads (default: from config, then available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Regenerate units even when their inputs are unchanged
        #[arg(short, long)]
        force: bool,

        /// Do not run the compile command
        #[arg(long)]
        skip_compile: bool,
    },
}
