//! Command-line interface implementation for the TWS CLI.
//! Provides the subcommand tree and argument parsing using clap.

use clap::{Parser, Subcommand};

use crate::staticsite::StaticTemplate;
use crate::trigger::TriggerRunStatus;

/// Command-line arguments structure for the TWS CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tws-cli",
    author,
    version,
    about = "A Tech with Seth CLI",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project starter
    New {
        #[command(subcommand)]
        starter: NewCommand,
    },

    /// trigger.dev task queue
    Trigger {
        #[command(subcommand)]
        action: TriggerCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum NewCommand {
    /// Scaffold a static-site project from a template repository
    Static {
        /// Project name
        name: String,

        /// Template repo
        #[arg(long, value_enum)]
        template: Option<StaticTemplate>,

        /// Initialize repo
        #[arg(long)]
        git_init: bool,

        /// Install node modules
        #[arg(long)]
        npm_install: bool,

        /// Create and push the GitHub repository after a successful copy
        #[arg(long)]
        create_repo: bool,
    },

    /// Scaffold a CMS project from the tws-cms template
    Cms {
        /// Project name
        name: String,
    },

    /// Scaffold a new npm package
    Package {
        /// Package name
        name: String,
    },

    /// Pull authentication starter files into the current project
    Auth,
}

#[derive(Subcommand, Debug)]
pub enum TriggerCommand {
    /// Inspect task runs
    Runs {
        #[command(subcommand)]
        action: RunsCommand,
    },

    /// Fire the document-updater task
    Execute,
}

#[derive(Subcommand, Debug)]
pub enum RunsCommand {
    /// List recent runs
    List {
        /// Run status to filter by (defaults to completed)
        #[arg(long, value_enum)]
        status: Option<TriggerRunStatus>,
    },
}

/// Parses command line arguments and returns the Cli structure.
pub fn get_args() -> Cli {
    Cli::parse()
}
