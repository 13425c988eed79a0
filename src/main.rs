//! TWS CLI entry point and command dispatch.
//! Parses arguments, builds the configuration once, and routes to the
//! scaffolding, copying and task-queue flows. This is the only layer that
//! translates a failure into a process exit code.

use tws_cli::{
    auth,
    cli::{get_args, Cli, Commands, NewCommand, RunsCommand, TriggerCommand},
    command::CommandOutcome,
    config::Config,
    error::{default_error_handler, Error, Result},
    package,
    staticsite::{copy_cms, copy_static, CopyOptions},
    trigger::{TriggerClient, TriggerRunStatus, DEFAULT_RUN_LIMIT, DOCUMENT_UPDATER_TASK},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = Config::from_env();

    if let Err(err) = run(args, &config) {
        default_error_handler(err);
    }
}

/// Maps a failed generator outcome to an error carrying its exit code.
fn ensure_succeeded(outcome: CommandOutcome, command: &str) -> Result<()> {
    if outcome.succeeded {
        Ok(())
    } else {
        Err(Error::CommandFailed { command: command.to_string(), exit_code: outcome.exit_code })
    }
}

fn run(args: Cli, config: &Config) -> Result<()> {
    match args.command {
        Commands::New { starter } => match starter {
            NewCommand::Static { name, template, git_init, npm_install, create_repo } => {
                let options = CopyOptions { template, git_init, npm_install, create_repo };
                let outcome = copy_static(&name, &options, config)?;
                ensure_succeeded(outcome, "npx create-react-router@latest")
            }
            NewCommand::Cms { name } => {
                let outcome = copy_cms(&name, config)?;
                ensure_succeeded(outcome, "npx create-react-router@latest")
            }
            NewCommand::Package { name } => {
                package::create_package(&name, config)?;
                Ok(())
            }
            NewCommand::Auth => {
                let target_root = std::env::current_dir()?;
                auth::import_auth_files(&target_root)
            }
        },
        Commands::Trigger { action } => {
            let client = TriggerClient::from_env()?;
            match action {
                TriggerCommand::Runs { action: RunsCommand::List { status } } => {
                    let status = status.unwrap_or(TriggerRunStatus::Completed);
                    let runs = client.list_runs(status, DEFAULT_RUN_LIMIT)?;
                    if runs.is_empty() {
                        println!("No {} runs found.", status);
                    }
                    for run in runs {
                        println!(
                            "{}  {}  {}  {}",
                            run.id, run.status, run.task_identifier, run.created_at
                        );
                    }
                    Ok(())
                }
                TriggerCommand::Execute => {
                    let handle = client.trigger_task(DOCUMENT_UPDATER_TASK)?;
                    println!("Triggered '{}' (run {})", DOCUMENT_UPDATER_TASK, handle.id);
                    Ok(())
                }
            }
        }
    }
}
