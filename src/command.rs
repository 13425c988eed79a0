//! Child process execution for the TWS CLI.
//! Every external tool (git, npm, npx, gh) is invoked through this module
//! with inherited stdio so the child's output stays visible live.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Exit code reported for child processes that could not be spawned.
pub const SPAWN_FAILURE_CODE: i32 = -1;

/// Per-invocation options for a child process.
#[derive(Debug, Default)]
pub struct CommandOptions<'a> {
    /// Working directory for the child; must exist or the spawn fails
    pub cwd: Option<&'a Path>,
    /// Message printed when the child exits 0
    pub success_msg: Option<&'a str>,
    /// Message printed when the child fails; a generic one is used otherwise
    pub error_msg: Option<&'a str>,
    /// Suppress progress and result lines
    pub silent: bool,
}

/// Outcome of a single child process invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    pub exit_code: i32,
}

/// Executes an external command and reports its outcome.
///
/// The child inherits the parent's stdout and stderr, and the calling flow
/// blocks until it terminates. Arguments are passed verbatim; there is no
/// shell interpretation. A spawn failure (for example, the executable not
/// being found) is reported as a failed outcome carrying
/// [`SPAWN_FAILURE_CODE`] rather than an error.
///
/// # Arguments
/// * `program` - Executable name, resolved on the ambient search path
/// * `args` - Ordered argument list
/// * `options` - Working directory, messages, verbosity
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> CommandOutcome {
    if !options.silent {
        println!("\nRunning: {} {}", program, args.join(" "));
    }

    let mut command = Command::new(program);
    command.args(args).stdout(Stdio::inherit()).stderr(Stdio::inherit());
    if let Some(cwd) = options.cwd {
        command.current_dir(cwd);
    }

    let outcome = match command.status() {
        Ok(status) => CommandOutcome {
            succeeded: status.success(),
            exit_code: status.code().unwrap_or(SPAWN_FAILURE_CODE),
        },
        Err(err) => {
            debug!("Failed to spawn '{}': {}", program, err);
            CommandOutcome { succeeded: false, exit_code: SPAWN_FAILURE_CODE }
        }
    };

    if !options.silent {
        if outcome.succeeded {
            if let Some(msg) = options.success_msg {
                println!("{}", msg);
            }
        } else {
            match options.error_msg {
                Some(msg) => eprintln!("{}", msg),
                None => eprintln!(
                    "{} failed with exit code {}",
                    program, outcome.exit_code
                ),
            }
        }
    }

    outcome
}

/// Executes a command and propagates a [`Error::CommandFailed`] on failure.
///
/// The attached exit code is the child's own, or [`SPAWN_FAILURE_CODE`] when
/// the process could not be started; the outermost error handler translates
/// it into the process exit status.
pub fn execute_checked(program: &str, args: &[&str], options: &CommandOptions) -> Result<()> {
    let outcome = execute(program, args, options);
    if outcome.succeeded {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            exit_code: outcome.exit_code,
        })
    }
}
