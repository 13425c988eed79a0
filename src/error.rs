//! Error handling for the TWS CLI.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for TWS CLI operations.
///
/// This enum represents all possible errors that can occur within the
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Package name rejected by validation
    #[error("Invalid package name '{name}'. Use only letters, numbers, dashes, and underscores.")]
    InvalidPackageName { name: String },

    /// Scaffold target directory already present on disk
    #[error("Directory '{path}' already exists.")]
    DirectoryExists { path: String },

    /// Template file missing from the template directory
    #[error("Template file '{path}' not found.")]
    TemplateNotFound { path: String },

    /// A spawned child process exited nonzero or could not be started
    #[error("Command '{command}' failed with exit code {exit_code}.")]
    CommandFailed { command: String, exit_code: i32 },

    /// Represents errors in environment-derived configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote file fetch returned a non-success status
    #[error("Fetching '{url}' failed with status {status}.")]
    FetchFailed { url: String, status: u16 },

    /// trigger.dev API returned a non-success status
    #[error("Trigger API request failed with status {status}: {body}")]
    TriggerApi { status: u16, body: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error. Command failures propagate the
    /// child's exit code when one is available; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { exit_code, .. } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// This is the only place in the application that terminates the process;
/// every other layer propagates errors upward.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(err.exit_code());
}
