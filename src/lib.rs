//! TWS CLI is a personal project-scaffolding tool.
//! It creates new repositories from templates by shelling out to external
//! tools (create-react-router, npm, git, the GitHub CLI) and by templating
//! a handful of text files for a new npm package.

/// Authentication starter file import from the indie-stack
pub mod auth;

/// Command-line interface module for the TWS CLI
pub mod cli;

/// Child process execution with inherited stdio
pub mod command;

/// Author identity and path configuration
/// Sourced from TWS_* environment variables with hardcoded defaults
pub mod config;

/// Error types and handling for the TWS CLI
pub mod error;

/// npm package scaffolding pipeline
pub mod package;

/// Static-site and CMS project copier
pub mod staticsite;

/// Template file rendering with {{NAME}} placeholder substitution
pub mod template;

/// trigger.dev task-queue client
pub mod trigger;
