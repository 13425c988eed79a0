use std::io;

use tws_cli::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::Io(_) => (),
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::InvalidPackageName { name: "bad name".to_string() };
    assert_eq!(
        err.to_string(),
        "Invalid package name 'bad name'. Use only letters, numbers, dashes, and underscores."
    );

    let err = Error::DirectoryExists { path: "/tmp/pkg".to_string() };
    assert_eq!(err.to_string(), "Directory '/tmp/pkg' already exists.");

    let err = Error::CommandFailed { command: "git init".to_string(), exit_code: 128 };
    assert_eq!(err.to_string(), "Command 'git init' failed with exit code 128.");
}

#[test]
fn test_exit_code_propagates_child_code() {
    let err = Error::CommandFailed { command: "npm install".to_string(), exit_code: 3 };
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_exit_code_falls_back_to_one() {
    // Spawn failures carry the -1 sentinel, which must not leak as a status.
    let err = Error::CommandFailed { command: "missing-tool".to_string(), exit_code: -1 };
    assert_eq!(err.exit_code(), 1);

    let err = Error::Config("TRIGGER_SECRET_KEY is not set".to_string());
    assert_eq!(err.exit_code(), 1);

    let err = Error::TemplateNotFound { path: "LICENSE.txt".to_string() };
    assert_eq!(err.exit_code(), 1);
}
