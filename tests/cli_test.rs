use clap::Parser;
use std::ffi::OsString;

use tws_cli::cli::{Cli, Commands, NewCommand, RunsCommand, TriggerCommand};
use tws_cli::staticsite::StaticTemplate;
use tws_cli::trigger::TriggerRunStatus;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("tws-cli")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_new_static_args() {
    let parsed = Cli::try_parse_from(make_args(&[
        "new",
        "static",
        "mysite",
        "--template",
        "tws-static",
        "--git-init",
        "--npm-install",
    ]))
    .unwrap();

    match parsed.command {
        Commands::New {
            starter: NewCommand::Static { name, template, git_init, npm_install, create_repo },
        } => {
            assert_eq!(name, "mysite");
            assert_eq!(template, Some(StaticTemplate::TwsStatic));
            assert!(git_init);
            assert!(npm_install);
            assert!(!create_repo);
        }
        other => panic!("Expected new static, got {:?}", other),
    }
}

#[test]
fn test_new_static_rejects_unknown_template() {
    let result =
        Cli::try_parse_from(make_args(&["new", "static", "mysite", "--template", "bogus"]));
    assert!(result.is_err());
}

#[test]
fn test_new_static_requires_name() {
    assert!(Cli::try_parse_from(make_args(&["new", "static"])).is_err());
}

#[test]
fn test_new_package_args() {
    let parsed = Cli::try_parse_from(make_args(&["new", "package", "my-pkg"])).unwrap();

    match parsed.command {
        Commands::New { starter: NewCommand::Package { name } } => assert_eq!(name, "my-pkg"),
        other => panic!("Expected new package, got {:?}", other),
    }
}

#[test]
fn test_new_cms_args() {
    let parsed = Cli::try_parse_from(make_args(&["new", "cms", "my-site"])).unwrap();

    match parsed.command {
        Commands::New { starter: NewCommand::Cms { name } } => assert_eq!(name, "my-site"),
        other => panic!("Expected new cms, got {:?}", other),
    }
}

#[test]
fn test_trigger_runs_list_default_status() {
    let parsed = Cli::try_parse_from(make_args(&["trigger", "runs", "list"])).unwrap();

    match parsed.command {
        Commands::Trigger { action: TriggerCommand::Runs { action: RunsCommand::List { status } } } => {
            assert_eq!(status, None);
        }
        other => panic!("Expected trigger runs list, got {:?}", other),
    }
}

#[test]
fn test_trigger_runs_list_with_status() {
    let parsed =
        Cli::try_parse_from(make_args(&["trigger", "runs", "list", "--status", "failed"])).unwrap();

    match parsed.command {
        Commands::Trigger { action: TriggerCommand::Runs { action: RunsCommand::List { status } } } => {
            assert_eq!(status, Some(TriggerRunStatus::Failed));
        }
        other => panic!("Expected trigger runs list, got {:?}", other),
    }
}

#[test]
fn test_trigger_execute_args() {
    let parsed = Cli::try_parse_from(make_args(&["trigger", "execute"])).unwrap();

    assert!(matches!(parsed.command, Commands::Trigger { action: TriggerCommand::Execute }));
}

#[test]
fn test_verbose_flag_is_global() {
    let parsed =
        Cli::try_parse_from(make_args(&["new", "package", "my-pkg", "--verbose"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_no_command_is_an_error() {
    assert!(Cli::try_parse_from(make_args(&[])).is_err());
}
