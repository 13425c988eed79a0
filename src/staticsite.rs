//! Project copier for the static-site and CMS starters.
//! Wraps a single `npx create-react-router` invocation and, on request,
//! follows up with GitHub repository creation through the `gh` CLI.

use clap::ValueEnum;
use dialoguer::Confirm;
use std::path::Path;

use crate::command::{execute, CommandOptions, CommandOutcome};
use crate::config::Config;
use crate::error::{Error, Result};

/// Selectable template repositories for `new static`.
///
/// The set is closed: an unknown template name is rejected during argument
/// parsing instead of producing an undefined repository path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StaticTemplate {
    /// The tws-static starter repository
    TwsStatic,
}

impl StaticTemplate {
    /// Resolves the template choice to its repository path.
    pub fn repository<'a>(&self, config: &'a Config) -> &'a Path {
        match self {
            StaticTemplate::TwsStatic => &config.templates.static_template,
        }
    }
}

/// Flags forwarded to the external project generator.
#[derive(Debug, Default)]
pub struct CopyOptions {
    pub template: Option<StaticTemplate>,
    pub git_init: bool,
    pub npm_install: bool,
    pub create_repo: bool,
}

/// Scaffolds a static-site project through `create-react-router`.
///
/// # Arguments
/// * `project_name` - Name of the directory the generator creates
/// * `options` - Template choice and generator flags
/// * `config` - Template repository locations and author identity
///
/// # Returns
/// * The generator's [`CommandOutcome`]; the caller decides how a failure
///   maps to the process exit status
pub fn copy_static(
    project_name: &str,
    options: &CopyOptions,
    config: &Config,
) -> Result<CommandOutcome> {
    println!(
        "\nProject name: {}\nTemplate: {:?}\nInitialize new repo: {}\nRun npm install: {}\n",
        project_name, options.template, options.git_init, options.npm_install
    );

    let mut args: Vec<String> =
        vec!["create-react-router@latest".to_string(), project_name.to_string()];

    // React Router templates may be a local directory, a GitHub shorthand or
    // a tarball URL; here only the configured local repositories are offered.
    if let Some(template) = options.template {
        args.push("--template".to_string());
        args.push(template.repository(config).display().to_string());
    }

    if options.git_init {
        args.push("--git-init".to_string());
    }

    if options.npm_install {
        args.push("--install".to_string());
    }

    let outcome = run_generator(&args);

    if outcome.succeeded && options.create_repo {
        create_remote_repository(project_name, config)?;
    }

    Ok(outcome)
}

/// Scaffolds a CMS project from the configured tws-cms template.
pub fn copy_cms(project_name: &str, config: &Config) -> Result<CommandOutcome> {
    println!("\nProject name: {}\n", project_name);

    let args: Vec<String> = vec![
        "create-react-router@latest".to_string(),
        project_name.to_string(),
        "--template".to_string(),
        config.templates.cms_template.display().to_string(),
    ];

    Ok(run_generator(&args))
}

fn run_generator(args: &[String]) -> CommandOutcome {
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    execute(
        "npx",
        &arg_refs,
        &CommandOptions {
            success_msg: Some("Project created successfully!"),
            error_msg: Some("Failed to create project"),
            ..Default::default()
        },
    )
}

/// Creates and pushes the GitHub repository for a freshly copied project,
/// after an interactive confirmation.
fn create_remote_repository(project_name: &str, config: &Config) -> Result<()> {
    let slug = format!("{}/{}", config.author.github_username, project_name);

    let confirmed = Confirm::new()
        .with_prompt(format!("Create GitHub repository '{}' and push?", slug))
        .default(false)
        .interact()
        .map_err(|e| Error::Config(e.to_string()))?;

    if !confirmed {
        println!("Skipped repository creation.");
        return Ok(());
    }

    let outcome = execute(
        "gh",
        &["repo", "create", &slug, "--public", "--push"],
        &CommandOptions {
            success_msg: Some("Repository created and pushed"),
            error_msg: Some("Failed to create repository"),
            ..Default::default()
        },
    );

    if outcome.succeeded {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: format!("gh repo create {}", slug),
            exit_code: outcome.exit_code,
        })
    }
}
