//! Configuration for the TWS CLI.
//! Centralizes author identity, filesystem roots and template locations.
//! Values come from `TWS_*` environment variables with hardcoded defaults;
//! the configuration is built once at startup and passed by reference into
//! every component that needs it.

use std::env;
use std::path::PathBuf;

/// Author identity used in generated manifests and templates.
#[derive(Debug, Clone)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub website: String,
    pub github_username: String,
}

/// Filesystem roots for generated projects.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory under which new packages are created
    pub repositories_root: PathBuf,
}

/// Locations of the project templates.
#[derive(Debug, Clone)]
pub struct Templates {
    /// Template repository for `new static`
    pub static_template: PathBuf,
    /// Template repository for `new cms`
    pub cms_template: PathBuf,
    /// Directory holding the package template files (LICENSE, README, ...)
    pub package_templates: PathBuf,
}

/// Process-wide configuration, read-only after construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub author: Author,
    pub paths: Paths,
    pub templates: Templates,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: Author {
                name: "Seth Davis".to_string(),
                email: "techwithseth512@gmail.com".to_string(),
                website: "https://sethdavis.tech".to_string(),
                github_username: "sethdavis512".to_string(),
            },
            paths: Paths {
                repositories_root: PathBuf::from("/Users/seth/repositories"),
            },
            templates: Templates {
                static_template: PathBuf::from("/Users/seth/repositories/tws-static"),
                cms_template: PathBuf::from("/Users/seth/repositories/tws-cms"),
                package_templates: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")),
            },
        }
    }
}

impl Config {
    /// Builds the configuration, letting `TWS_*` environment variables
    /// override the defaults. There is no reload mechanism mid-run.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            author: Author {
                name: env_or("TWS_AUTHOR_NAME", &defaults.author.name),
                email: env_or("TWS_AUTHOR_EMAIL", &defaults.author.email),
                website: env_or("TWS_AUTHOR_WEBSITE", &defaults.author.website),
                github_username: env_or("TWS_GITHUB_USERNAME", &defaults.author.github_username),
            },
            paths: Paths {
                repositories_root: env::var("TWS_REPOS_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.paths.repositories_root),
            },
            templates: Templates {
                static_template: env::var("TWS_STATIC_TEMPLATE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.templates.static_template),
                cms_template: env::var("TWS_CMS_TEMPLATE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.templates.cms_template),
                package_templates: env::var("TWS_PACKAGE_TEMPLATES")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.templates.package_templates),
            },
        }
    }

    /// GitHub repository URL for a project owned by the configured author.
    pub fn repository_url(&self, name: &str) -> String {
        format!("https://github.com/{}/{}.git", self.author.github_username, name)
    }
}
