//! Template file rendering for package scaffolding.
//! Performs literal `{{NAME}}` placeholder substitution: replacement is
//! global and case-sensitive, substituted text is not re-scanned, and
//! placeholders without a matching variable are left verbatim.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{Datelike, Local};
use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{Error, Result};

/// Ordered mapping from placeholder name to replacement value.
pub type TemplateVars = IndexMap<&'static str, String>;

/// Creates the template variable mapping for a package.
///
/// # Arguments
/// * `package_name` - Validated package name
/// * `config` - Author identity used for the remaining variables
pub fn template_vars(package_name: &str, config: &Config) -> TemplateVars {
    IndexMap::from([
        ("PACKAGE_NAME", package_name.to_string()),
        ("AUTHOR_NAME", config.author.name.clone()),
        ("AUTHOR_EMAIL", config.author.email.clone()),
        ("AUTHOR_WEBSITE", config.author.website.clone()),
        ("GITHUB_USERNAME", config.author.github_username.clone()),
        ("YEAR", Local::now().year().to_string()),
    ])
}

/// Reads a template file and substitutes every `{{NAME}}` placeholder.
///
/// # Arguments
/// * `template_path` - Path to the UTF-8 template file
/// * `vars` - Variable mapping applied in insertion order
///
/// # Errors
/// * `Error::TemplateNotFound` if the file is absent
/// * `Error::Io` for any other read failure
pub fn render_file<P: AsRef<Path>>(template_path: P, vars: &TemplateVars) -> Result<String> {
    let template_path = template_path.as_ref();
    let content = fs::read_to_string(template_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::TemplateNotFound { path: template_path.display().to_string() }
        } else {
            Error::Io(err)
        }
    })?;

    Ok(render_str(&content, vars))
}

/// Applies the substitution rule to an in-memory template string.
pub fn render_str(template: &str, vars: &TemplateVars) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{{{}}}}}", key);
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}
