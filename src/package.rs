//! npm package scaffolding pipeline.
//! Creates a complete package skeleton: directory layout, package.json,
//! rendered template files, source stubs, git repository and dev
//! dependencies. Stages run in order and the first failure aborts the run;
//! only the final formatting step is allowed to fail.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use serde_json::json;

use crate::command::{execute, execute_checked, CommandOptions};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::template::{render_file, template_vars};

static PACKAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Development dependencies installed into every new package.
const DEV_DEPENDENCIES: [&str; 4] = ["typescript", "prettier", "vitest", "@changesets/cli"];

/// Template files rendered into the package root, as
/// (template file name, destination relative to the package root) pairs.
const TEMPLATE_FILES: [(&str, &str); 4] = [
    ("LICENSE.txt", "LICENSE"),
    ("README.md", "README.md"),
    ("tsconfig.json", "tsconfig.json"),
    ("publish.yml", ".github/workflows/publish.yml"),
];

/// Validates an npm package name.
///
/// # Returns
/// * The name unchanged when it matches `^[A-Za-z0-9_-]+$`
///
/// # Errors
/// * `Error::InvalidPackageName` for anything else, including the empty string
pub fn validate_package_name(name: &str) -> Result<&str> {
    if PACKAGE_NAME_RE.is_match(name) {
        Ok(name)
    } else {
        Err(Error::InvalidPackageName { name: name.to_string() })
    }
}

/// Creates the package root with its `src` and `.github/workflows`
/// subdirectories.
///
/// # Errors
/// * `Error::DirectoryExists` if the package root is already present;
///   existing directories are never overwritten
pub fn create_directory_structure(package_path: &Path) -> Result<()> {
    if package_path.exists() {
        return Err(Error::DirectoryExists { path: package_path.display().to_string() });
    }

    fs::create_dir_all(package_path.join("src"))?;
    fs::create_dir_all(package_path.join(".github").join("workflows"))?;
    println!("Created directory structure");
    Ok(())
}

/// Builds the package.json document for a new package.
pub fn manifest(package_name: &str, config: &Config) -> serde_json::Value {
    let github = &config.author.github_username;

    json!({
        "name": package_name,
        "version": "1.0.0",
        "description": format!("A new npm package: {}", package_name),
        "keywords": ["typescript", "package"],
        "homepage": format!("https://github.com/{}/{}", github, package_name),
        "bugs": {
            "url": format!("https://github.com/{}/{}/issues", github, package_name)
        },
        "author": format!(
            "{} <{}> ({})",
            config.author.name, config.author.email, config.author.website
        ),
        "repository": {
            "type": "git",
            "url": format!("git+https://github.com/{}/{}.git", github, package_name)
        },
        "files": ["dist"],
        "type": "module",
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "scripts": {
            "build": "tsc",
            "test": "vitest run",
            "dev": "vitest",
            "ci": "npm run build && npm run test",
            "format": "prettier --write .",
            "check-format": "prettier --check .",
            "changeset": "changeset",
            "release": "changeset version",
            "prepublishOnly": "npm run ci"
        },
        "license": "MIT"
    })
}

/// Writes the pretty-printed package.json into the package root.
pub fn write_manifest(package_path: &Path, package_name: &str, config: &Config) -> Result<()> {
    let document = manifest(package_name, config);
    let mut content = serde_json::to_string_pretty(&document)
        .map_err(|e| Error::Config(format!("Failed to serialize package.json: {}", e)))?;
    content.push('\n');

    fs::write(package_path.join("package.json"), content)?;
    println!("Created package.json");
    Ok(())
}

/// Renders LICENSE, README, tsconfig and the publish workflow from the
/// configured template directory into the package root.
pub fn create_template_files(
    package_path: &Path,
    package_name: &str,
    config: &Config,
) -> Result<()> {
    let vars = template_vars(package_name, config);
    let templates_dir = &config.templates.package_templates;

    for (template_name, destination) in TEMPLATE_FILES {
        let template_path = templates_dir.join(template_name);
        debug!("Rendering template {}", template_path.display());
        let content = render_file(&template_path, &vars)?;
        fs::write(package_path.join(destination), content)?;
    }

    println!("Created template files");
    Ok(())
}

/// Writes the fixed TypeScript source stubs: an index re-export, one
/// utility function and its vitest test.
pub fn create_source_files(package_path: &Path) -> Result<()> {
    let src = package_path.join("src");

    fs::write(src.join("index.ts"), "export { add } from \"./utils.js\";\n")?;
    fs::write(
        src.join("utils.ts"),
        "export function add(a: number, b: number): number {\n  return a + b;\n}\n",
    )?;
    fs::write(
        src.join("utils.test.ts"),
        "import { add } from \"./utils.js\";\nimport { test, expect } from \"vitest\";\n\ntest(\"add\", () => {\n  expect(add(1, 2)).toBe(3);\n});\n",
    )?;

    println!("Created source files");
    Ok(())
}

/// Initializes a git repository in the package root and points `origin`
/// at the package's GitHub URL.
pub fn setup_git_repository(package_path: &Path, package_name: &str, config: &Config) -> Result<()> {
    execute_checked(
        "git",
        &["init"],
        &CommandOptions {
            cwd: Some(package_path),
            success_msg: Some("Initialized git repository"),
            ..Default::default()
        },
    )?;

    let remote_url = config.repository_url(package_name);
    execute_checked(
        "git",
        &["remote", "add", "origin", &remote_url],
        &CommandOptions {
            cwd: Some(package_path),
            success_msg: Some("Added remote origin"),
            ..Default::default()
        },
    )
}

/// Installs the development dependency set with npm.
pub fn install_dependencies(package_path: &Path) -> Result<()> {
    let mut args = vec!["install", "--save-dev"];
    args.extend(DEV_DEPENDENCIES);

    execute_checked(
        "npm",
        &args,
        &CommandOptions {
            cwd: Some(package_path),
            success_msg: Some("Dependencies installed"),
            ..Default::default()
        },
    )
}

/// Runs the formatter script. A failure here is downgraded to a warning;
/// this is the only pipeline stage whose failure does not abort the run.
pub fn format_code(package_path: &Path) {
    let outcome = execute(
        "npm",
        &["run", "format"],
        &CommandOptions {
            cwd: Some(package_path),
            success_msg: Some("Code formatted with Prettier"),
            error_msg: Some("Prettier formatting failed, but continuing..."),
            ..Default::default()
        },
    );

    if !outcome.succeeded {
        warn!("Formatter exited with code {}", outcome.exit_code);
    }
}

/// Runs the complete scaffolding pipeline for a new npm package.
///
/// # Arguments
/// * `package_name` - Requested package name, validated before any side effect
/// * `config` - Author identity and target paths
///
/// # Returns
/// * Path of the created package directory
pub fn create_package(package_name: &str, config: &Config) -> Result<PathBuf> {
    println!("\nCreating npm package: {}\n", package_name);

    let validated = validate_package_name(package_name)?;
    let package_path = config.paths.repositories_root.join(validated);

    create_directory_structure(&package_path)?;
    write_manifest(&package_path, validated, config)?;
    create_template_files(&package_path, validated, config)?;
    create_source_files(&package_path)?;

    setup_git_repository(&package_path, validated, config)?;
    install_dependencies(&package_path)?;
    format_code(&package_path);

    println!("\nSuccessfully created npm package '{}'!", validated);
    println!("\nLocation: {}", package_path.display());
    println!("\nNext steps:");
    println!("   1. cd {}", package_path.display());
    println!(
        "   2. gh repo create {}/{} --public --push",
        config.author.github_username, validated
    );
    println!("   3. Start coding in src/utils.ts");
    println!("   4. Run 'npm run dev' to start testing");

    Ok(package_path)
}
