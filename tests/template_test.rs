use chrono::Datelike;
use tempfile::TempDir;

use tws_cli::config::Config;
use tws_cli::error::Error;
use tws_cli::template::{render_file, render_str, template_vars, TemplateVars};

fn vars(entries: &[(&'static str, &str)]) -> TemplateVars {
    entries.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[test]
fn test_render_replaces_every_occurrence() {
    let rendered =
        render_str("{{NAME}} and {{NAME}} are both {{NAME}}", &vars(&[("NAME", "awesome")]));
    assert_eq!(rendered, "awesome and awesome are both awesome");
}

#[test]
fn test_unmatched_placeholders_pass_through() {
    let rendered = render_str("hello {{UNKNOWN}}", &vars(&[("NAME", "world")]));
    assert_eq!(rendered, "hello {{UNKNOWN}}");
}

#[test]
fn test_render_without_placeholders_is_identity() {
    let content = "no placeholders in here, not even { braces } that matter";
    assert_eq!(render_str(content, &vars(&[("NAME", "x")])), content);
}

#[test]
fn test_substitution_is_case_sensitive() {
    let rendered = render_str("{{name}} vs {{NAME}}", &vars(&[("NAME", "x")]));
    assert_eq!(rendered, "{{name}} vs x");
}

#[test]
fn test_render_file_substitutes_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("greeting.txt");
    std::fs::write(&template_path, "Hi {{NAME}}!").unwrap();

    let rendered = render_file(&template_path, &vars(&[("NAME", "there")])).unwrap();
    assert_eq!(rendered, "Hi there!");
}

#[test]
fn test_render_file_missing_template() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.txt");

    match render_file(&missing, &vars(&[])) {
        Err(Error::TemplateNotFound { path }) => {
            assert!(path.ends_with("nope.txt"));
        }
        other => panic!("Expected TemplateNotFound, got {:?}", other),
    }
}

#[test]
fn test_template_vars_mapping() {
    let config = Config::default();
    let vars = template_vars("my-pkg", &config);

    assert_eq!(vars["PACKAGE_NAME"], "my-pkg");
    assert_eq!(vars["AUTHOR_NAME"], config.author.name);
    assert_eq!(vars["AUTHOR_EMAIL"], config.author.email);
    assert_eq!(vars["AUTHOR_WEBSITE"], config.author.website);
    assert_eq!(vars["GITHUB_USERNAME"], config.author.github_username);

    let year = &vars["YEAR"];
    assert_eq!(year.len(), 4);
    assert_eq!(year, &chrono::Local::now().year().to_string());
}
