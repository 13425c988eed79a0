use std::path::PathBuf;

use tws_cli::config::Config;

#[test]
fn test_default_configuration() {
    let config = Config::default();

    assert_eq!(config.author.name, "Seth Davis");
    assert_eq!(config.author.github_username, "sethdavis512");
    assert_eq!(config.paths.repositories_root, PathBuf::from("/Users/seth/repositories"));
    assert_eq!(
        config.templates.static_template,
        PathBuf::from("/Users/seth/repositories/tws-static")
    );
}

#[test]
fn test_repository_url() {
    let config = Config::default();
    assert_eq!(
        config.repository_url("my-pkg"),
        "https://github.com/sethdavis512/my-pkg.git"
    );
}
