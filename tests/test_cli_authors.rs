use assert_cmd::Command;
use predicates::prelude::predicate;

#[test]
fn test_authors() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let description = option_env!("CARGO_PKG_DESCRIPTION")
        .unwrap_or("an abstract argumentation semantics engine");
    let authors = option_env!("CARGO_PKG_AUTHORS")
        .unwrap_or("unknown authors")
        .split(':')
        .map(|a| format!("  {}\n", a.trim()))
        .collect::<String>();
    let expected = format!(
        "{} {}\n{}\nauthors:\n{}",
        app_name, app_version, description, authors
    );
    let mut cmd = Command::cargo_bin("dungsem").unwrap();
    cmd.arg("authors");
    cmd.assert()
        .success()
        .stdout(predicate::eq(expected.as_str()));
}

#[test]
fn test_no_command() {
    let mut cmd = Command::cargo_bin("dungsem").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_unknown_command() {
    let mut cmd = Command::cargo_bin("dungsem").unwrap();
    cmd.arg("foo");
    cmd.assert().failure();
}
