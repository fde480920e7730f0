#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bootstrapper() -> Command {
    let mut cmd = Command::new(cargo_bin("bootstrapper"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_dir_exits_non_zero() {
    bootstrapper()
        .env("GOPATH", "/go")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--dir"))
        .stderr(predicate::str::contains("dir option is missing"));
}

#[test]
fn test_missing_gopath() {
    bootstrapper()
        .env_remove("GOPATH")
        .args(["--dir", "github.com/alice/myapp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_short_path() {
    bootstrapper()
        .env("GOPATH", "/go")
        .args(["--dir", "alice/myapp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 segments"));
}

#[test]
fn test_missing_template() {
    let root = TempDir::new().unwrap();
    bootstrapper()
        .env("GOPATH", root.path())
        .args(["--dir", "github.com/alice/myapp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_dry_run() {
    bootstrapper()
        .env("GOPATH", "/a:/b")
        .args(["--dir", "/github.com/alice/myapp/", "--gopath", "/b", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target_path\": \"/b/src/github.com/alice/myapp\""))
        .stdout(predicate::str::contains("\"test_db_name\": \"myapp-test\""))
        .stdout(predicate::str::contains("git init"));
}
