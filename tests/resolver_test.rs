use std::path::PathBuf;

use bootstrapper::error::Error;
use bootstrapper::resolver::{resolve_project, select_root};

fn roots(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn test_select_root() {
    let candidates = roots(&["/a", "/b"]);

    assert_eq!(select_root(&candidates, Some("/b")).unwrap(), PathBuf::from("/b"));
    assert_eq!(select_root(&candidates, Some("")).unwrap(), PathBuf::from("/a"));
    assert_eq!(select_root(&candidates, Some("/c")).unwrap(), PathBuf::from("/a"));
    assert_eq!(select_root(&candidates, None).unwrap(), PathBuf::from("/a"));
}

#[test]
fn test_select_root_without_candidates() {
    match select_root(&[], Some("/a")) {
        Err(Error::ConfigError(_)) => (),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_resolve_project() {
    let project = resolve_project(&roots(&["/go"]), None, "github.com/alice/myapp").unwrap();

    assert_eq!(project.root_path, PathBuf::from("/go"));
    assert_eq!(project.relative_path, "github.com/alice/myapp");
    assert_eq!(project.target_path, PathBuf::from("/go/src/github.com/alice/myapp"));
    assert_eq!(project.repo_name, "github.com");
    assert_eq!(project.repo_owner, "alice");
    assert_eq!(project.project_name, "myapp");
    assert_eq!(project.db_name, "myapp");
    assert_eq!(project.test_db_name, "myapp-test");
}

#[test]
fn test_surrounding_slashes_are_trimmed() {
    for raw in ["/github.com/alice/myapp", "github.com/alice/myapp/", "//github.com/alice/myapp//"] {
        let project = resolve_project(&roots(&["/go"]), None, raw).unwrap();
        assert_eq!(project.relative_path, "github.com/alice/myapp");
        assert_eq!(project.target_path, PathBuf::from("/go/src/github.com/alice/myapp"));
        assert_eq!(
            (project.repo_name.as_str(), project.repo_owner.as_str(), project.project_name.as_str()),
            ("github.com", "alice", "myapp")
        );
    }
}

#[test]
fn test_last_three_segments_are_used() {
    let project =
        resolve_project(&roots(&["/go"]), None, "corp/git.example.com/team/service").unwrap();

    assert_eq!(project.repo_name, "git.example.com");
    assert_eq!(project.repo_owner, "team");
    assert_eq!(project.project_name, "service");
    assert_eq!(project.target_path, PathBuf::from("/go/src/corp/git.example.com/team/service"));
}

#[test]
fn test_selected_root_is_used_for_target() {
    let project =
        resolve_project(&roots(&["/a", "/b"]), Some("/b"), "bitbucket.org/bob/api").unwrap();
    assert_eq!(project.target_path, PathBuf::from("/b/src/bitbucket.org/bob/api"));
}

#[test]
fn test_short_paths_fail() {
    for raw in ["", "/", "myapp", "alice/myapp", "/alice/myapp/"] {
        match resolve_project(&roots(&["/go"]), None, raw) {
            Err(Error::PathFormatError { path, .. }) => assert_eq!(path, raw),
            other => panic!("Expected PathFormatError for '{raw}', got {other:?}"),
        }
    }
}
