//! Project path resolution.
//! Turns a path relative to one of the candidate roots into an absolute
//! target directory and the identifiers derived from it.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::constants::{ROOTS_SEPARATOR, SOURCE_DIR, TEST_DB_SUFFIX};
use crate::error::{Error, Result};

/// Everything derived from the requested project path.
///
/// Built once by [`resolve_project`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    /// Root the project lives under.
    pub root_path: PathBuf,
    /// Requested path with surrounding separators trimmed.
    pub relative_path: String,
    /// `<root>/src/<relative_path>`.
    pub target_path: PathBuf,
    pub repo_name: String,
    pub repo_owner: String,
    pub project_name: String,
    pub db_name: String,
    pub test_db_name: String,
}

/// Splits the raw roots value into candidate roots, dropping empty entries.
pub fn parse_roots(raw: &str) -> Vec<PathBuf> {
    raw.split(ROOTS_SEPARATOR)
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Picks the root to generate under.
///
/// The explicit selection wins only when it matches a candidate exactly;
/// otherwise the first candidate is used.
///
/// # Errors
/// * `Error::ConfigError` if there are no candidates
pub fn select_root<'a>(roots: &'a [PathBuf], selected: Option<&str>) -> Result<&'a Path> {
    let first = roots.first().ok_or_else(|| {
        Error::ConfigError("no candidate root paths were provided".to_string())
    })?;

    let chosen = match selected.filter(|s| !s.is_empty()) {
        Some(selected) => roots
            .iter()
            .find(|root| root.as_os_str() == selected)
            .unwrap_or(first),
        None => first,
    };

    Ok(chosen.as_path())
}

/// Resolves the target directory and derived names for a new project.
///
/// # Arguments
/// * `roots` - Candidate roots, in priority order
/// * `selected` - Optional explicit root selection
/// * `raw_path` - Project path relative to `<root>/src`
///
/// # Errors
/// * `Error::ConfigError` if there are no candidate roots
/// * `Error::PathFormatError` if the path has fewer than three segments
pub fn resolve_project(
    roots: &[PathBuf],
    selected: Option<&str>,
    raw_path: &str,
) -> Result<ProjectSpec> {
    let root = select_root(roots, selected)?;
    let relative_path = raw_path.trim_matches('/');

    let segments: Vec<&str> = relative_path.split('/').collect();
    let [.., repo_name, repo_owner, project_name] = segments.as_slice() else {
        return Err(Error::PathFormatError {
            path: raw_path.to_string(),
            segments: segments.iter().filter(|s| !s.is_empty()).count(),
        });
    };

    let target_path = root.join(SOURCE_DIR).join(relative_path);
    debug!("Resolved target path '{}'", target_path.display());

    Ok(ProjectSpec {
        root_path: root.to_path_buf(),
        relative_path: relative_path.to_string(),
        target_path,
        repo_name: repo_name.to_string(),
        repo_owner: repo_owner.to_string(),
        project_name: project_name.to_string(),
        db_name: project_name.to_string(),
        test_db_name: format!("{project_name}{TEST_DB_SUFFIX}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roots_skips_empty_entries() {
        assert_eq!(
            parse_roots("/a::/b:"),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert!(parse_roots("").is_empty());
    }

    #[test]
    fn test_segment_count_in_error() {
        let roots = vec![PathBuf::from("/go")];
        match resolve_project(&roots, None, "/alice/myapp/") {
            Err(Error::PathFormatError { segments, .. }) => assert_eq!(segments, 2),
            other => panic!("Expected PathFormatError, got {other:?}"),
        }
    }
}
