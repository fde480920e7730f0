//! Placeholder substitution over a materialized project tree.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::placeholders::PlaceholderMap;

/// Replaces every token occurrence in `content` in one left-to-right pass.
///
/// At each offset the longest matching token wins. Replacement output is
/// never scanned again. Content is treated as raw bytes.
///
/// Returns `Cow::Borrowed` when nothing matched.
pub fn substitute_bytes<'a>(content: &'a [u8], placeholders: &PlaceholderMap) -> Cow<'a, [u8]> {
    let tokens: Vec<(&[u8], &[u8])> = placeholders
        .iter()
        .map(|(token, value)| (token.as_bytes(), value.as_bytes()))
        .collect();

    let mut output: Option<Vec<u8>> = None;
    let mut copied_up_to = 0;
    let mut pos = 0;

    while pos < content.len() {
        let rest = &content[pos..];
        let matched = tokens
            .iter()
            .filter(|(token, _)| rest.starts_with(token))
            .max_by_key(|(token, _)| token.len());

        match matched {
            Some((token, value)) => {
                let buffer = output.get_or_insert_with(|| Vec::with_capacity(content.len()));
                buffer.extend_from_slice(&content[copied_up_to..pos]);
                buffer.extend_from_slice(value);
                pos += token.len();
                copied_up_to = pos;
            }
            None => pos += 1,
        }
    }

    match output {
        Some(mut buffer) => {
            buffer.extend_from_slice(&content[copied_up_to..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(content),
    }
}

/// Rewrites a single file in place. Returns whether the file changed.
pub fn substitute_file(path: &Path, placeholders: &PlaceholderMap) -> Result<bool> {
    let content = fs::read(path).map_err(|source| Error::SubstitutionError {
        path: path.display().to_string(),
        source,
    })?;

    match substitute_bytes(&content, placeholders) {
        Cow::Borrowed(_) => Ok(false),
        Cow::Owned(rewritten) => {
            fs::write(path, rewritten).map_err(|source| Error::SubstitutionError {
                path: path.display().to_string(),
                source,
            })?;
            Ok(true)
        }
    }
}

/// Substitutes placeholders in every regular file under `root`.
///
/// Directories and symbolic links are never rewritten themselves; links
/// are not followed. Returns the number of files that changed.
///
/// # Errors
/// * `Error::SubstitutionError` on the first file that cannot be read or written
pub fn substitute_tree<P: AsRef<Path>>(root: P, placeholders: &PlaceholderMap) -> Result<usize> {
    let root = root.as_ref();
    let mut changed = 0;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).display().to_string();
            Error::SubstitutionError { path, source: e.into() }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        if substitute_file(entry.path(), placeholders)? {
            debug!("Substituted placeholders in '{}'", entry.path().display());
            changed += 1;
        }
    }

    Ok(changed)
}
