//! Placeholder token table.
//!
//! The blank template contains literal tokens such as
//! `$GO_BOOTSTRAP_PROJECT_NAME`. A [`PlaceholderMap`] pairs every token with
//! its concrete value for one run. Substitution happens in a single pass, so
//! no value may contain a token.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::tokens;
use crate::error::{Error, Result};
use crate::helpers::{bash_escape, default_pg_dsn};
use crate::resolver::ProjectSpec;

/// Ordered token to value mapping with unique, non-empty tokens.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaceholderMap {
    entries: IndexMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token.
    ///
    /// # Errors
    /// * `Error::PlaceholderError` if the token is empty or already present
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, token: K, value: V) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::PlaceholderError("empty token".to_string()));
        }
        if self.entries.contains_key(&token) {
            return Err(Error::PlaceholderError(format!("duplicate token '{token}'")));
        }
        self.entries.insert(token, value.into());
        Ok(())
    }

    /// Checks that no value equals or contains any token.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in &self.entries {
            if let Some(token) = self.entries.keys().find(|token| value.contains(token.as_str())) {
                return Err(Error::PlaceholderError(format!(
                    "value of '{key}' contains token '{token}'"
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the full token table the blank template expects.
///
/// # Arguments
/// * `project` - Resolved project
/// * `cookie_secret` - Freshly generated secret
/// * `current_user` - Operating-system user, also used as the database user
///
/// # Errors
/// * `Error::PlaceholderError` if a derived value would contain a token
pub fn build_placeholders(
    project: &ProjectSpec,
    cookie_secret: &str,
    current_user: &str,
) -> Result<PlaceholderMap> {
    let pg_dsn = default_pg_dsn(current_user, &project.db_name);
    let pg_test_dsn = default_pg_dsn(current_user, &project.test_db_name);

    let mut map = PlaceholderMap::new();
    map.insert(tokens::REPO_NAME, project.repo_name.as_str())?;
    map.insert(tokens::REPO_USER, project.repo_owner.as_str())?;
    map.insert(tokens::PROJECT_NAME, project.project_name.as_str())?;
    map.insert(tokens::COOKIE_SECRET, cookie_secret)?;
    map.insert(tokens::CURRENT_USER, current_user)?;
    map.insert(tokens::ESCAPED_PG_DSN, bash_escape(&pg_dsn))?;
    map.insert(tokens::ESCAPED_PG_TEST_DSN, bash_escape(&pg_test_dsn))?;
    map.insert(tokens::PG_DSN, pg_dsn)?;
    map.insert(tokens::PG_TEST_DSN, pg_test_dsn)?;
    map.validate()?;

    Ok(map)
}
