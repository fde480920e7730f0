//! Small value generators consumed when building the placeholder map.

use std::borrow::Cow;

use rand::distr::Alphanumeric;
use rand::Rng;

/// Returns `len` random alphanumeric characters.
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Quotes a value so it survives as a single word in a shell script.
///
/// Values that cannot be quoted (they contain a NUL byte) are returned as is.
pub fn bash_escape(value: &str) -> String {
    shlex::try_quote(value)
        .unwrap_or(Cow::Borrowed(value))
        .into_owned()
}

/// Connection string for a local PostgreSQL database owned by `user`.
pub fn default_pg_dsn(user: &str, db_name: &str) -> String {
    format!("postgres://{user}@localhost:5432/{db_name}?sslmode=disable")
}

/// Name of the operating-system user running the generator.
pub fn current_user() -> String {
    whoami::username()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string() {
        let secret = random_string(16);
        assert_eq!(secret.len(), 16);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(secret, random_string(16));
    }

    #[test]
    fn test_default_pg_dsn() {
        assert_eq!(
            default_pg_dsn("alice", "myapp-test"),
            "postgres://alice@localhost:5432/myapp-test?sslmode=disable"
        );
    }

    #[test]
    fn test_bash_escape_quotes_special_characters() {
        let escaped = bash_escape("postgres://alice@localhost:5432/myapp?sslmode=disable");
        assert!(escaped.starts_with('\'') || escaped.starts_with('"'));
        assert_eq!(
            shlex::split(&escaped).unwrap(),
            vec!["postgres://alice@localhost:5432/myapp?sslmode=disable".to_string()]
        );
        assert_eq!(bash_escape("plain"), "plain");
    }
}
