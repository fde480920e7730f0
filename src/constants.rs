//! Common constants used throughout bootstrapper.

/// Environment variable holding the colon-separated candidate roots.
pub const ROOTS_ENV: &str = "GOPATH";

/// Separator between candidate roots.
pub const ROOTS_SEPARATOR: char = ':';

/// Directory under each root where project sources live.
pub const SOURCE_DIR: &str = "src";

/// Location of the blank template relative to `<root>/src`.
pub const TEMPLATE_SUBPATH: &str = "github.com/go-bootstrap/go-bootstrap/blank";

/// Suffix appended to the project name to form the test database name.
pub const TEST_DB_SUFFIX: &str = "-test";

/// Length of the generated cookie secret.
pub const COOKIE_SECRET_LEN: usize = 16;

/// Placeholder tokens understood by the blank template.
pub mod tokens {
    pub const REPO_NAME: &str = "$GO_BOOTSTRAP_REPO_NAME";
    pub const REPO_USER: &str = "$GO_BOOTSTRAP_REPO_USER";
    pub const PROJECT_NAME: &str = "$GO_BOOTSTRAP_PROJECT_NAME";
    pub const COOKIE_SECRET: &str = "$GO_BOOTSTRAP_COOKIE_SECRET";
    pub const CURRENT_USER: &str = "$GO_BOOTSTRAP_CURRENT_USER";
    pub const PG_DSN: &str = "$GO_BOOTSTRAP_PG_DSN";
    pub const ESCAPED_PG_DSN: &str = "$GO_BOOTSTRAP_ESCAPED_PG_DSN";
    pub const PG_TEST_DSN: &str = "$GO_BOOTSTRAP_PG_TEST_DSN";
    pub const ESCAPED_PG_TEST_DSN: &str = "$GO_BOOTSTRAP_ESCAPED_PG_TEST_DSN";
}

/// External tools driven by the pipeline.
pub mod tools {
    pub const MIGRATE_PACKAGE: &str = "github.com/mattes/migrate";
    pub const SNAPSHOT_PACKAGE: &str = "github.com/tools/godep";
    pub const DB_BOOTSTRAP_SCRIPT: &str = "scripts/db-bootstrap";
}
