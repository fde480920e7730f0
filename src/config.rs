//! Run configuration.
//! Combines parsed command-line arguments with the candidate roots taken
//! from the environment into one validated [`Config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::cli::Args;
use crate::constants::{SOURCE_DIR, TEMPLATE_SUBPATH};
use crate::error::{Error, Result};
use crate::resolver::parse_roots;

/// Validated settings for one generation run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Candidate roots in priority order, never empty.
    pub roots: Vec<PathBuf>,
    /// Explicitly requested root, if any.
    pub selected_root: Option<String>,
    /// Project path relative to `<root>/src`.
    pub dir: String,
    /// Blank template location overriding the lookup under the roots.
    pub template: Option<PathBuf>,
    pub step_timeout: Option<Duration>,
    pub require_empty: bool,
    pub dry_run: bool,
}

impl Config {
    /// Builds the configuration from parsed arguments and the raw roots
    /// value (the content of `$GOPATH`).
    ///
    /// # Errors
    /// * `Error::ConfigError` if the directory is empty or no root is set
    pub fn from_args(args: Args, roots_env: Option<&str>) -> Result<Self> {
        if args.dir.trim().is_empty() {
            return Err(Error::ConfigError("dir option is missing".to_string()));
        }

        let roots = parse_roots(roots_env.unwrap_or_default());
        if roots.is_empty() {
            return Err(Error::ConfigError("$GOPATH is not set".to_string()));
        }
        debug!("Candidate roots: {roots:?}");

        Ok(Self {
            roots,
            selected_root: args.gopath.filter(|g| !g.is_empty()),
            dir: args.dir,
            template: args.template,
            step_timeout: args.step_timeout.map(Duration::from_secs),
            require_empty: args.require_empty,
            dry_run: args.dry_run,
        })
    }

    /// Locates the blank template.
    ///
    /// An explicit override is returned as is. Otherwise the template is
    /// looked up under `root` first, then under the other candidates. When
    /// none exists the path under `root` is returned so the copy reports it.
    pub fn template_dir(&self, root: &Path) -> PathBuf {
        if let Some(template) = &self.template {
            return template.clone();
        }

        let under = |root: &Path| root.join(SOURCE_DIR).join(TEMPLATE_SUBPATH);
        std::iter::once(root)
            .chain(self.roots.iter().map(PathBuf::as_path).filter(|r| *r != root))
            .map(under)
            .find(|candidate| candidate.is_dir())
            .unwrap_or_else(|| under(root))
    }
}
