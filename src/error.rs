//! Error handling for bootstrapper.
//! Defines the error taxonomy shared by every stage of a generation run.

use std::io;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is unrecoverable locally: the run stops and the process
/// exits with a non-zero status. Failures of tolerated pipeline steps are
/// not represented here, see [`crate::pipeline::ProcessWarning`].
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid command-line input or environment.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The target directory already has content and an empty one was required.
    #[error("Output directory '{output_dir}' is not empty.")]
    OutputDirectoryNotEmpty { output_dir: String },

    /// The relative project path has fewer than three segments.
    #[error("Invalid project path '{path}': expected at least 3 segments (repo/owner/project), got {segments}.")]
    PathFormatError { path: String, segments: usize },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Copying a single template entry into the target failed.
    #[error("Failed to copy '{path}': {source}.")]
    CopyError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The blank template tree could not be found under any root.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateNotFound { template_dir: String },

    /// A file in the materialized tree could not be read or written back.
    #[error("Failed to substitute placeholders in '{path}': {source}.")]
    SubstitutionError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The placeholder map breaks the single-pass invariant.
    #[error("Placeholder error: {0}.")]
    PlaceholderError(String),

    /// A fatal pipeline step failed.
    #[error("Step '{step}' failed: {reason}.\n{output}")]
    ProcessError { step: String, reason: String, output: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
