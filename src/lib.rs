//! bootstrapper generates a new web project from a blank template.
//! It resolves where the project goes, copies and fills in the template,
//! then drives the external tools that bring the project to a tested state.

/// Command-line interface module
pub mod cli;

/// Run configuration built from arguments and environment
pub mod config;

/// Fixed paths, placeholder tokens and tool names
pub mod constants;

/// Error types and handling
pub mod error;

/// Runs one generation end to end
pub mod generator;

/// Random secrets, shell escaping, DSN strings and the current user
pub mod helpers;

/// env_logger setup for the binary
pub mod logger;

/// Template tree copy with a scoped working directory
pub mod materializer;

/// Ordered external steps and their failure policy
pub mod pipeline;

/// Token to value table for the blank template
pub mod placeholders;

/// Target path and identifier derivation
pub mod resolver;

/// External process execution
pub mod runner;

/// Literal placeholder replacement across a project tree
pub mod substitutor;
