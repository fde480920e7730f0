//! Command-line interface implementation for bootstrapper.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for bootstrapper.
#[derive(Parser, Debug)]
#[command(author, version, about = "bootstrapper: generate a runnable web project from a blank template", long_about = None)]
pub struct Args {
    /// Project directory relative to $GOPATH/src/, e.g. github.com/alice/myapp
    #[arg(long, value_name = "DIR")]
    pub dir: String,

    /// Choose which $GOPATH entry to use
    #[arg(long, value_name = "ROOT")]
    pub gopath: Option<String>,

    /// Use this blank template directory instead of the one under $GOPATH
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Kill any external step that runs longer than this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub step_timeout: Option<u64>,

    /// Refuse to generate into an existing non-empty directory
    #[arg(long)]
    pub require_empty: bool,

    /// Print the resolved project and planned steps without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let help = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(e) = help {
                    eprintln!("Failed to print help: {e}");
                }
                eprintln!("\ndir option is missing.");
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
