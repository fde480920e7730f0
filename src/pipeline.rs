//! Post-generation pipeline.
//!
//! After the project tree is in place a fixed sequence of external steps
//! fetches tools and dependencies, initializes version control and runs the
//! new project's tests. Each step is either fatal, in which case a failure
//! stops the run, or tolerated, in which case the failure is only reported.
//! Which optional steps exist depends on the [`RepoVariant`].

use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::constants::tools;
use crate::error::{Error, Result};
use crate::runner::CommandRunner;

/// Version-control family inferred from the repository host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RepoVariant {
    Git,
    Mercurial,
    None,
}

impl RepoVariant {
    /// `git*` is Git, `bitbucket*` is Mercurial, anything else is None.
    pub fn classify(repo_name: &str) -> Self {
        if repo_name.starts_with("git") {
            RepoVariant::Git
        } else if repo_name.starts_with("bitbucket") {
            RepoVariant::Mercurial
        } else {
            RepoVariant::None
        }
    }
}

/// What a failing step does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OnFailure {
    Fatal,
    Tolerated,
}

/// One external command in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    pub name: String,
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub on_failure: OnFailure,
}

impl PipelineStep {
    fn new(command: &str, args: &[&str], working_dir: &Path, on_failure: OnFailure) -> Self {
        let mut step = Self {
            name: String::new(),
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
            on_failure,
        };
        step.name = step.command_line();
        step
    }

    /// The command and its arguments joined by spaces.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds the ordered step list for a project.
pub fn plan_steps(target: &Path, variant: RepoVariant) -> Vec<PipelineStep> {
    use OnFailure::{Fatal, Tolerated};

    let mut steps = vec![
        PipelineStep::new("go", &["get", tools::MIGRATE_PACKAGE], target, Fatal),
        PipelineStep::new("bash", &[tools::DB_BOOTSTRAP_SCRIPT], target, Tolerated),
        PipelineStep::new("go", &["get", "./..."], target, Fatal),
    ];

    match variant {
        RepoVariant::Git | RepoVariant::Mercurial => {
            steps.push(PipelineStep::new(
                "go",
                &["get", tools::SNAPSHOT_PACKAGE],
                target,
                Fatal,
            ));
            steps.push(match variant {
                RepoVariant::Git => PipelineStep::new("git", &["init"], target, Fatal),
                _ => PipelineStep::new("hg", &["init"], target, Tolerated),
            });
            steps.push(PipelineStep::new("godep", &["save", "./..."], target, Fatal));
            steps.push(PipelineStep::new(
                "godep",
                &["go", "test", "./..."],
                target,
                Tolerated,
            ));
        }
        RepoVariant::None => {
            steps.push(PipelineStep::new("go", &["test", "./..."], target, Tolerated));
        }
    }

    steps
}

/// A tolerated step that failed. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessWarning {
    pub step: String,
    pub reason: String,
    pub output: String,
}

impl fmt::Display for ProcessWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step '{}' failed ({}), continuing", self.step, self.reason)
    }
}

/// Result of a pipeline that ran to the end.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Names of the steps that ran, in order.
    pub executed: Vec<String>,
    pub warnings: Vec<ProcessWarning>,
}

/// Runs `steps` strictly in order.
///
/// # Errors
/// * `Error::ProcessError` for the first fatal step that fails; no later
///   step runs
pub fn run_pipeline(runner: &dyn CommandRunner, steps: &[PipelineStep]) -> Result<PipelineReport> {
    let mut report = PipelineReport::default();

    for step in steps {
        info!("Running {}...", step.name);
        report.executed.push(step.name.clone());

        let (reason, output) = match runner.run(step) {
            Ok(outcome) if outcome.success => {
                if !outcome.output.is_empty() {
                    info!("{}", outcome.output);
                }
                continue;
            }
            Ok(outcome) => (outcome.failure_reason(), outcome.output),
            Err(e) => (e.to_string(), String::new()),
        };

        match step.on_failure {
            OnFailure::Fatal => {
                return Err(Error::ProcessError {
                    step: step.name.clone(),
                    reason,
                    output,
                });
            }
            OnFailure::Tolerated => {
                let warning = ProcessWarning {
                    step: step.name.clone(),
                    reason,
                    output,
                };
                warn!("{warning}");
                if !warning.output.is_empty() {
                    info!("{}", warning.output);
                }
                report.warnings.push(warning);
            }
        }
    }

    Ok(report)
}
