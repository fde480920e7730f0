//! Generation run orchestration.
//! Chains path resolution, template copy, placeholder substitution and the
//! external pipeline for one project.

use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::constants::COOKIE_SECRET_LEN;
use crate::error::Result;
use crate::helpers::{current_user, random_string};
use crate::materializer::{copy_tree, create_target_dir, ensure_empty_target};
use crate::pipeline::{plan_steps, run_pipeline, PipelineReport, PipelineStep, RepoVariant};
use crate::placeholders::build_placeholders;
use crate::resolver::{resolve_project, ProjectSpec};
use crate::runner::CommandRunner;
use crate::substitutor::substitute_tree;

/// Everything a run will do, computed without side effects.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub project: ProjectSpec,
    pub template_dir: PathBuf,
    pub variant: RepoVariant,
    pub steps: Vec<PipelineStep>,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub plan: Plan,
    pub files_copied: usize,
    pub files_substituted: usize,
    pub pipeline: PipelineReport,
}

/// Drives one generation run.
pub struct Generator<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    current_user: String,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            current_user: current_user(),
        }
    }

    /// Overrides the user name written into the project.
    pub fn with_current_user<S: Into<String>>(mut self, user: S) -> Self {
        self.current_user = user.into();
        self
    }

    /// Resolves the project and the steps that would run for it.
    pub fn plan(&self) -> Result<Plan> {
        let project = resolve_project(
            &self.config.roots,
            self.config.selected_root.as_deref(),
            &self.config.dir,
        )?;
        let template_dir = self.config.template_dir(&project.root_path);
        let variant = RepoVariant::classify(&project.repo_name);
        let steps = plan_steps(&project.target_path, variant);

        Ok(Plan {
            project,
            template_dir,
            variant,
            steps,
        })
    }

    /// Generates the project and runs the pipeline.
    pub fn run(&self) -> Result<RunReport> {
        let plan = self.plan()?;
        let project = &plan.project;
        let target = &project.target_path;

        if self.config.require_empty {
            ensure_empty_target(target)?;
        }

        info!("Creating {}...", target.display());
        create_target_dir(target)?;

        info!("Copying a blank project to {}...", target.display());
        let files_copied = copy_tree(&plan.template_dir, target)?;

        info!(
            "Replacing placeholder variables on {}/{}...",
            project.repo_owner, project.project_name
        );
        let placeholders = build_placeholders(
            project,
            &random_string(COOKIE_SECRET_LEN),
            &self.current_user,
        )?;
        let files_substituted = substitute_tree(target, &placeholders)?;

        let pipeline = run_pipeline(self.runner, &plan.steps)?;

        Ok(RunReport {
            plan,
            files_copied,
            files_substituted,
            pipeline,
        })
    }
}
