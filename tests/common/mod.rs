#![allow(dead_code)]

use std::cell::RefCell;
use std::io;

use bootstrapper::pipeline::PipelineStep;
use bootstrapper::runner::{CommandOutput, CommandRunner};

/// Records every step it is asked to run and fails the ones it is told to.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<PipelineStep>>,
    failing: Vec<String>,
    unspawnable: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps whose command line equals `name` exit with status 1.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    /// Steps whose command line equals `name` cannot be spawned.
    pub fn unspawnable(mut self, name: &str) -> Self {
        self.unspawnable.push(name.to_string());
        self
    }

    pub fn names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|s| s.name.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, step: &PipelineStep) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(step.clone());
        if self.unspawnable.contains(&step.name) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "command not found"));
        }
        if self.failing.contains(&step.name) {
            return Ok(CommandOutput::failure(Some(1), format!("{} blew up", step.name)));
        }
        Ok(CommandOutput::success(format!("{} ok", step.name)))
    }
}
