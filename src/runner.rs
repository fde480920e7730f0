//! External process execution.
//! Pipeline steps go through the [`CommandRunner`] trait so tests can swap
//! in a fake that never spawns anything.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::pipeline::PipelineStep;

/// How often a running child is polled when a timeout is set.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long output is still awaited after a timed-out step was killed.
const DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Outcome of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Exit code (None if killed by a signal or timed out).
    pub code: Option<i32>,
    /// Whether the process was killed for exceeding the timeout.
    pub timed_out: bool,
    /// Standard output and standard error, interleaved in write order.
    pub output: String,
}

impl CommandOutput {
    pub fn success<S: Into<String>>(output: S) -> Self {
        Self {
            success: true,
            code: Some(0),
            timed_out: false,
            output: output.into(),
        }
    }

    pub fn failure<S: Into<String>>(code: Option<i32>, output: S) -> Self {
        Self {
            success: false,
            code,
            timed_out: false,
            output: output.into(),
        }
    }

    /// Human-readable reason for an unsuccessful outcome.
    pub fn failure_reason(&self) -> String {
        if self.timed_out {
            "timed out".to_string()
        } else {
            match self.code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            }
        }
    }
}

/// Runs pipeline steps as external processes.
pub trait CommandRunner {
    /// Runs `step` to completion.
    ///
    /// # Errors
    /// Returns an IO error if the process could not be spawned or waited
    /// on. A process that ran and failed is an `Ok` with `success == false`.
    fn run(&self, step: &PipelineStep) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn wait(&self, child: &mut Child) -> io::Result<(Option<ExitStatus>, bool)> {
        let Some(timeout) = self.timeout else {
            return child.wait().map(|status| (Some(status), false));
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok((Some(status), false));
            }
            if Instant::now() >= deadline {
                kill_step(child)?;
                child.wait()?;
                return Ok((None, true));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Kills the step together with every process it started.
///
/// Steps run in their own process group, so the whole group is signalled.
/// Falls back to the direct child when the group is already gone.
fn kill_step(child: &mut Child) -> io::Result<()> {
    #[cfg(unix)]
    {
        let pgid = child.id() as libc::pid_t;
        // SAFETY: killpg only sends a signal; the group id is the child's own pid.
        if unsafe { libc::killpg(pgid, libc::SIGKILL) } == 0 {
            return Ok(());
        }
    }
    child.kill()
}

/// Reads the shared output pipe to the end on a separate thread.
fn drain(mut pipe: io::PipeReader) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buffer) {
            debug!("Reading step output failed after {} bytes: {}", buffer.len(), e);
        }
        let _ = tx.send(buffer);
    });
    rx
}

impl CommandRunner for SystemRunner {
    fn run(&self, step: &PipelineStep) -> io::Result<CommandOutput> {
        debug!(
            "Spawning '{}' in '{}'",
            step.command_line(),
            step.working_dir.display()
        );

        // Both streams share one pipe so their lines stay in write order.
        let (reader, writer) = io::pipe()?;
        let mut command = Command::new(&step.command);
        command
            .args(&step.args)
            .current_dir(&step.working_dir)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = command.spawn()?;
        // Release our copies of the write end so the reader sees EOF.
        drop(command);
        let captured = drain(reader);

        let (status, timed_out) = self.wait(&mut child)?;

        let combined = if timed_out {
            captured.recv_timeout(DRAIN_GRACE).unwrap_or_else(|_| {
                debug!("Output of '{}' still open after kill, dropping it", step.name);
                Vec::new()
            })
        } else {
            captured.recv().unwrap_or_default()
        };
        let output = String::from_utf8_lossy(&combined).into_owned();

        Ok(match status {
            Some(status) if status.success() => CommandOutput::success(output),
            Some(status) => CommandOutput::failure(status.code(), output),
            None => CommandOutput {
                success: false,
                code: None,
                timed_out,
                output,
            },
        })
    }
}
