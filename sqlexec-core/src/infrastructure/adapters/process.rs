// sqlexec-core/src/infrastructure/adapters/process.rs

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use crate::error::SqlexecError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::runner::{Invocation, ProcessRunner};

/// Spawns the client as a real child process (stdio inherited) and awaits its exit.
///
/// The child is killed if the returned future is dropped before it exits,
/// which is how callers put a deadline on a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(invocation.program());
        apply_arguments(&mut cmd, invocation);
        cmd.kill_on_drop(true);
        cmd
    }
}

// Windows receives the joined line untouched, like any native launcher would.
#[cfg(windows)]
fn apply_arguments(cmd: &mut Command, invocation: &Invocation) {
    cmd.raw_arg(invocation.arguments_line());
}

// Elsewhere there is no raw command line, so rebuild the argv the client would have parsed.
#[cfg(not(windows))]
fn apply_arguments(cmd: &mut Command, invocation: &Invocation) {
    cmd.args(crate::domain::command_line::split(
        &invocation.arguments_line(),
    ));
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<i32, SqlexecError> {
        let program = invocation.program().display().to_string();

        let mut child = Self::command(invocation).spawn().map_err(|source| {
            error!(program = %program, "❌ Launch failed: {}", source);
            InfrastructureError::Launch {
                program: program.clone(),
                source,
            }
        })?;

        debug!(pid = ?child.id(), "Child process started");

        let status = child.wait().await.map_err(InfrastructureError::Io)?;

        status
            .code()
            .ok_or_else(|| InfrastructureError::Terminated(program).into())
    }
}
