// sqlexec-core/src/ports/runner.rs

// What the invoker needs from the operating system: start a program, wait for it,
// hand back its exit code. The tokio adapter does it for real, tests plug in fakes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::command_line;
use crate::error::SqlexecError;

/// One fully assembled call of the external client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub arguments: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, arguments: Vec<String>) -> Self {
        Self {
            program: program.into(),
            arguments,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments joined with single spaces, as passed to the launcher.
    pub fn arguments_line(&self) -> String {
        command_line::join(&self.arguments)
    }

    /// `<program> <arguments>`.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program.display(), self.arguments_line())
    }

    /// Command line safe for logs and terminals.
    pub fn redacted_command_line(&self) -> String {
        format!(
            "{} {}",
            self.program.display(),
            command_line::join_redacted(&self.arguments)
        )
    }
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Launches the program and waits for it to exit, returning the exit code verbatim.
    async fn run(&self, invocation: &Invocation) -> Result<i32, SqlexecError>;
}
