// sqlexec-core/src/infrastructure/adapters/dry_run.rs

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

use crate::error::SqlexecError;
use crate::ports::runner::{Invocation, ProcessRunner};

/// Prints the redacted command line instead of launching anything, then reports success.
pub struct DryRunRunner<W: Write + Send> {
    out: Mutex<W>,
}

impl DryRunRunner<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> DryRunRunner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> ProcessRunner for DryRunRunner<W> {
    async fn run(&self, invocation: &Invocation) -> Result<i32, SqlexecError> {
        let line = invocation.redacted_command_line();
        tracing::debug!("Dry run, not launching: {}", line);

        let mut out = self
            .out
            .lock()
            .map_err(|_| std::io::Error::other("Dry-run writer poisoned"))?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(0)
    }
}
