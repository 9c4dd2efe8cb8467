// sqlexec-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SqlexecError {
    // --- DOMAIN ERRORS (input validation, before any process exists) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (process launch, config files) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl SqlexecError {
    /// True when the failure happened before anything was spawned.
    pub fn is_validation(&self) -> bool {
        matches!(self, SqlexecError::Domain(_))
    }
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for SqlexecError {
    fn from(err: std::io::Error) -> Self {
        SqlexecError::Infrastructure(InfrastructureError::Io(err))
    }
}
