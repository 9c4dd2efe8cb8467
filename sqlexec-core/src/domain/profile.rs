// sqlexec-core/src/domain/profile.rs

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// How the client authenticates against the server.
#[derive(Clone, PartialEq, Eq)]
pub enum Authentication {
    /// Trusted connection using the identity of the process owner (`-E`).
    Integrated,
    /// Explicit SQL login (`-U <user_id> -P <password>`).
    SqlLogin { user_id: String, password: String },
}

// The password never reaches logs through `{:?}`.
impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authentication::Integrated => f.write_str("Integrated"),
            Authentication::SqlLogin { user_id, .. } => f
                .debug_struct("SqlLogin")
                .field("user_id", user_id)
                .field("password", &"****")
                .finish(),
        }
    }
}

/// Immutable set of parameters identifying how to reach the target server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    executable: PathBuf,
    server: String,
    authentication: Authentication,
    default_database: Option<String>,
}

impl ConnectionProfile {
    /// Profile using integrated authentication.
    pub fn integrated(
        executable: impl Into<PathBuf>,
        server: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(executable, server, None, None)
    }

    /// Profile using an explicit SQL login.
    pub fn with_credentials(
        executable: impl Into<PathBuf>,
        server: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            executable,
            server,
            Some(user_id.into()),
            Some(password.into()),
        )
    }

    /// Generic constructor. `user_id` and `password` must be both present or both absent.
    pub fn new(
        executable: impl Into<PathBuf>,
        server: impl Into<String>,
        user_id: Option<String>,
        password: Option<String>,
    ) -> Result<Self, DomainError> {
        let executable = executable.into();
        if executable.as_os_str().is_empty() {
            return Err(DomainError::MissingArgument("executable"));
        }

        let server = server.into();
        if server.is_empty() {
            return Err(DomainError::MissingArgument("server"));
        }

        let authentication = match (user_id, password) {
            (None, None) => Authentication::Integrated,
            (Some(user_id), Some(password)) => {
                if user_id.is_empty() {
                    return Err(DomainError::MissingArgument("user_id"));
                }
                if password.is_empty() {
                    return Err(DomainError::MissingArgument("password"));
                }
                Authentication::SqlLogin { user_id, password }
            }
            _ => return Err(DomainError::IncompleteCredentials),
        };

        Ok(Self {
            executable,
            server,
            authentication,
            default_database: None,
        })
    }

    /// Database used when a call does not name one.
    pub fn with_default_database(mut self, database: impl Into<String>) -> Result<Self, DomainError> {
        let database = database.into();
        if database.is_empty() {
            return Err(DomainError::MissingArgument("default_database"));
        }
        self.default_database = Some(database);
        Ok(self)
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn authentication(&self) -> &Authentication {
        &self.authentication
    }

    pub fn default_database(&self) -> Option<&str> {
        self.default_database.as_deref()
    }

    /// Explicit database wins over the profile default.
    pub fn resolve_database<'a>(
        &'a self,
        database: Option<&'a str>,
    ) -> Result<Option<&'a str>, DomainError> {
        match database {
            Some("") => Err(DomainError::MissingArgument("database")),
            Some(name) => Ok(Some(name)),
            None => Ok(self.default_database()),
        }
    }
}
