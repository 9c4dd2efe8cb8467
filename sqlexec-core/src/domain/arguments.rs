// sqlexec-core/src/domain/arguments.rs

use std::path::Path;

use crate::domain::command_line::{PASSWORD_FLAG, escape_query, quote};
use crate::domain::error::DomainError;
use crate::domain::profile::{Authentication, ConnectionProfile};
use crate::ports::arguments::ArgumentBuilder;

/// What the client should do once connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Literal query text (`-Q`).
    Query(&'a str),
    /// Script file read by the client itself (`-i`).
    File(&'a Path),
}

impl Action<'_> {
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Action::Query(text) if text.is_empty() => Err(DomainError::MissingArgument("query")),
            Action::File(path) if path.as_os_str().is_empty() => {
                Err(DomainError::MissingArgument("file"))
            }
            _ => Ok(()),
        }
    }
}

/// Argument layout of `sqlcmd`:
/// `-S <server> {-E | -U <user> -P <password>} [-d <database>] {-Q "<query>" | -i "<file>"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlcmdArguments;

impl ArgumentBuilder for SqlcmdArguments {
    fn build(
        &self,
        profile: &ConnectionProfile,
        database: Option<&str>,
        action: &Action<'_>,
    ) -> Vec<String> {
        let mut args = vec!["-S".to_string(), profile.server().to_string()];

        match profile.authentication() {
            Authentication::Integrated => args.push("-E".to_string()),
            Authentication::SqlLogin { user_id, password } => {
                args.push("-U".to_string());
                args.push(user_id.clone());
                args.push(PASSWORD_FLAG.to_string());
                args.push(password.clone());
            }
        }

        if let Some(database) = database {
            args.push("-d".to_string());
            args.push(database.to_string());
        }

        match action {
            Action::Query(text) => {
                args.push("-Q".to_string());
                args.push(quote(&escape_query(text)));
            }
            // No escaping for paths.
            Action::File(path) => {
                args.push("-i".to_string());
                args.push(quote(&path.display().to_string()));
            }
        }

        args
    }
}
