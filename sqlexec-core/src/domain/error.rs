// sqlexec-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required argument: '{0}'")]
    #[diagnostic(
        code(sqlexec::domain::missing_argument),
        help("The value must be present and non-empty.")
    )]
    MissingArgument(&'static str),

    #[error("Incomplete credentials: user id and password must be supplied together")]
    #[diagnostic(
        code(sqlexec::domain::credentials),
        help("Provide both a user id and a password, or neither to use integrated authentication (-E).")
    )]
    IncompleteCredentials,
}
