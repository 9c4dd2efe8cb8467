// sqlexec-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- PROCESS ---
    #[error("Failed to launch '{program}': {source}")]
    #[diagnostic(
        code(sqlexec::infra::launch),
        help("Check that the client executable is installed and on the PATH.")
    )]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' terminated without an exit code (killed by a signal?)")]
    #[diagnostic(code(sqlexec::infra::terminated))]
    Terminated(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sqlexec::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sqlexec::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid profile '{target}': {source}")]
    #[diagnostic(code(sqlexec::infra::validation))]
    Validation {
        target: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Profiles file not found: {0}")]
    #[diagnostic(
        code(sqlexec::infra::config_missing),
        help("Create sqlexec.yaml in the working directory or pass --config.")
    )]
    ConfigNotFound(String),

    #[error("Target '{0}' is not defined in the profiles file")]
    #[diagnostic(code(sqlexec::infra::target_not_found))]
    TargetNotFound(String),
}
