// sqlexec/src/commands/mod.rs

pub mod file;
pub mod profiles;
pub mod query;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sqlexec_core::infrastructure::adapters::DryRunRunner;
use sqlexec_core::infrastructure::config::profiles::ENV_PASSWORD;
use sqlexec_core::infrastructure::config::{ProfilesFile, find_profiles_file, load_profiles};
use sqlexec_core::{CommandInvoker, ConnectionProfile, SqlexecError};

use crate::cli::ConnectionArgs;

/// Exit status when the invoker fails before or while launching the client.
pub const FAILURE_EXIT_CODE: i32 = 1;
/// Exit status when `--timeout-secs` expires (same as coreutils `timeout`).
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Flags win over the profiles file as soon as `--server` is present.
pub fn resolve_profile(args: &ConnectionArgs) -> Result<ConnectionProfile, SqlexecError> {
    resolve_profile_with(args, |key| std::env::var(key).ok())
}

/// Same as [`resolve_profile`] with an explicit variable lookup.
pub fn resolve_profile_with<F>(
    args: &ConnectionArgs,
    lookup: F,
) -> Result<ConnectionProfile, SqlexecError>
where
    F: Fn(&str) -> Option<String>,
{
    let profile = match &args.server {
        Some(server) => {
            // $SQLEXEC_PASSWORD only completes a login, never turns -E into one.
            let password = match &args.user {
                Some(_) => args.password.clone().or_else(|| lookup(ENV_PASSWORD)),
                None => args.password.clone(),
            };
            ConnectionProfile::new(
                args.executable.clone(),
                server.clone(),
                args.user.clone(),
                password,
            )?
        }
        None => load_profiles_file(args)?.resolve_with(args.target.as_deref(), &lookup)?,
    };

    match &args.default_database {
        Some(db) => Ok(profile.with_default_database(db.clone())?),
        None => Ok(profile),
    }
}

pub fn load_profiles_file(args: &ConnectionArgs) -> Result<ProfilesFile, SqlexecError> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => find_profiles_file(Path::new("."))?,
    };
    Ok(load_profiles(&path)?)
}

pub fn build_invoker(args: &ConnectionArgs) -> Result<CommandInvoker, SqlexecError> {
    let invoker = CommandInvoker::new(resolve_profile(args)?);
    if args.dry_run {
        return Ok(invoker.with_runner(Arc::new(DryRunRunner::stdout())));
    }
    Ok(invoker)
}

/// Prints a core failure with its diagnostic code and help.
pub fn report(err: SqlexecError) -> i32 {
    eprintln!("{:?}", miette::Report::new(err));
    FAILURE_EXIT_CODE
}

/// Awaits a run and turns its outcome into the exit status of `sqlexec`.
///
/// On timeout the run future is dropped, which kills the child.
pub async fn wait_for_exit<F>(run: F, timeout_secs: Option<u64>) -> i32
where
    F: Future<Output = Result<i32, SqlexecError>>,
{
    let outcome = match timeout_secs {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), run).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(timeout_secs = secs, "Client killed after timeout");
                eprintln!("⏱️  Timed out after {}s, client killed.", secs);
                return TIMEOUT_EXIT_CODE;
            }
        },
        None => run.await,
    };

    match outcome {
        Ok(code) => code,
        Err(e) => report(e),
    }
}
