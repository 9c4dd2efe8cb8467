// sqlexec/src/commands/file.rs
//
// USE CASE: Run a script file through the client (-i).
// The path is handed over as-is; sqlcmd opens it.

use std::path::PathBuf;

use crate::cli::ConnectionArgs;

pub async fn execute(
    connection: &ConnectionArgs,
    path: PathBuf,
    database: Option<String>,
) -> anyhow::Result<i32> {
    let invoker = match super::build_invoker(connection) {
        Ok(invoker) => invoker,
        Err(e) => return Ok(super::report(e)),
    };
    let run = invoker.run_file(&path, database.as_deref());
    Ok(super::wait_for_exit(run, connection.timeout_secs).await)
}
