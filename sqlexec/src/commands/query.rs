// sqlexec/src/commands/query.rs
//
// USE CASE: Run a query text through the client (-Q).

use crate::cli::ConnectionArgs;

pub async fn execute(
    connection: &ConnectionArgs,
    text: String,
    database: Option<String>,
) -> anyhow::Result<i32> {
    let invoker = match super::build_invoker(connection) {
        Ok(invoker) => invoker,
        Err(e) => return Ok(super::report(e)),
    };
    let run = invoker.run_query(&text, database.as_deref());
    Ok(super::wait_for_exit(run, connection.timeout_secs).await)
}
