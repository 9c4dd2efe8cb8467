// sqlexec/src/commands/profiles.rs
//
// USE CASE: List the targets of the profiles file. Passwords are never printed.

use comfy_table::Table;

use crate::cli::ConnectionArgs;

pub fn execute(connection: &ConnectionArgs) -> anyhow::Result<i32> {
    let file = match super::load_profiles_file(connection) {
        Ok(file) => file,
        Err(e) => return Ok(super::report(e)),
    };

    let mut table = Table::new();
    table.set_header(vec!["", "Target", "Executable", "Server", "Auth", "Default DB"]);

    for (name, output) in &file.outputs {
        let marker = if *name == file.target { "*" } else { "" };
        let auth = if output.uses_integrated_auth() {
            "integrated".to_string()
        } else {
            format!("login ({})", output.user.as_deref().unwrap_or("?"))
        };
        table.add_row(vec![
            marker.to_string(),
            name.clone(),
            output.executable.clone(),
            output.server.clone(),
            auth,
            output.database.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    Ok(0)
}
