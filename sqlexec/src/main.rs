// sqlexec/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing), on stderr so stdout stays the client's
    // RUST_LOG=debug sqlexec query ... to see the details
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        // --- USE CASE: QUERY TEXT ---
        Commands::Query { text, database } => {
            commands::query::execute(&cli.connection, text, database).await?
        }

        // --- USE CASE: SCRIPT FILE ---
        Commands::File { path, database } => {
            commands::file::execute(&cli.connection, path, database).await?
        }

        // --- USE CASE: LIST PROFILES ---
        Commands::Profiles => commands::profiles::execute(&cli.connection)?,
    };

    // The client's exit code is ours.
    std::process::exit(code);
}
