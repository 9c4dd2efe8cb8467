// sqlexec/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlexec")]
#[command(about = "Runs sqlcmd queries and scripts against a connection profile", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect. `--server` builds the profile from flags, otherwise the
/// profiles file is used.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Profiles file (default: ./sqlexec.yaml or ./sqlexec.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Target of the profiles file (default: the file's `target`)
    #[arg(long, short, global = true, env = "SQLEXEC_TARGET")]
    pub target: Option<String>,

    /// Client executable used with --server
    #[arg(long, global = true, default_value = "sqlcmd")]
    pub executable: PathBuf,

    /// Server to connect to, bypassing the profiles file
    #[arg(long, short = 'S', global = true)]
    pub server: Option<String>,

    /// SQL login (omit for integrated authentication)
    #[arg(long, short = 'U', global = true)]
    pub user: Option<String>,

    /// SQL login password (falls back to $SQLEXEC_PASSWORD when --user is set)
    #[arg(long, short = 'P', global = true)]
    pub password: Option<String>,

    /// Database used when a command does not name one
    #[arg(long, global = true)]
    pub default_database: Option<String>,

    /// Print the command line (password masked) instead of running it
    #[arg(long, global = true, default_value = "false")]
    pub dry_run: bool,

    /// Kill the client if it runs longer than this
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ⚡ Runs a query text (-Q)
    Query {
        /// Query text, passed verbatim (double quotes are escaped)
        text: String,

        /// Database to run against (overrides the profile default)
        #[arg(long, short)]
        database: Option<String>,
    },

    /// 📜 Runs a script file (-i), read by the client
    File {
        path: PathBuf,

        /// Database to run against (overrides the profile default)
        #[arg(long, short)]
        database: Option<String>,
    },

    /// 📋 Lists the targets of the profiles file
    Profiles,
}
