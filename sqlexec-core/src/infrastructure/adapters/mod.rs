// sqlexec-core/src/infrastructure/adapters/mod.rs

pub mod dry_run;
pub mod process;

pub use dry_run::DryRunRunner;
pub use process::TokioProcessRunner;
