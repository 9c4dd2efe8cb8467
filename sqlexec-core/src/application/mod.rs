// sqlexec-core/src/application/mod.rs

pub mod invoker;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use sqlexec_core::application::CommandInvoker;`
pub use invoker::CommandInvoker;
