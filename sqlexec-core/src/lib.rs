// sqlexec-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for launching a process and building its arguments.
pub mod ports;

// 2. Domain (business core)
// Connection profile, argument assembly, command-line quoting.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Process runners (tokio, dry-run) and the YAML profiles loader.
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// The command invoker.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use sqlexec_core::{CommandInvoker, ConnectionProfile, SqlexecError};
pub use application::CommandInvoker;
pub use domain::profile::{Authentication, ConnectionProfile};
pub use error::SqlexecError;
