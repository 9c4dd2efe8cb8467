pub mod arguments;
pub mod command_line;
pub mod error;
pub mod profile;

// Handy re-exports to keep imports short elsewhere
pub use arguments::{Action, SqlcmdArguments};
pub use error::DomainError;
pub use profile::{Authentication, ConnectionProfile};
