// sqlexec-core/src/ports/mod.rs

pub mod arguments;
pub mod runner;

pub use arguments::ArgumentBuilder;
pub use runner::{Invocation, ProcessRunner};
