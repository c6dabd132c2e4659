//! Shared command logic
//!
//! Query execution, output formatting, and output-file writing live here so
//! the CLI stays a thin layer of argument handling and printing, and so the
//! behaviour can be tested without spawning the binary.

pub mod core;
pub mod handlers;

// Re-export commonly used types
pub use core::{CommandResult, QueryParams};
