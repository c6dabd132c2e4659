//! CLI interface for word-ladder
//!
//! Provides the `query`, `precompute`, `groups`, `longest-path` and
//! `settings` commands.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, SourceArgs};
pub use paths::{config_dir, default_cache_path, PersistentConfig};
