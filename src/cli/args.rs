//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dictionary::{CaseFolding, InvalidWordPolicy};

/// Top-level command line
#[derive(Parser)]
#[command(name = "word-ladder")]
#[command(about = "Shortest word ladders: add or remove one letter, then rearrange")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the dictionary and its cached graph come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Word list file, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Graph cache file
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Build the graph in memory without reading or writing the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Keep letter case instead of lowercasing every word
    #[arg(long)]
    pub case_sensitive: bool,

    /// Fail on words containing anything but ASCII letters
    #[arg(long)]
    pub strict: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Find a shortest ladder between two words
    Query {
        /// Start word
        start: String,

        /// Goal word
        goal: String,

        /// File to write the ladder to, one word per line
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Rebuild the graph and overwrite the cache
    Precompute {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Count the connected groups of words
    Groups {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Find the longest ladder within a word's group
    LongestPath {
        /// Any word of the group to examine
        word: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show or update user settings
    Settings {
        /// Set default word list path
        #[arg(long)]
        set_words: Option<PathBuf>,

        /// Set default cache path
        #[arg(long)]
        set_cache: Option<PathBuf>,

        /// Set default output path
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// Set default case folding
        #[arg(long)]
        set_case_folding: Option<CaseFolding>,

        /// Set default handling of invalid words
        #[arg(long)]
        set_invalid_words: Option<InvalidWordPolicy>,

        /// Enable or disable the graph cache by default
        #[arg(long)]
        set_use_cache: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
