//! CLI argument parsing for tagmatch
//!
//! Global flags: --catalog, --config, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use tagmatch_core::format::OutputFormat;

/// Tagmatch - recommend catalog items with similar tags
#[derive(Parser, Debug)]
#[command(name = "tagmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog CSV (columns: Name, Tags, ReviewCount, Brand, ImageURL, Rating)
    #[arg(long, global = true, env = "TAGMATCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to ~/.config/tagmatch/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "tagmatch_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend items similar to the named item
    Recommend {
        /// Exact item name
        item: String,

        /// Number of recommendations (non-positive yields none)
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// Show the similarity score between two items
    Score {
        /// First item name
        first: String,

        /// Second item name
        second: String,
    },

    /// List catalog items in catalog order
    List {
        /// Maximum items to show
        #[arg(long, short, default_value_t = 8)]
        limit: usize,
    },
}
