//! Command line argument parsing for the Patlex CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Patlex - hybrid lexical + semantic search for patent documents
#[derive(Parser, Debug, Clone)]
#[command(name = "patlex")]
#[command(about = "Hybrid lexical + semantic search for patent documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PatlexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PatlexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a JSON patent corpus
    #[command(name = "search")]
    Search(SearchArgs),
}

/// Arguments for the search command.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Path to a JSON file containing an array of patent documents
    #[arg(short, long)]
    pub documents: PathBuf,

    /// Free-text query
    #[arg(short, long)]
    pub query: String,

    /// Restrict to documents carrying any of these CPC codes
    #[arg(long = "cpc")]
    pub cpc_codes: Vec<String>,

    /// Restrict to documents carrying any of these IPC codes
    #[arg(long = "ipc")]
    pub ipc_codes: Vec<String>,

    /// Case-insensitive assignee substring
    #[arg(long)]
    pub assignee: Option<String>,

    /// Inclusive ISO lower bound on the filing date (YYYY-MM-DD)
    #[arg(long)]
    pub filed_after: Option<String>,

    /// Inclusive ISO upper bound on the filing date (YYYY-MM-DD)
    #[arg(long)]
    pub filed_before: Option<String>,

    /// 1-based result page
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Remote embeddings endpoint (the API key comes from
    /// PATLEX_EMBED_API_KEY; without a key the local hash embedder is used)
    #[arg(long, env = "PATLEX_EMBED_API_URL")]
    pub api_url: Option<String>,

    /// Remote embedding model name
    #[arg(long, env = "PATLEX_EMBED_MODEL")]
    pub model: Option<String>,

    /// Cache embeddings for the lifetime of the process
    #[arg(long)]
    pub cache_embeddings: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}
