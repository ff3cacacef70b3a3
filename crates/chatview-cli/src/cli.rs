//! CLI argument definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI viewer for exported WhatsApp chat transcripts
#[derive(Parser, Debug)]
#[command(name = "chatview")]
#[command(version)]
#[command(about = "Viewer for exported WhatsApp chat transcripts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Custom store path
    #[arg(long, global = true, env = "CHATVIEW_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// Fallback transcript URL, fetched when the store holds no messages
    #[arg(long, global = true, env = "CHATVIEW_FALLBACK_URL")]
    pub fallback_url: Option<String>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output (one object per line for lists)
    Json,
    /// Minimal text output (content only)
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a transcript export and store it as the current conversation
    Import {
        /// Path to the exported chat text file
        file: PathBuf,
    },

    /// Render the conversation thread with date separators
    View {
        /// Show only messages from this day (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<NaiveDate>,

        /// Show only messages from this sender (exact match)
        #[arg(long)]
        sender: Option<String>,

        /// Highlight messages containing this text
        #[arg(long, short)]
        search: Option<String>,

        /// Show last N messages
        #[arg(long)]
        last: Option<usize>,

        /// Show first N messages
        #[arg(long)]
        first: Option<usize>,

        /// Swap which sender is rendered as the sent side
        #[arg(long)]
        swap: bool,
    },

    /// Search messages for text (case-insensitive)
    Search {
        /// Search query
        query: String,

        /// Limit results
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,

        /// Restrict to one day (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<NaiveDate>,
    },

    /// Show conversation and store statistics
    Info,

    /// Write the stored conversation as a JSON array
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}
