use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linkscan",
    version,
    about = "Extract media links from text and classify them by platform and track type"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LINKSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Redirect resolution timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of URLs classified concurrently
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Never resolve redirects; short links stay unclassified
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one or more URLs
    Classify {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Extract URLs from text (file or stdin) and classify them
    Scan {
        /// Input file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat the input as a JSON array of posts and comments
        #[arg(long)]
        records: bool,

        /// Also report URLs whose platform is known but whose track type
        /// could not be determined
        #[arg(long)]
        show_unresolved: bool,
    },

    /// List the supported platforms in dispatch order
    Platforms,
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}
