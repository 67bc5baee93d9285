use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "disaster-news")]
#[command(about = "Collects disaster-related news from feeds and extracts the full articles")]
#[command(version)]
pub struct Cli {
    /// File with one feed URL per line (overrides NEWS_FEEDS)
    #[arg(long, global = true, env = "NEWS_FEEDS_FILE")]
    pub feeds_file: Option<String>,

    /// Content language used for article extraction (hi, en)
    #[arg(long, global = true)]
    pub language: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all feeds, select disaster news and extract every article
    Run {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch all feeds and list the disaster-related entries without extracting
    Select {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Classify a piece of text as natural, man-made or none
    Classify {
        /// Text to classify
        text: String,
    },

    /// Extract a single article
    Extract {
        /// Article URL
        url: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the configured feed sources
    Sources,
}
