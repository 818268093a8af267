//! CLI interface for the skill ranker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-ranker")]
#[command(about = "Rank postings for a candidate")]
#[command(long_about = "Rank postings for a candidate by combining TF-IDF text relevance with verified-skill performance and trust scores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank postings for a candidate
    Rank {
        /// Path to candidate profile (JSON, TOML)
        #[arg(long)]
        candidate: PathBuf,

        /// Path to postings file (JSON, TOML)
        #[arg(short, long)]
        postings: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Only show the best N postings
        #[arg(short, long)]
        top: Option<usize>,

        /// Show score components for each posting
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Compute individual scores
    Score {
        #[command(subcommand)]
        action: ScoreAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ScoreAction {
    /// Verified-skill performance score
    Vsps {
        #[arg(long)]
        accuracy: f64,

        #[arg(long)]
        speed: f64,

        #[arg(long)]
        skip_penalty: f64,
    },

    /// Normalized recency for a day count
    Recency {
        /// Days since the event
        days: u32,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}
