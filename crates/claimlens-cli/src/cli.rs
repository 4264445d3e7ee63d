//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// claimlens - Score, categorize, and prioritize claims for fact-checking.
#[derive(Debug, Parser)]
#[command(name = "claimlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (priority lines only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score and analyze a claim
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// The claim sentence to analyze
    pub claim: String,

    /// ClaimBuster API key
    #[arg(long, env = "CLAIMBUSTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Scoring API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Scores at or above this are at least medium priority (0.0-1.0)
    #[arg(long)]
    pub low_threshold: Option<f64>,

    /// Scores at or above this are high priority (0.0-1.0)
    #[arg(long)]
    pub high_threshold: Option<f64>,

    /// Request budget per minute
    #[arg(long)]
    pub max_rpm: Option<u32>,

    /// Batch size reported in the batch metrics
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Omit the per-claim analysis list from the report
    #[arg(long)]
    pub summary_only: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a default configuration file
    Init,
}
