//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fact-check pipeline error
    #[error("{0}")]
    FactCheck(#[from] claimlens_analysis::FactCheckError),

    /// Scoring client error
    #[error("{0}")]
    Spotter(#[from] claimlens_spotter::SpotterError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key available
    #[error("Missing API key. Pass --api-key or set CLAIMBUSTER_API_KEY.")]
    MissingApiKey,
}
