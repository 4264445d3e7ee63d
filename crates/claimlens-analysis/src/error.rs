//! Error types for the fact-check pipeline

use thiserror::Error;

/// Errors that can occur while checking a claim
#[derive(Error, Debug)]
pub enum FactCheckError {
    /// Scoring API failure, wrapped once at the top of the pipeline with
    /// the original message preserved
    #[error("claimlens: {0}")]
    Scoring(String),

    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FactCheckError {
    fn from(e: serde_json::Error) -> Self {
        FactCheckError::Serialization(e.to_string())
    }
}
