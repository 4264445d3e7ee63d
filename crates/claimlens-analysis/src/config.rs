//! Configuration for the fact-check pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the fact-check pipeline
///
/// Controls the worthiness thresholds and report shaping. Transport-side
/// settings (API key, endpoint, rate limit, retries) live on the scoring
/// client in `claimlens-spotter`.
///
/// # Examples
///
/// ```
/// use claimlens_analysis::FactCheckConfig;
///
/// // Default configuration (balanced)
/// let config = FactCheckConfig::default();
/// assert_eq!(config.low_threshold, 0.3);
/// assert_eq!(config.high_threshold, 0.7);
///
/// // Strict checking flags more claims
/// let config = FactCheckConfig::strict();
/// assert_eq!(config.high_threshold, 0.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckConfig {
    /// Scores at or above this are at least medium priority
    /// Default: 0.3
    pub low_threshold: f64,

    /// Scores at or above this are high priority
    /// Default: 0.7
    pub high_threshold: f64,

    /// Batch size reported in batch metrics
    /// Default: 5 (reported only; one claim is scored per invocation)
    pub batch_size: usize,

    /// Include suggested sources in analyses
    /// Default: true (reserved; not yet consulted)
    #[serde(default = "default_include_sources")]
    pub include_sources: bool,

    /// Require citations for verdicts
    /// Default: false (reserved; not yet consulted)
    #[serde(default)]
    pub require_citations: bool,

    /// Include the per-claim analysis list in the report
    /// Default: true; when false the report carries summary and
    /// priorities only
    #[serde(default = "default_detailed_analysis")]
    pub detailed_analysis: bool,
}

fn default_include_sources() -> bool {
    true
}

fn default_detailed_analysis() -> bool {
    true
}

impl Default for FactCheckConfig {
    /// Create default configuration with balanced thresholds
    ///
    /// - Low threshold: 0.3
    /// - High threshold: 0.7
    /// - Batch size: 5
    /// - Detailed analysis: on
    fn default() -> Self {
        Self {
            low_threshold: 0.3,
            high_threshold: 0.7,
            batch_size: 5,
            include_sources: true,
            require_citations: false,
            detailed_analysis: true,
        }
    }
}

impl FactCheckConfig {
    /// Strict preset: lower thresholds so more claims are flagged
    ///
    /// - Low threshold: 0.2
    /// - High threshold: 0.5
    pub fn strict() -> Self {
        Self {
            low_threshold: 0.2,
            high_threshold: 0.5,
            ..Self::default()
        }
    }

    /// Lenient preset: higher thresholds so only strong claims are flagged
    ///
    /// - Low threshold: 0.5
    /// - High threshold: 0.9
    pub fn lenient() -> Self {
        Self {
            low_threshold: 0.5,
            high_threshold: 0.9,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.low_threshold) {
            return Err("low_threshold must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.high_threshold) {
            return Err("high_threshold must be in [0.0, 1.0]".to_string());
        }
        if self.low_threshold > self.high_threshold {
            return Err("low_threshold cannot exceed high_threshold".to_string());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
