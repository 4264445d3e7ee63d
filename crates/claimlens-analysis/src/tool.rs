//! Composed fact-check pipeline
//!
//! Wires the scorer, analyzer, and report builder into the single public
//! operation: score one claim, analyze it, return the aggregate report.

use crate::analyzer::Analyzer;
use crate::config::FactCheckConfig;
use crate::error::FactCheckError;
use crate::report::{FactCheckReport, ReportBuilder};
use claimlens_domain::traits::ClaimScorer;
use std::time::Instant;
use tracing::{debug, info};

/// The fact-check pipeline
///
/// Generic over the [`ClaimScorer`] implementation so tests run against a
/// deterministic mock and production runs against the hosted scoring API.
/// Each invocation processes exactly one claim through one scoring request;
/// there is no batching.
///
/// # Examples
///
/// ```
/// use claimlens_analysis::{FactCheckConfig, FactCheckTool};
/// use claimlens_spotter::MockScorer;
///
/// let scorer = MockScorer::new(0.85);
/// let tool = FactCheckTool::new(scorer, FactCheckConfig::default()).unwrap();
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let report = rt.block_on(tool.check("Vaccines cause autism in children.")).unwrap();
/// assert_eq!(report.summary.total_claims, 1);
/// ```
pub struct FactCheckTool<S: ClaimScorer> {
    scorer: S,
    config: FactCheckConfig,
    analyzer: Analyzer,
}

impl<S> FactCheckTool<S>
where
    S: ClaimScorer,
{
    /// Create a new fact-check pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(scorer: S, config: FactCheckConfig) -> Result<Self, FactCheckError> {
        config.validate().map_err(FactCheckError::Config)?;

        let analyzer = Analyzer::new(config.low_threshold, config.high_threshold);
        Ok(Self {
            scorer,
            config,
            analyzer,
        })
    }

    /// The active pipeline configuration
    pub fn config(&self) -> &FactCheckConfig {
        &self.config
    }

    /// Score and analyze one claim
    ///
    /// # Errors
    ///
    /// Any failure on the scoring path is rewrapped once into
    /// [`FactCheckError::Scoring`], preserving the original message; it is
    /// never swallowed or retried beyond the scorer's own policy.
    pub async fn check(&self, input: &str) -> Result<FactCheckReport, FactCheckError> {
        let started = Instant::now();

        info!("Checking claim ({} chars)", input.len());

        let scored = self
            .scorer
            .score(input)
            .await
            .map_err(|e| FactCheckError::Scoring(e.to_string()))?;

        debug!("Claim scored {:.3}", scored.score);

        let analysis = self.analyzer.analyze(scored);
        let report = ReportBuilder::new(&self.config).build(vec![analysis], started);

        info!(
            "Report ready: {} high / {} medium / {} low priority",
            report.summary.check_worthiness_breakdown.high_priority,
            report.summary.check_worthiness_breakdown.medium_priority,
            report.summary.check_worthiness_breakdown.low_priority,
        );

        Ok(report)
    }

    /// Score and analyze one claim, returning the report as pretty JSON
    ///
    /// This is the text form handed to downstream consumers.
    pub async fn check_to_json(&self, input: &str) -> Result<String, FactCheckError> {
        let report = self.check(input).await?;
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal scorer for config-validation tests; pipeline behavior is
    // covered by the integration tests against MockScorer
    struct FixedScorer;

    #[async_trait::async_trait]
    impl ClaimScorer for FixedScorer {
        type Error = std::convert::Infallible;

        async fn score(
            &self,
            claim: &str,
        ) -> Result<claimlens_domain::ScoredClaim, Self::Error> {
            Ok(claimlens_domain::ScoredClaim::new(claim, 0.5))
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FactCheckConfig {
            low_threshold: 0.9,
            high_threshold: 0.2,
            ..FactCheckConfig::default()
        };

        let result = FactCheckTool::new(FixedScorer, config);
        assert!(matches!(result, Err(FactCheckError::Config(_))));
    }

    #[tokio::test]
    async fn test_check_runs_one_claim() {
        let tool = FactCheckTool::new(FixedScorer, FactCheckConfig::default()).unwrap();
        let report = tool.check("The sky is blue.").await.unwrap();

        assert_eq!(report.summary.total_claims, 1);
        assert_eq!(report.detailed_analysis[0].claim, "The sky is blue.");
    }
}
