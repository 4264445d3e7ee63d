//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::ScoredClaim;
use async_trait::async_trait;

/// Trait for scoring claims against an external check-worthiness API
///
/// Implemented by the infrastructure layer (claimlens-spotter). The analysis
/// pipeline only sees this seam, so tests run against a deterministic mock
/// and production runs against the hosted scoring service.
#[async_trait]
pub trait ClaimScorer: Send + Sync {
    /// Error type for scoring operations
    type Error: std::fmt::Display;

    /// Score a single claim sentence
    async fn score(&self, claim: &str) -> Result<ScoredClaim, Self::Error>;
}
