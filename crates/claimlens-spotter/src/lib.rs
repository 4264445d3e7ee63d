//! claimlens Spotter Layer
//!
//! Outbound HTTP integration with the claim-scoring API.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ClaimScorer` trait from
//! `claimlens-domain`. Requests are paced by a [`Throttler`] and retried
//! with exponential backoff on transport failures and server errors.
//!
//! # Scorers
//!
//! - `MockScorer`: Deterministic mock for testing
//! - `ClaimBusterClient`: Hosted ClaimBuster API integration
//!
//! # Examples
//!
//! ```
//! use claimlens_spotter::MockScorer;
//! use claimlens_domain::traits::ClaimScorer;
//!
//! let scorer = MockScorer::new(0.85);
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let claim = rt.block_on(scorer.score("The Earth is flat.")).unwrap();
//! assert_eq!(claim.score, 0.85);
//! ```

#![warn(missing_docs)]

pub mod claimbuster;
pub mod throttle;

use claimlens_domain::traits::ClaimScorer;
use claimlens_domain::ScoredClaim;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use claimbuster::ClaimBusterClient;
pub use throttle::Throttler;

/// Errors that can occur while scoring a claim
#[derive(Error, Debug)]
pub enum SpotterError {
    /// Network or connection failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success response from the scoring API
    #[error("ClaimBuster API error: {status} {status_text}")]
    Api {
        /// HTTP status code
        status: u16,
        /// HTTP status text (e.g. "Too Many Requests")
        status_text: String,
    },

    /// Response body lacks the expected result shape
    #[error("Malformed scoring response: {0}")]
    MalformedResponse(String),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Canned outcome for a mocked claim
#[derive(Debug, Clone)]
enum MockOutcome {
    Scored(ScoredClaim),
    TransportError(String),
    ApiError(u16, String),
}

/// Mock claim scorer for deterministic testing
///
/// Returns pre-configured results without making any network calls. By
/// default every claim is echoed back with a fixed score, mirroring how the
/// real API returns the submitted sentence alongside its score.
///
/// # Examples
///
/// ```
/// use claimlens_spotter::MockScorer;
/// use claimlens_domain::traits::ClaimScorer;
///
/// let mut scorer = MockScorer::new(0.5);
/// scorer.add_score("The sky is blue.", 0.2);
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// assert_eq!(rt.block_on(scorer.score("The sky is blue.")).unwrap().score, 0.2);
/// assert_eq!(rt.block_on(scorer.score("anything else")).unwrap().score, 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct MockScorer {
    default_score: f64,
    outcomes: Arc<Mutex<HashMap<String, MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockScorer {
    /// Create a new MockScorer with a fixed score for all claims
    pub fn new(default_score: f64) -> Self {
        Self {
            default_score,
            outcomes: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Set the score returned for a specific claim
    pub fn add_score(&mut self, claim: impl Into<String>, score: f64) {
        let claim = claim.into();
        let scored = ScoredClaim::new(claim.clone(), score);
        self.outcomes
            .lock()
            .unwrap()
            .insert(claim, MockOutcome::Scored(scored));
    }

    /// Set the full scored result returned for a specific claim
    ///
    /// Useful when the returned text should differ from the submitted one.
    pub fn add_result(&mut self, claim: impl Into<String>, result: ScoredClaim) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(claim.into(), MockOutcome::Scored(result));
    }

    /// Configure a transport failure for a specific claim
    pub fn add_error(&mut self, claim: impl Into<String>) {
        self.outcomes.lock().unwrap().insert(
            claim.into(),
            MockOutcome::TransportError("Mock transport failure".to_string()),
        );
    }

    /// Configure an API error response for a specific claim
    pub fn add_api_error(
        &mut self,
        claim: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
    ) {
        self.outcomes.lock().unwrap().insert(
            claim.into(),
            MockOutcome::ApiError(status, status_text.into()),
        );
    }

    /// Get the number of times score was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[async_trait::async_trait]
impl ClaimScorer for MockScorer {
    type Error = SpotterError;

    async fn score(&self, claim: &str) -> Result<ScoredClaim, SpotterError> {
        *self.call_count.lock().unwrap() += 1;

        let outcomes = self.outcomes.lock().unwrap();
        match outcomes.get(claim) {
            Some(MockOutcome::Scored(scored)) => Ok(scored.clone()),
            Some(MockOutcome::TransportError(msg)) => Err(SpotterError::Transport(msg.clone())),
            Some(MockOutcome::ApiError(status, status_text)) => Err(SpotterError::Api {
                status: *status,
                status_text: status_text.clone(),
            }),
            None => Ok(ScoredClaim::new(claim, self.default_score)),
        }
    }
}
