//! ClaimBuster Client Implementation
//!
//! Provides integration with the hosted ClaimBuster claim-scoring API.
//!
//! # Features
//!
//! - Async HTTP communication with the scoring endpoint
//! - Configurable endpoint, rate limit, and retry policy
//! - Request throttling (minimum inter-request spacing)
//! - Retry logic with exponential backoff on transport failures and 5xx
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use claimlens_spotter::ClaimBusterClient;
//!
//! // Create a client against the hosted API
//! let client = ClaimBusterClient::new("my-api-key");
//!
//! // Note: scoring is async, so call it from an async context
//! ```

use crate::throttle::Throttler;
use crate::SpotterError;
use claimlens_domain::traits::ClaimScorer;
use claimlens_domain::ScoredClaim;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default ClaimBuster API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://idir.uta.edu/claimbuster/api/v2";

/// Default timeout for scoring requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial backoff between retries (500 ms, doubling each retry)
pub const DEFAULT_BACKOFF_MS: u64 = 500;

/// Default request budget per minute
pub const DEFAULT_MAX_REQUESTS_PER_MINUTE: u32 = 60;

/// ClaimBuster scoring API client
///
/// Sends one claim sentence per request and extracts the first scored
/// result. All requests pass through the throttle and the retry policy.
pub struct ClaimBusterClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    throttle: Throttler,
    max_retries: u32,
    initial_backoff: Duration,
}

/// Response from the sentence scoring endpoint
#[derive(Deserialize)]
struct ScoreResponse {
    results: Vec<ScoreResult>,
}

/// One scored sentence within a scoring response
#[derive(Deserialize)]
struct ScoreResult {
    text: String,
    score: f64,
}

impl ClaimBusterClient {
    /// Create a new client against the hosted ClaimBuster API
    ///
    /// # Parameters
    ///
    /// - `api_key`: ClaimBuster API key, sent as the `x-api-key` header
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use claimlens_spotter::ClaimBusterClient;
    ///
    /// let client = ClaimBusterClient::new("my-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            client,
            throttle: Throttler::new(DEFAULT_MAX_REQUESTS_PER_MINUTE),
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_millis(DEFAULT_BACKOFF_MS),
        }
    }

    /// Set a custom API endpoint (e.g. a self-hosted scorer)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the request budget per minute
    pub fn with_rate_limit(mut self, max_requests_per_minute: u32) -> Self {
        self.throttle = Throttler::new(max_requests_per_minute);
        self
    }

    /// Set the initial retry backoff (doubles on each retry)
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Score a claim sentence
    ///
    /// # Parameters
    ///
    /// - `claim`: The claim sentence to score
    ///
    /// # Returns
    ///
    /// The first scored result from the API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails after exhausting retries
    /// - The API responds with a non-success status
    /// - The response body lacks the expected result shape
    pub async fn score(&self, claim: &str) -> Result<ScoredClaim, SpotterError> {
        let url = self.score_url(claim)?;

        debug!("Scoring claim ({} chars)", claim.len());

        let response = self.fetch_with_retry(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpotterError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body: ScoreResponse = response.json().await.map_err(|e| {
            SpotterError::MalformedResponse(format!("failed to decode score response: {}", e))
        })?;

        let first = body.results.into_iter().next().ok_or_else(|| {
            SpotterError::MalformedResponse("results list is empty".to_string())
        })?;

        Ok(ScoredClaim::new(first.text, first.score))
    }

    /// Build the scoring URL with the claim as a percent-encoded path segment
    fn score_url(&self, claim: &str) -> Result<reqwest::Url, SpotterError> {
        let mut url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| SpotterError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        url.path_segments_mut()
            .map_err(|_| SpotterError::InvalidEndpoint(self.endpoint.clone()))?
            .extend(["score", "text", "sentences"])
            .push(claim);

        Ok(url)
    }

    /// Perform the request with throttling and bounded retry
    ///
    /// Retries on transport failure or HTTP 5xx, up to `max_retries` times
    /// with exponential backoff. Every attempt re-enters the throttle wait.
    /// Non-5xx responses (including 4xx) are returned as-is; interpreting
    /// the status is the caller's job.
    async fn fetch_with_retry(&self, url: reqwest::Url) -> Result<reqwest::Response, SpotterError> {
        let mut retries_left = self.max_retries;
        let mut backoff = self.initial_backoff;

        loop {
            self.throttle.wait().await;

            let attempt = self
                .client
                .get(url.clone())
                .header("x-api-key", &self.api_key)
                .send()
                .await;

            match attempt {
                Ok(response) => {
                    if response.status().is_server_error() && retries_left > 0 {
                        warn!(
                            "Scoring API returned {}, retrying in {:?} ({} retries left)",
                            response.status(),
                            backoff,
                            retries_left
                        );
                        retries_left -= 1;
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                        continue;
                    }

                    self.throttle.mark_complete();
                    return Ok(response);
                }
                Err(e) => {
                    if retries_left == 0 {
                        return Err(SpotterError::Transport(e.to_string()));
                    }

                    warn!(
                        "Request failed: {}, retrying in {:?} ({} retries left)",
                        e, backoff, retries_left
                    );
                    retries_left -= 1;
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl ClaimScorer for ClaimBusterClient {
    type Error = SpotterError;

    async fn score(&self, claim: &str) -> Result<ScoredClaim, SpotterError> {
        self.score(claim).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ClaimBusterClient::new("test-key");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(
            client.initial_backoff,
            Duration::from_millis(DEFAULT_BACKOFF_MS)
        );
    }

    #[test]
    fn test_client_builders() {
        let client = ClaimBusterClient::new("test-key")
            .with_endpoint("http://localhost:8000/api")
            .with_max_retries(5)
            .with_rate_limit(10)
            .with_initial_backoff(Duration::from_millis(100));

        assert_eq!(client.endpoint, "http://localhost:8000/api");
        assert_eq!(client.max_retries, 5);
        assert_eq!(client.throttle.min_interval(), Duration::from_millis(6000));
        assert_eq!(client.initial_backoff, Duration::from_millis(100));
    }

    #[test]
    fn test_score_url_encodes_claim() {
        let client = ClaimBusterClient::new("test-key");
        let url = client
            .score_url("Vaccines cause autism in children.")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://idir.uta.edu/claimbuster/api/v2/score/text/sentences/Vaccines%20cause%20autism%20in%20children."
        );
    }

    #[test]
    fn test_score_url_encodes_reserved_characters() {
        let client = ClaimBusterClient::new("test-key");
        let url = client.score_url("50% of jobs? gone/lost").unwrap();

        let encoded = url.path_segments().unwrap().next_back().unwrap().to_string();
        assert!(!encoded.contains('/'));
        assert!(encoded.contains("%25")); // '%' itself must be escaped
    }

    #[test]
    fn test_invalid_endpoint() {
        let client = ClaimBusterClient::new("test-key").with_endpoint("not a url");
        let result = client.score_url("test");
        assert!(matches!(result, Err(SpotterError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_transport_error_surfaces() {
        // Unroutable endpoint, no retries so the test stays fast
        let client = ClaimBusterClient::new("test-key")
            .with_endpoint("http://127.0.0.1:1")
            .with_max_retries(0);

        let result = client.score("test claim").await;
        assert!(matches!(result, Err(SpotterError::Transport(_))));
    }

    // Integration test (requires a ClaimBuster API key)
    #[tokio::test]
    #[ignore] // Only run when CLAIMBUSTER_API_KEY is available
    async fn test_score_integration() {
        let api_key = match std::env::var("CLAIMBUSTER_API_KEY") {
            Ok(key) => key,
            Err(_) => return,
        };

        let client = ClaimBusterClient::new(api_key).with_rate_limit(10);
        let claim = client.score("The Earth is flat.").await.unwrap();

        assert_eq!(claim.text, "The Earth is flat.");
        assert!((0.0..=1.0).contains(&claim.score));
    }
}
