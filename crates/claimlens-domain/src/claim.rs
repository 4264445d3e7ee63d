//! Scored claim module - the unit of work flowing through claimlens

use serde::{Deserialize, Serialize};

/// A claim sentence together with its check-worthiness score
///
/// Produced by the external scoring API. The score is nominally in
/// `[0.0, 1.0]`; out-of-range values are bucketed by the threshold rules
/// rather than rejected. Immutable once created.
///
/// # Examples
///
/// ```
/// use claimlens_domain::ScoredClaim;
///
/// let claim = ScoredClaim::new("The Earth is flat.", 0.82);
/// assert_eq!(claim.text, "The Earth is flat.");
/// assert_eq!(claim.score, 0.82);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredClaim {
    /// The claim sentence as returned by the scoring API
    pub text: String,

    /// Check-worthiness score in [0.0, 1.0]
    pub score: f64,
}

impl ScoredClaim {
    /// Create a new scored claim
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_claim_creation() {
        let claim = ScoredClaim::new("Vaccines cause autism in children.", 0.85);
        assert_eq!(claim.text, "Vaccines cause autism in children.");
        assert_eq!(claim.score, 0.85);
    }

    #[test]
    fn test_scored_claim_serde_roundtrip() {
        let claim = ScoredClaim::new("The sky is blue.", 0.2);
        let json = serde_json::to_string(&claim).unwrap();
        let parsed: ScoredClaim = serde_json::from_str(&json).unwrap();
        assert_eq!(claim, parsed);
    }
}
