//! Verdict module - verification outcomes for claims

use serde::{Deserialize, Serialize};

/// Verification status of a claim
///
/// claimlens does not verify claims itself, so every analysis today carries
/// `Unverified`; the other variants exist for a future verification layer
/// and for the report's verdict distribution counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// Claim confirmed true
    True,
    /// Claim confirmed false
    False,
    /// Claim partially true
    PartiallyTrue,
    /// Claim not yet verified
    Unverified,
}

impl VerdictStatus {
    /// Get the status as a string (`"true"`, `"partially_true"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::True => "true",
            VerdictStatus::False => "false",
            VerdictStatus::PartiallyTrue => "partially_true",
            VerdictStatus::Unverified => "unverified",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verification outcome attached to a claim analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Verification status
    pub status: VerdictStatus,

    /// Human-readable explanation of the status
    pub explanation: String,

    /// Corrected statement, when the claim is false or partially true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_information: Option<String>,
}

impl Verdict {
    /// The placeholder verdict every analysis carries today
    pub fn unverified() -> Self {
        Self {
            status: VerdictStatus::Unverified,
            explanation: "Claim requires verification from authoritative sources.".to_string(),
            correct_information: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unverified_verdict() {
        let verdict = Verdict::unverified();
        assert_eq!(verdict.status, VerdictStatus::Unverified);
        assert_eq!(
            verdict.explanation,
            "Claim requires verification from authoritative sources."
        );
        assert!(verdict.correct_information.is_none());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(VerdictStatus::True.as_str(), "true");
        assert_eq!(VerdictStatus::False.as_str(), "false");
        assert_eq!(VerdictStatus::PartiallyTrue.as_str(), "partially_true");
        assert_eq!(VerdictStatus::Unverified.as_str(), "unverified");
    }

    #[test]
    fn test_verdict_json_shape() {
        let json = serde_json::to_value(Verdict::unverified()).unwrap();
        assert_eq!(json["status"], "unverified");
        assert!(json.get("correctInformation").is_none());
    }
}
