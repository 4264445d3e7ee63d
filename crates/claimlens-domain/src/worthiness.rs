//! Worthiness module - priority tiers for check-worthy claims

use serde::{Deserialize, Serialize};

/// Check-worthiness tier of a claim
///
/// Derived from the scoring API's confidence score and two configured
/// thresholds. Lower bounds are inclusive: a score exactly at a threshold
/// lands in the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Worthiness {
    /// Score at or above the high threshold
    #[serde(rename = "High Priority Check-Worthy Claim")]
    High,

    /// Score at or above the low threshold, below the high threshold
    #[serde(rename = "Medium Priority Check-Worthy Claim")]
    Medium,

    /// Score below the low threshold
    #[serde(rename = "Non-Check-Worthy Statement")]
    Low,
}

impl Worthiness {
    /// Bucket a score using the given thresholds
    ///
    /// # Examples
    ///
    /// ```
    /// use claimlens_domain::Worthiness;
    ///
    /// assert_eq!(Worthiness::from_score(0.85, 0.3, 0.7), Worthiness::High);
    /// assert_eq!(Worthiness::from_score(0.5, 0.3, 0.7), Worthiness::Medium);
    /// assert_eq!(Worthiness::from_score(0.2, 0.3, 0.7), Worthiness::Low);
    ///
    /// // Threshold values land in the higher tier
    /// assert_eq!(Worthiness::from_score(0.7, 0.3, 0.7), Worthiness::High);
    /// assert_eq!(Worthiness::from_score(0.3, 0.3, 0.7), Worthiness::Medium);
    /// ```
    pub fn from_score(score: f64, low_threshold: f64, high_threshold: f64) -> Self {
        if score >= high_threshold {
            Worthiness::High
        } else if score >= low_threshold {
            Worthiness::Medium
        } else {
            Worthiness::Low
        }
    }

    /// Get the tier label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Worthiness::High => "High Priority Check-Worthy Claim",
            Worthiness::Medium => "Medium Priority Check-Worthy Claim",
            Worthiness::Low => "Non-Check-Worthy Statement",
        }
    }

    /// Parse a tier from its label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High Priority Check-Worthy Claim" => Some(Worthiness::High),
            "Medium Priority Check-Worthy Claim" => Some(Worthiness::Medium),
            "Non-Check-Worthy Statement" => Some(Worthiness::Low),
            _ => None,
        }
    }
}

impl std::str::FromStr for Worthiness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid worthiness tier: {}", s))
    }
}

impl std::fmt::Display for Worthiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_tier() {
        for score in [0.7, 0.8, 0.9, 1.0] {
            assert_eq!(Worthiness::from_score(score, 0.3, 0.7), Worthiness::High);
        }
    }

    #[test]
    fn test_medium_tier() {
        for score in [0.3, 0.4, 0.5, 0.6, 0.69] {
            assert_eq!(Worthiness::from_score(score, 0.3, 0.7), Worthiness::Medium);
        }
    }

    #[test]
    fn test_low_tier() {
        for score in [0.0, 0.1, 0.2, 0.29] {
            assert_eq!(Worthiness::from_score(score, 0.3, 0.7), Worthiness::Low);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        assert_eq!(Worthiness::from_score(0.3, 0.4, 0.8), Worthiness::Low);
        assert_eq!(Worthiness::from_score(0.4, 0.4, 0.8), Worthiness::Medium);
        assert_eq!(Worthiness::from_score(0.7, 0.4, 0.8), Worthiness::Medium);
        assert_eq!(Worthiness::from_score(0.8, 0.4, 0.8), Worthiness::High);
    }

    #[test]
    fn test_out_of_range_scores() {
        // The API should never return these, but bucketing still holds
        assert_eq!(Worthiness::from_score(-0.1, 0.3, 0.7), Worthiness::Low);
        assert_eq!(Worthiness::from_score(1.1, 0.3, 0.7), Worthiness::High);
    }

    #[test]
    fn test_label_round_trip() {
        for tier in [Worthiness::High, Worthiness::Medium, Worthiness::Low] {
            assert_eq!(Worthiness::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(Worthiness::parse("high"), None);
    }

    #[test]
    fn test_serializes_to_label() {
        let json = serde_json::to_string(&Worthiness::High).unwrap();
        assert_eq!(json, "\"High Priority Check-Worthy Claim\"");
    }
}
