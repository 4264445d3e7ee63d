//! Claim analysis module - the per-claim analysis record

use crate::{Category, Verdict, Worthiness};
use serde::{Deserialize, Serialize};

/// A previously published fact-check matched against a claim
///
/// Reserved: no matching backend exists yet, so analyses carry an empty
/// list. The shape is fixed so downstream consumers can rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckMatch {
    /// The matched claim text, if the match carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_claim: Option<String>,

    /// Verdict already published for the matched claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_verdict: Option<String>,

    /// Match confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Where the existing fact-check was published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// How a piece of evidence relates to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    /// Evidence supporting the claim
    Supporting,
    /// Evidence contradicting the claim
    Contradicting,
    /// Related but not directly probative
    Related,
}

/// A piece of evidence gathered for a claim
///
/// Reserved alongside [`FactCheckMatch`]; analyses carry an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Where the evidence came from
    pub source: String,

    /// Relevant excerpt
    pub snippet: String,

    /// Relation to the claim
    #[serde(rename = "type")]
    pub kind: EvidenceKind,

    /// Evidence confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// The full analysis of one scored claim
///
/// Created once per claim by the analyzer and never mutated afterwards.
/// Serializes with camelCase field names, the shape downstream consumers
/// read from the report's `detailedAnalysis` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAnalysis {
    /// The claim text
    pub claim: String,

    /// Raw score from the scoring API
    pub spotter_score: f64,

    /// Priority tier derived from the score
    pub check_worthiness: Worthiness,

    /// Topical category from the rule classifier
    pub category: Category,

    /// Analysis confidence (the spotter score today)
    pub confidence: f64,

    /// Matched published fact-checks (reserved, empty)
    pub matched_fact_checks: Vec<FactCheckMatch>,

    /// Gathered evidence (reserved, empty)
    pub evidence: Vec<Evidence>,

    /// Recommended verification steps
    pub suggested_actions: Vec<String>,

    /// Recommended places to verify the claim
    pub potential_sources: Vec<String>,

    /// Verification outcome (always unverified today)
    pub verdict: Verdict,
}
