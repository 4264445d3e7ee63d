//! Claim analysis
//!
//! Combines the score, the classified category, threshold bucketing,
//! suggested verification actions, and suggested sources into one
//! [`ClaimAnalysis`] record.

use crate::classifier::classify;
use claimlens_domain::{Category, ClaimAnalysis, ScoredClaim, Verdict, Worthiness};

/// Default source list for categories without a dedicated entry
const DEFAULT_SOURCES: &[&str] = &["Fact-checking websites", "Academic sources", "Official records"];

/// Suggest verification sources for a category
///
/// Categories without a dedicated entry (today only `General`) fall back to
/// the default three-item list.
pub fn suggested_sources(category: Category) -> Vec<String> {
    let sources: &[&str] = match category {
        Category::MedicalHealth => &[
            "PubMed Central",
            "WHO Database",
            "CDC Reports",
            "Medical Journals",
        ],
        Category::ClimateWeather => &["NOAA", "NASA Climate", "IPCC Reports"],
        Category::Scientific => &["Google Scholar", "Science Direct", "Nature"],
        Category::Economic => &["World Bank Data", "IMF Statistics", "Federal Reserve"],
        Category::Political => &["Government Websites", "Official Records"],
        Category::Historical => &["Academic Databases", "National Archives"],
        Category::General => DEFAULT_SOURCES,
    };

    sources.iter().map(|s| s.to_string()).collect()
}

/// Produces a [`ClaimAnalysis`] from a scored claim
///
/// Holds the two worthiness thresholds; everything else it derives is a
/// pure function of the claim text and score.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    low_threshold: f64,
    high_threshold: f64,
}

impl Analyzer {
    /// Create an analyzer with the given worthiness thresholds
    pub fn new(low_threshold: f64, high_threshold: f64) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }

    /// Analyze one scored claim
    pub fn analyze(&self, scored: ScoredClaim) -> ClaimAnalysis {
        let category = classify(&scored.text);
        let check_worthiness =
            Worthiness::from_score(scored.score, self.low_threshold, self.high_threshold);
        let suggested_actions = self.suggested_actions(scored.score, category);
        let potential_sources = suggested_sources(category);

        ClaimAnalysis {
            claim: scored.text,
            spotter_score: scored.score,
            check_worthiness,
            category,
            confidence: scored.score,
            matched_fact_checks: Vec::new(),
            evidence: Vec::new(),
            suggested_actions,
            potential_sources,
            verdict: Verdict::unverified(),
        }
    }

    /// Suggest verification actions for a score and category
    ///
    /// The worthiness tier picks the base actions; Medical/Health,
    /// Climate/Weather, and Scientific claims get category-specific
    /// additions appended after them.
    pub fn suggested_actions(&self, score: f64, category: Category) -> Vec<String> {
        let tier_actions: &[&str] =
            match Worthiness::from_score(score, self.low_threshold, self.high_threshold) {
                Worthiness::High => &[
                    "High priority for fact-checking",
                    "Verify with multiple authoritative sources",
                    "Check for recent fact-checks on this topic",
                ],
                Worthiness::Medium => &[
                    "Consider fact-checking if resources allow",
                    "Monitor for related claims",
                ],
                Worthiness::Low => &[
                    "No immediate fact-checking needed",
                    "Statement is not a factual claim",
                ],
            };

        let mut actions: Vec<String> = tier_actions.iter().map(|s| s.to_string()).collect();

        match category {
            Category::MedicalHealth => {
                actions.push("Verify with medical journals".to_string());
                actions.push("Check WHO guidelines".to_string());
            }
            Category::ClimateWeather => {
                actions.push("Consult IPCC reports".to_string());
            }
            Category::Scientific => {
                actions.push("Check peer-reviewed literature".to_string());
            }
            _ => {}
        }

        actions
    }
}
