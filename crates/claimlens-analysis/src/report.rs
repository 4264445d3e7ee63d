//! Fact-check report aggregation
//!
//! Builds the final [`FactCheckReport`] from one or more claim analyses.
//! The report is recomputed fully on every call and never persisted.

use crate::config::FactCheckConfig;
use claimlens_domain::{Category, ClaimAnalysis, VerdictStatus, Worthiness};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Claim counts per worthiness tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorthinessBreakdown {
    /// High-priority check-worthy claims
    pub high_priority: usize,
    /// Medium-priority check-worthy claims
    pub medium_priority: usize,
    /// Non-check-worthy statements
    pub low_priority: usize,
}

/// Claim counts per verdict status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictDistribution {
    /// Claims verified true
    #[serde(rename = "true")]
    pub true_count: usize,
    /// Claims verified false
    #[serde(rename = "false")]
    pub false_count: usize,
    /// Claims verified partially true
    pub partially_true: usize,
    /// Claims not yet verified
    pub unverified: usize,
}

/// Summary section of a fact-check report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of claims analyzed
    pub total_claims: usize,

    /// Claim counts per worthiness tier
    pub check_worthiness_breakdown: WorthinessBreakdown,

    /// Arithmetic mean of analysis confidences
    pub average_confidence: f64,

    /// Up to three categories ranked by frequency descending, ties broken
    /// by first appearance
    pub top_categories: Vec<Category>,

    /// Claim counts per verdict status
    pub verdict_distribution: VerdictDistribution,
}

/// Processing metrics attached to a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMetrics {
    /// Elapsed processing time in milliseconds
    pub processing_time: u64,

    /// Configured batch size (reported, not enforced)
    pub batch_size: usize,

    /// Fraction of claims processed successfully (fixed at 1.0; failures
    /// abort the whole invocation instead)
    pub success_rate: f64,
}

/// The final fact-check report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckReport {
    /// Aggregate summary over all analyzed claims
    pub summary: ReportSummary,

    /// Per-claim analyses; empty when detailed analysis is disabled
    pub detailed_analysis: Vec<ClaimAnalysis>,

    /// Processing metrics
    pub batch_metrics: BatchMetrics,

    /// One priority line per high-priority claim, highest score first
    pub verification_priorities: Vec<String>,
}

/// Builds [`FactCheckReport`]s under a pipeline configuration
pub struct ReportBuilder<'a> {
    config: &'a FactCheckConfig,
}

impl<'a> ReportBuilder<'a> {
    /// Create a report builder
    pub fn new(config: &'a FactCheckConfig) -> Self {
        Self { config }
    }

    /// Build a report from the given analyses
    ///
    /// `started` is the instant the invocation began; the elapsed time
    /// lands in the batch metrics.
    pub fn build(&self, analyses: Vec<ClaimAnalysis>, started: Instant) -> FactCheckReport {
        let breakdown = WorthinessBreakdown {
            high_priority: count_tier(&analyses, Worthiness::High),
            medium_priority: count_tier(&analyses, Worthiness::Medium),
            low_priority: count_tier(&analyses, Worthiness::Low),
        };

        let verdict_distribution = VerdictDistribution {
            true_count: count_verdict(&analyses, VerdictStatus::True),
            false_count: count_verdict(&analyses, VerdictStatus::False),
            partially_true: count_verdict(&analyses, VerdictStatus::PartiallyTrue),
            unverified: count_verdict(&analyses, VerdictStatus::Unverified),
        };

        let average_confidence = analyses.iter().map(|a| a.confidence).sum::<f64>()
            / analyses.len().max(1) as f64;

        let summary = ReportSummary {
            total_claims: analyses.len(),
            check_worthiness_breakdown: breakdown,
            average_confidence,
            top_categories: top_categories(&analyses),
            verdict_distribution,
        };

        let verification_priorities = verification_priorities(&analyses);

        FactCheckReport {
            summary,
            detailed_analysis: if self.config.detailed_analysis {
                analyses
            } else {
                Vec::new()
            },
            batch_metrics: BatchMetrics {
                processing_time: started.elapsed().as_millis() as u64,
                batch_size: self.config.batch_size,
                success_rate: 1.0,
            },
            verification_priorities,
        }
    }
}

fn count_tier(analyses: &[ClaimAnalysis], tier: Worthiness) -> usize {
    analyses
        .iter()
        .filter(|a| a.check_worthiness == tier)
        .count()
}

fn count_verdict(analyses: &[ClaimAnalysis], status: VerdictStatus) -> usize {
    analyses
        .iter()
        .filter(|a| a.verdict.status == status)
        .count()
}

/// Top three categories by frequency, descending
///
/// The sort is stable, so categories with equal counts keep the order in
/// which they first appeared.
fn top_categories(analyses: &[ClaimAnalysis]) -> Vec<Category> {
    let mut counts: Vec<(Category, usize)> = Vec::new();

    for analysis in analyses {
        match counts.iter_mut().find(|(c, _)| *c == analysis.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((analysis.category, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(3).map(|(c, _)| c).collect()
}

/// One human-readable priority line per high-priority claim, sorted by
/// score descending
fn verification_priorities(analyses: &[ClaimAnalysis]) -> Vec<String> {
    let mut high: Vec<&ClaimAnalysis> = analyses
        .iter()
        .filter(|a| a.check_worthiness == Worthiness::High)
        .collect();

    high.sort_by(|a, b| b.spotter_score.total_cmp(&a.spotter_score));

    high.into_iter()
        .map(|a| {
            format!(
                "Priority Check Required: {} ({}, Score: {:.2} [{}])",
                a.claim,
                a.category,
                a.spotter_score,
                a.verdict.status.as_str().to_uppercase()
            )
        })
        .collect()
}
