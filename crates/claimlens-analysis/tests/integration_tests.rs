//! End-to-end tests for the fact-check pipeline
//!
//! Runs the full pipeline against the deterministic MockScorer; the live
//! scoring API is exercised separately by the ignored integration test in
//! claimlens-spotter.

use claimlens_analysis::{FactCheckConfig, FactCheckError, FactCheckTool};
use claimlens_domain::{Category, VerdictStatus, Worthiness};
use claimlens_spotter::MockScorer;

fn tool_with_scores(scores: &[(&str, f64)]) -> FactCheckTool<MockScorer> {
    let mut scorer = MockScorer::default();
    for (claim, score) in scores {
        scorer.add_score(*claim, *score);
    }
    FactCheckTool::new(scorer, FactCheckConfig::default()).unwrap()
}

#[tokio::test]
async fn test_high_priority_medical_claim() {
    let claim = "Vaccines cause autism in children.";
    let tool = tool_with_scores(&[(claim, 0.85)]);

    let report = tool.check(claim).await.unwrap();

    assert_eq!(report.summary.total_claims, 1);
    assert_eq!(report.summary.check_worthiness_breakdown.high_priority, 1);
    assert_eq!(report.summary.check_worthiness_breakdown.medium_priority, 0);
    assert_eq!(report.summary.check_worthiness_breakdown.low_priority, 0);
    assert!(report
        .summary
        .top_categories
        .contains(&Category::MedicalHealth));

    let analysis = &report.detailed_analysis[0];
    assert_eq!(analysis.claim, claim);
    assert_eq!(analysis.spotter_score, 0.85);
    assert_eq!(analysis.check_worthiness, Worthiness::High);
    assert_eq!(analysis.category, Category::MedicalHealth);
    assert_eq!(analysis.verdict.status, VerdictStatus::Unverified);

    assert!(analysis
        .suggested_actions
        .contains(&"High priority for fact-checking".to_string()));
    assert!(analysis
        .suggested_actions
        .contains(&"Verify with medical journals".to_string()));

    assert!(analysis
        .potential_sources
        .contains(&"WHO Database".to_string()));
    assert!(analysis
        .potential_sources
        .contains(&"CDC Reports".to_string()));

    assert_eq!(report.verification_priorities.len(), 1);
    assert!(report.verification_priorities[0].contains("Priority Check Required"));
    assert!(report.verification_priorities[0].contains(claim));
    assert!(report.verification_priorities[0].contains("0.85"));
}

#[tokio::test]
async fn test_medium_priority_climate_claim() {
    let claim = "Global temperatures have risen by 1.5°C in the past century.";
    let tool = tool_with_scores(&[(claim, 0.5)]);

    let report = tool.check(claim).await.unwrap();

    assert_eq!(report.summary.check_worthiness_breakdown.high_priority, 0);
    assert_eq!(report.summary.check_worthiness_breakdown.medium_priority, 1);
    assert_eq!(report.summary.check_worthiness_breakdown.low_priority, 0);
    assert!(report
        .summary
        .top_categories
        .contains(&Category::ClimateWeather));

    let analysis = &report.detailed_analysis[0];
    assert_eq!(analysis.check_worthiness, Worthiness::Medium);
    assert_eq!(analysis.category, Category::ClimateWeather);
    assert!(analysis
        .suggested_actions
        .contains(&"Consider fact-checking if resources allow".to_string()));
    assert!(analysis
        .suggested_actions
        .contains(&"Consult IPCC reports".to_string()));
    assert!(analysis.potential_sources.contains(&"NOAA".to_string()));
    assert!(analysis
        .potential_sources
        .contains(&"NASA Climate".to_string()));

    // Medium-priority claims never make the priority list
    assert!(report.verification_priorities.is_empty());
}

#[tokio::test]
async fn test_low_priority_general_claim() {
    let claim = "The sky is blue.";
    let tool = tool_with_scores(&[(claim, 0.2)]);

    let report = tool.check(claim).await.unwrap();

    assert_eq!(report.summary.check_worthiness_breakdown.low_priority, 1);
    assert!(report.summary.top_categories.contains(&Category::General));

    let analysis = &report.detailed_analysis[0];
    assert_eq!(analysis.check_worthiness, Worthiness::Low);
    assert_eq!(analysis.category, Category::General);
    assert!(analysis
        .suggested_actions
        .contains(&"No immediate fact-checking needed".to_string()));
    assert!(analysis
        .suggested_actions
        .contains(&"Statement is not a factual claim".to_string()));
    assert!(analysis
        .potential_sources
        .contains(&"Fact-checking websites".to_string()));

    assert!(report.verification_priorities.is_empty());
}

#[tokio::test]
async fn test_api_error_surfaces_with_tool_prefix() {
    let mut scorer = MockScorer::default();
    scorer.add_api_error("Test claim", 429, "Too Many Requests");

    let tool = FactCheckTool::new(scorer, FactCheckConfig::default()).unwrap();
    let err = tool.check("Test claim").await.unwrap_err();

    assert!(matches!(err, FactCheckError::Scoring(_)));
    let message = err.to_string();
    assert!(message.starts_with("claimlens:"));
    assert!(message.contains("ClaimBuster API error: 429 Too Many Requests"));
}

#[tokio::test]
async fn test_transport_error_surfaces_with_tool_prefix() {
    let mut scorer = MockScorer::default();
    scorer.add_error("Test claim");

    let tool = FactCheckTool::new(scorer, FactCheckConfig::default()).unwrap();
    let err = tool.check("Test claim").await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("claimlens:"));
    assert!(message.contains("Mock transport failure"));
}

#[tokio::test]
async fn test_summary_only_report() {
    let config = FactCheckConfig {
        detailed_analysis: false,
        ..FactCheckConfig::default()
    };
    let mut scorer = MockScorer::default();
    scorer.add_score("Test claim", 0.8);

    let tool = FactCheckTool::new(scorer, config).unwrap();
    let report = tool.check("Test claim").await.unwrap();

    assert!(report.detailed_analysis.is_empty());
    assert_eq!(report.summary.total_claims, 1);
    assert_eq!(report.summary.check_worthiness_breakdown.high_priority, 1);
    assert_eq!(report.verification_priorities.len(), 1);
}

#[tokio::test]
async fn test_custom_thresholds_change_bucketing() {
    let config = FactCheckConfig {
        low_threshold: 0.4,
        high_threshold: 0.8,
        ..FactCheckConfig::default()
    };
    let mut scorer = MockScorer::default();
    scorer.add_score("Test claim", 0.7);

    let tool = FactCheckTool::new(scorer, config).unwrap();
    let report = tool.check("Test claim").await.unwrap();

    // 0.7 is high priority under default thresholds, medium under these
    assert_eq!(report.summary.check_worthiness_breakdown.medium_priority, 1);
    assert!(report.verification_priorities.is_empty());
}

#[tokio::test]
async fn test_scorer_called_once_per_check() {
    let scorer = MockScorer::new(0.5);
    let counter = scorer.clone();

    let tool = FactCheckTool::new(scorer, FactCheckConfig::default()).unwrap();
    tool.check("first claim").await.unwrap();
    tool.check("second claim").await.unwrap();

    assert_eq!(counter.call_count(), 2);
}

#[tokio::test]
async fn test_json_output_shape() {
    let claim = "Vaccines cause autism in children.";
    let tool = tool_with_scores(&[(claim, 0.85)]);

    let json = tool.check_to_json(claim).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["totalClaims"], 1);
    assert_eq!(value["summary"]["checkWorthinessBreakdown"]["highPriority"], 1);
    assert_eq!(value["summary"]["topCategories"][0], "Medical/Health");
    assert_eq!(value["summary"]["verdictDistribution"]["unverified"], 1);
    assert_eq!(value["detailedAnalysis"][0]["spotterScore"], 0.85);
    assert_eq!(
        value["detailedAnalysis"][0]["checkWorthiness"],
        "High Priority Check-Worthy Claim"
    );
    assert_eq!(value["batchMetrics"]["batchSize"], 5);
    assert_eq!(value["batchMetrics"]["successRate"], 1.0);
    assert_eq!(value["verificationPriorities"].as_array().unwrap().len(), 1);
}
