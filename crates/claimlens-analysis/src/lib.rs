//! claimlens Analysis Layer
//!
//! The fact-check pipeline: rule-based claim classification, threshold
//! bucketing, suggested actions and sources, and report aggregation,
//! composed behind [`FactCheckTool`].
//!
//! # Pipeline
//!
//! ```text
//! claim text -> ClaimScorer -> Analyzer { classify, bucket, suggest } -> ReportBuilder
//! ```
//!
//! # Examples
//!
//! ```
//! use claimlens_analysis::{classify, FactCheckConfig};
//! use claimlens_domain::{Category, Worthiness};
//!
//! assert_eq!(classify("Vaccines cause autism."), Category::MedicalHealth);
//!
//! let config = FactCheckConfig::default();
//! let tier = Worthiness::from_score(0.85, config.low_threshold, config.high_threshold);
//! assert_eq!(tier, Worthiness::High);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod report;
pub mod tool;

pub use analyzer::{suggested_sources, Analyzer};
pub use classifier::classify;
pub use config::FactCheckConfig;
pub use error::FactCheckError;
pub use report::{
    BatchMetrics, FactCheckReport, ReportBuilder, ReportSummary, VerdictDistribution,
    WorthinessBreakdown,
};
pub use tool::FactCheckTool;
