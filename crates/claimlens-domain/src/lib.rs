//! claimlens Domain Layer
//!
//! This crate contains the core domain model for claimlens: scored claims,
//! claim categories, check-worthiness tiers, verdicts, and the per-claim
//! analysis record, plus the trait interface to the external scoring API.
//!
//! ## Key Concepts
//!
//! - **ScoredClaim**: A claim sentence with its check-worthiness score
//! - **Category**: Fixed topical bucket assigned by the rule classifier
//! - **Worthiness**: Priority tier derived from the score and two thresholds
//! - **Verdict**: Verification outcome (always unverified today; reserved)
//! - **ClaimAnalysis**: The immutable per-claim analysis record
//!
//! ## Architecture
//!
//! The domain carries no I/O. HTTP, classification rules, and report
//! aggregation live in the `claimlens-spotter` and `claimlens-analysis`
//! crates; this crate defines the types and trait seams they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod category;
pub mod claim;
pub mod traits;
pub mod verdict;
pub mod worthiness;

// Re-exports for convenience
pub use analysis::{ClaimAnalysis, Evidence, EvidenceKind, FactCheckMatch};
pub use category::Category;
pub use claim::ScoredClaim;
pub use verdict::{Verdict, VerdictStatus};
pub use worthiness::Worthiness;
