//! Verdict Module
//!
//! Maps numeric risk scores to user-facing verdicts. This is the final
//! step of every scoring path - remote, local model, and formula all hand
//! their score to the same classifier.
//!
//! ## Structure
//! - `types`: Core types (RiskLabel, ScoreSource, RiskAssessment)
//! - `rules`: Thresholds and weights - constants only
//! - `classifier`: The shared threshold function

pub mod types;
pub mod rules;
pub mod classifier;

// Re-export main types for convenience
pub use types::{AssessmentDetails, RiskAssessment, RiskLabel, ScoreSource};

pub use rules::{DANGER_MIN, SAFE_MAX};

pub use classifier::classify;
