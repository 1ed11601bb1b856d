//! Verdict Types
//!
//! Core types for the risk verdict. No logic - the classifier lives in
//! `classifier.rs`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::classifier::classify;

// ============================================================================
// RISK LABEL
// ============================================================================

/// User-facing risk verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    /// Proceed without friction
    Safe,
    /// Show the payer what was flagged before they proceed
    Warning,
    /// Block-by-default territory
    Danger,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "safe",
            RiskLabel::Warning => "warning",
            RiskLabel::Danger => "danger",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLabel::Safe => 0,
            RiskLabel::Warning => 1,
            RiskLabel::Danger => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "#10b981",    // Green
            RiskLabel::Warning => "#f59e0b", // Yellow
            RiskLabel::Danger => "#ef4444",  // Red
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE SOURCE
// ============================================================================

/// Which scoring path produced the verdict (kept on the assessment for
/// observability and tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSource {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "local-model")]
    LocalModel,
    #[serde(rename = "formula-fallback")]
    Formula,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::Remote => "remote",
            ScoreSource::LocalModel => "local-model",
            ScoreSource::Formula => "formula-fallback",
        }
    }
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ASSESSMENT DETAILS
// ============================================================================

/// Echo of the scanned payment intent, kept for display and later
/// hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDetails {
    pub merchant: String,
    pub payee_address: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<String>,
    /// The raw scanned string, preserved so the exact link the payer
    /// scanned can still be handed off after the verdict.
    pub original_link: String,
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// The output contract of one scan evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub risk_label: RiskLabel,
    /// 0-100
    pub risk_score: i32,
    /// Never empty - a neutral reason is supplied when nothing fired
    pub reasons: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub source: ScoreSource,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<AssessmentDetails>,
}

impl RiskAssessment {
    /// Resolve a raw score into a labeled assessment. Every path funnels
    /// through here so the label bands can never drift between sources.
    pub fn resolved(score: i32, mut reasons: Vec<String>, source: ScoreSource) -> Self {
        if reasons.is_empty() {
            reasons.push("No risk factors identified".to_string());
        }

        Self {
            id: Uuid::new_v4(),
            risk_label: classify(score),
            risk_score: score,
            reasons,
            timestamp: Utc::now(),
            source,
            details: None,
        }
    }

    pub fn with_details(mut self, details: AssessmentDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience for callers that only need a go / no-go.
    pub fn is_safe(&self) -> bool {
        self.risk_label == RiskLabel::Safe
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_labels_through_shared_classifier() {
        let assessment = RiskAssessment::resolved(85, vec!["x".to_string()], ScoreSource::Remote);
        assert_eq!(assessment.risk_label, RiskLabel::Danger);
        assert!(!assessment.is_safe());
    }

    #[test]
    fn resolved_never_leaves_reasons_empty() {
        let assessment = RiskAssessment::resolved(5, vec![], ScoreSource::Formula);
        assert_eq!(assessment.reasons.len(), 1);
        assert!(assessment.is_safe());
    }

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::to_string(&ScoreSource::Formula).unwrap(),
            "\"formula-fallback\""
        );
    }

    #[test]
    fn severity_is_monotonic() {
        assert!(RiskLabel::Safe.severity_level() < RiskLabel::Warning.severity_level());
        assert!(RiskLabel::Warning.severity_level() < RiskLabel::Danger.severity_level());
    }
}
