//! Result Classifier
//!
//! The single threshold function shared by every scoring path. Total over
//! all integers: out-of-range scores extend the same bands monotonically
//! instead of erroring.

use super::rules::{DANGER_MIN, SAFE_MAX};
use super::types::RiskLabel;

/// Map a 0-100 risk score to its verdict band.
///
/// `score < 30` is Safe, `30 <= score < 70` is Warning, `score >= 70` is
/// Danger. Scores below zero classify as Safe and scores above 100 as
/// Danger.
pub fn classify(score: i32) -> RiskLabel {
    if score < SAFE_MAX {
        RiskLabel::Safe
    } else if score < DANGER_MIN {
        RiskLabel::Warning
    } else {
        RiskLabel::Danger
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_closed_on_the_lower_bound() {
        assert_eq!(classify(0), RiskLabel::Safe);
        assert_eq!(classify(29), RiskLabel::Safe);
        assert_eq!(classify(30), RiskLabel::Warning);
        assert_eq!(classify(50), RiskLabel::Warning);
        assert_eq!(classify(69), RiskLabel::Warning);
        assert_eq!(classify(70), RiskLabel::Danger);
        assert_eq!(classify(100), RiskLabel::Danger);
    }

    #[test]
    fn out_of_range_scores_extend_monotonically() {
        assert_eq!(classify(-5), RiskLabel::Safe);
        assert_eq!(classify(150), RiskLabel::Danger);
        assert_eq!(classify(i32::MIN), RiskLabel::Safe);
        assert_eq!(classify(i32::MAX), RiskLabel::Danger);
    }

    #[test]
    fn bands_partition_the_whole_range() {
        for score in [-5, 0, 29, 30, 50, 69, 70, 100, 150] {
            let label = classify(score);
            let expected = if score < 30 {
                RiskLabel::Safe
            } else if score < 70 {
                RiskLabel::Warning
            } else {
                RiskLabel::Danger
            };
            assert_eq!(label, expected, "score {}", score);
        }
    }
}
