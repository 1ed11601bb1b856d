//! Risk Rules & Thresholds
//!
//! Thresholds and weights for classification and fallback scoring.
//! No logic here - only constants.

// ============================================================================
// CLASSIFICATION BANDS (0-100 score space)
// ============================================================================

/// Scores below this are Safe
pub const SAFE_MAX: i32 = 30;

/// Scores at or above this are Danger; between the bands = Warning
pub const DANGER_MIN: i32 = 70;

// ============================================================================
// LOCAL-MODEL REASON THRESHOLDS
// ============================================================================

/// At or below this phishing probability the local path reports only the
/// neutral offline note
pub const MINOR_RISK_MAX: f32 = 20.0;

/// Brand edit distance below this reads as typosquatting
pub const TYPOSQUAT_DISTANCE_MAX: f32 = 3.0;

/// Domain reputation below this reads as untrusted
pub const UNTRUSTED_REPUTATION_MAX: f32 = 0.5;

// ============================================================================
// FORMULA FALLBACK WEIGHTS (sum to 1.0)
// ============================================================================

pub const AMOUNT_WEIGHT: f64 = 0.30;
pub const PAYEE_WEIGHT: f64 = 0.40;
pub const FREQUENCY_WEIGHT: f64 = 0.15;
pub const TIMING_WEIGHT: f64 = 0.10;
pub const DEVICE_WEIGHT: f64 = 0.05;

// ============================================================================
// FORMULA REASON THRESHOLDS (per component)
// ============================================================================

pub const PAYEE_REASON_MIN: f64 = 0.6;
pub const AMOUNT_REASON_MIN: f64 = 0.7;
pub const TIMING_REASON_MIN: f64 = 0.5;
pub const FREQUENCY_REASON_MIN: f64 = 0.6;
pub const DEVICE_REASON_MIN: f64 = 0.5;
