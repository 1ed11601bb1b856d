//! Formula Fallback
//!
//! Last-resort deterministic scoring when both the scoring server and the
//! local model are unavailable. A fixed weighted sum over the five coarse
//! risk inputs; reasons name whichever component crossed its own
//! threshold.

use crate::features::RiskInputs;
use crate::verdict::rules::{
    AMOUNT_REASON_MIN, AMOUNT_WEIGHT, DEVICE_REASON_MIN, DEVICE_WEIGHT, FREQUENCY_REASON_MIN,
    FREQUENCY_WEIGHT, PAYEE_REASON_MIN, PAYEE_WEIGHT, TIMING_REASON_MIN, TIMING_WEIGHT,
};

/// Neutral reason when no individual component crossed its threshold
pub const NORMAL_PATTERN_REASON: &str = "Transaction pattern appears normal";

/// Weighted 0-100 score plus per-component reasons.
pub fn formula_score(inputs: &RiskInputs) -> (i32, Vec<String>) {
    let weighted = inputs.amount_risk * AMOUNT_WEIGHT
        + inputs.payee_risk * PAYEE_WEIGHT
        + inputs.frequency_risk * FREQUENCY_WEIGHT
        + inputs.timing_risk * TIMING_WEIGHT
        + inputs.device_risk * DEVICE_WEIGHT;

    let score = (weighted.clamp(0.0, 1.0) * 100.0).round() as i32;

    let mut reasons = Vec::new();
    if inputs.payee_risk > PAYEE_REASON_MIN {
        reasons.push("Payee address looks unverified or suspicious".to_string());
    }
    if inputs.amount_risk > AMOUNT_REASON_MIN {
        reasons.push("Unusually high transaction amount".to_string());
    }
    if inputs.timing_risk > TIMING_REASON_MIN {
        reasons.push("Transaction initiated at unusual hours".to_string());
    }
    if inputs.frequency_risk > FREQUENCY_REASON_MIN {
        reasons.push("Rapid transaction frequency detected".to_string());
    }
    if inputs.device_risk > DEVICE_REASON_MIN {
        reasons.push("Transaction from a new or untrusted device".to_string());
    }

    if reasons.is_empty() {
        reasons.push(NORMAL_PATTERN_REASON.to_string());
    }

    (score, reasons)
}

// ============================================================================
// TESTS
// ============================================================================
