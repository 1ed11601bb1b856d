//! Scoring Engine
//!
//! Weighted risk scoring over the five coarse inputs, with an optional
//! model-blended payee risk and amplification for known scam
//! combinations. The reported label uses this server's conservative
//! bands; clients re-derive labels through the shared classifier.

use safescan_core::features::{self, RiskInputs};
use safescan_core::model;
use safescan_core::RiskLabel;

use crate::models::AnalysisResponse;

// Base weights: large transfers and unknown receivers dominate.
const AMOUNT_WEIGHT: f64 = 0.30;
const PAYEE_WEIGHT: f64 = 0.25;
const FREQUENCY_WEIGHT: f64 = 0.20;
const TIMING_WEIGHT: f64 = 0.15;
const DEVICE_WEIGHT: f64 = 0.10;

// Rule-based vs model share of payee risk when the blend is active
const RULE_BLEND: f64 = 0.4;
const MODEL_BLEND: f64 = 0.6;

// Label bands on the 0-1 scale
const DANGER_MIN: f64 = 0.60;
const WARNING_MIN: f64 = 0.30;

/// Providers never called out as unverified in reasons
const TRUSTED_PROVIDERS: &[&str] = &["paytm", "phonepe", "googlepay", "gpay", "amazonpay", "bhim"];

/// Score one transaction. Deterministic for a given request when no
/// model artifact is present; with one, the payee component is blended
/// with the model's phishing probability.
pub fn analyze_transaction(req: &RiskInputs) -> AnalysisResponse {
    let amount_risk = req.amount_risk.clamp(0.0, 1.0);
    let mut payee_risk = req.payee_risk.clamp(0.0, 1.0);
    let frequency_risk = req.frequency_risk.clamp(0.0, 1.0);
    let timing_risk = req.timing_risk.clamp(0.0, 1.0);
    let device_risk = req.device_risk.clamp(0.0, 1.0);

    // Model-blended payee risk when the classifier asset is available.
    // A load or inference failure just leaves the rule-based value.
    if let Some(payee_id) = req.payee_id.as_deref() {
        match model::predict_phishing(&features::extract(payee_id)) {
            Ok(probability) => {
                let ml = f64::from(probability) / 100.0;
                tracing::debug!(
                    "Blending payee risk for {}: rule-based {:.2}, model {:.2}",
                    payee_id,
                    payee_risk,
                    ml
                );
                payee_risk = payee_risk * RULE_BLEND + ml * MODEL_BLEND;
            }
            Err(e) => tracing::debug!("Model blend unavailable: {}", e),
        }
    }

    let base_risk = amount_risk * AMOUNT_WEIGHT
        + payee_risk * PAYEE_WEIGHT
        + frequency_risk * FREQUENCY_WEIGHT
        + timing_risk * TIMING_WEIGHT
        + device_risk * DEVICE_WEIGHT;

    let mut reasons = Vec::new();
    let mut amplification = 1.0;

    // Dangerous combinations amplify the base score.
    if timing_risk > 0.6 && amount_risk > 0.5 {
        amplification *= 1.3;
        reasons.push("High-risk pattern: Large transaction during unusual hours".to_string());
    }
    if payee_risk > 0.6 && amount_risk > 0.5 {
        amplification *= 1.25;
        reasons.push("High-risk pattern: Large payment to unverified recipient".to_string());
    }
    if frequency_risk > 0.7 {
        amplification *= 1.15;
        reasons.push("Suspicious velocity: Multiple rapid transactions detected".to_string());
    }

    let risk = (base_risk * amplification).clamp(0.0, 1.0);

    // Contextual explanations
    if amount_risk > 0.6 {
        match req.amount_value {
            Some(value) if value >= 5_000.0 && value % 1_000.0 == 0.0 => reasons.push(format!(
                "\u{20b9}{:.0} is a round amount (common in scams)",
                value
            )),
            Some(value) if value > 10_000.0 => {
                reasons.push(format!("High-value transaction: \u{20b9}{:.0}", value))
            }
            Some(value) => reasons.push(format!(
                "Transaction amount: \u{20b9}{:.0} flagged as unusual",
                value
            )),
            None => reasons.push("Unusually high transaction amount".to_string()),
        }
    }

    if payee_risk > 0.5 {
        match req
            .payee_id
            .as_deref()
            .and_then(|id| id.split_once('@').map(|(_, domain)| (id, domain)))
        {
            Some((id, domain)) => {
                let domain_lower = domain.to_lowercase();
                if TRUSTED_PROVIDERS.iter().any(|p| domain_lower.contains(p)) {
                    reasons.push(format!("First-time transaction to {}", id));
                } else {
                    reasons.push(format!("Unverified payment provider: @{}", domain));
                }
            }
            None => reasons.push("Payee has suspicious or unverified history".to_string()),
        }
    }

    if timing_risk > 0.6 {
        match req.hour_of_day {
            Some(hour) if hour >= 23 || hour < 6 => reasons.push(format!(
                "Transaction at {:02}:00 (high-risk hours: 11 PM - 6 AM)",
                hour
            )),
            Some(hour) => reasons.push(format!("Transaction at unusual time: {:02}:00", hour)),
            None => reasons.push("Transaction initiated at unusual hours".to_string()),
        }
    }

    if frequency_risk > 0.5 {
        reasons.push("Rapid transaction frequency detected".to_string());
    }
    if device_risk > 0.5 {
        reasons.push("Transaction from a new or untrusted device".to_string());
    }

    let risk_label = if risk >= DANGER_MIN {
        RiskLabel::Danger
    } else if risk >= WARNING_MIN {
        RiskLabel::Warning
    } else {
        RiskLabel::Safe
    };

    // At least one reason, always.
    if reasons.is_empty() {
        reasons.push(if risk < WARNING_MIN {
            "Transaction pattern appears normal".to_string()
        } else {
            "Multiple minor risk factors detected".to_string()
        });
    }

    AnalysisResponse {
        risk_score: (risk * 100.0).round() as i32,
        risk_label,
        reasons,
        timestamp: chrono::Utc::now(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
