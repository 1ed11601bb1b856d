//! Coarse Risk Inputs
//!
//! The five-feature contract shared by the remote scoring request and the
//! deterministic formula fallback, plus the optional enrichment context.
//! Hour-of-day arrives as an explicit parameter so every value here is
//! reproducible in tests without clock mocking.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::extract::TRUSTED_DOMAINS;
use crate::upi::UpiParams;

// Suspicious VPA shapes scored in `payee_risk`
static NUMERIC_ONLY_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+@").expect("static pattern"));
static PLACEHOLDER_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@(unknown|temp|test)").expect("static pattern"));
static SUSPICIOUS_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)random|temp|fake").expect("static pattern"));

/// Fallback merchant label when the link carries no payee name
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

// ============================================================================
// RISK INPUTS
// ============================================================================

/// The five coarse risk features plus optional enrichment context.
///
/// This is the wire body of `POST /analyze` and the input to the formula
/// fallback. All five risks live in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInputs {
    pub amount_risk: f64,
    pub payee_risk: f64,
    pub frequency_risk: f64,
    pub timing_risk: f64,
    pub device_risk: f64,
    /// Raw payee address, so the scoring side can run its own lexical pass
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payee_id: Option<String>,
    /// Amount in currency units
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount_value: Option<f64>,
    /// Local hour (0-23) at scan time
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hour_of_day: Option<u32>,
}

impl RiskInputs {
    /// Derive risk inputs from parsed params at the given local hour.
    pub fn from_params(params: &UpiParams, hour_of_day: u32) -> Self {
        let amount = params
            .amount
            .as_deref()
            .and_then(|a| a.parse::<f64>().ok())
            .unwrap_or(0.0);

        Self {
            amount_risk: amount_risk(amount),
            payee_risk: payee_risk(&params.payee_address, params.payee_name.as_deref()),
            // Placeholders until transaction history and device
            // fingerprinting exist upstream of the scanner.
            frequency_risk: 0.1,
            timing_risk: timing_risk(hour_of_day),
            device_risk: 0.0,
            payee_id: Some(params.payee_address.clone()),
            amount_value: (amount > 0.0).then_some(amount),
            hour_of_day: Some(hour_of_day),
        }
    }
}

// ============================================================================
// HEURISTICS
// ============================================================================

/// Amount risk band: larger transfers are stronger fraud signals.
pub fn amount_risk(amount: f64) -> f64 {
    if amount > 10_000.0 {
        0.8
    } else if amount > 5_000.0 {
        0.5
    } else if amount > 1_000.0 {
        0.3
    } else {
        0.1
    }
}

/// Timing risk band for a local hour: late-night transactions (11 PM -
/// 6 AM) score highest.
pub fn timing_risk(hour_of_day: u32) -> f64 {
    if hour_of_day >= 23 || hour_of_day < 6 {
        0.7
    } else if (6..8).contains(&hour_of_day) || (21..23).contains(&hour_of_day) {
        0.4
    } else {
        0.1
    }
}

/// Payee risk from lexical patterns in the address and the display name.
pub fn payee_risk(payee_address: &str, payee_name: Option<&str>) -> f64 {
    let mut risk: f64 = 0.0;

    let patterns: [&Regex; 3] = [&NUMERIC_ONLY_USER, &PLACEHOLDER_DOMAIN, &SUSPICIOUS_KEYWORD];
    for pattern in patterns {
        if pattern.is_match(payee_address) {
            risk += 0.3;
        }
    }

    let domain = payee_address
        .split_once('@')
        .map(|(_, d)| d.to_lowercase())
        .unwrap_or_default();

    if TRUSTED_DOMAINS.iter().any(|t| domain.contains(t)) {
        risk = (risk - 0.2).max(0.0);
    } else if domain.chars().count() < 3 {
        risk += 0.2;
    }

    match payee_name {
        Some(name) if name != UNKNOWN_MERCHANT && name.chars().count() >= 3 => {}
        _ => risk += 0.1,
    }

    risk.clamp(0.0, 1.0)
}

// ============================================================================
// TESTS
// ============================================================================
