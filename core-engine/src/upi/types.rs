//! UPI Types
//!
//! Data structures for the payment deep-link protocol.
//! No logic - the codec lives in `codec.rs`.

use serde::{Deserialize, Serialize};

/// Parsed payment intent from a scanned deep link.
///
/// `payee_address` is the only required field and always contains `@`:
/// the codec rejects anything else up front, so a value of this type is
/// never half-built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpiParams {
    /// Payee address (VPA), `user@handle`
    pub payee_address: String,
    /// Payee display name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payee_name: Option<String>,
    /// Amount as a decimal string, e.g. "99.50"
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<String>,
    /// Currency code; `build` defaults this to "INR" when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub currency: Option<String>,
    /// Transaction note
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    /// Transaction reference
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reference: Option<String>,
}

impl UpiParams {
    /// Minimal params carrying just a payee address.
    pub fn new(payee_address: impl Into<String>) -> Self {
        Self {
            payee_address: payee_address.into(),
            payee_name: None,
            amount: None,
            currency: None,
            note: None,
            reference: None,
        }
    }

    /// Username and handle halves of the payee address, split on the
    /// first `@`.
    pub fn split_address(&self) -> Option<(&str, &str)> {
        self.payee_address.split_once('@')
    }
}
