//! UPI String Codec
//!
//! Parses a scanned deep link into `UpiParams` and serializes params back
//! into a canonical `upi://pay?...` link. Parsing never panics on
//! untrusted input - every failure is a typed `UpiError`.

use url::form_urlencoded;

use super::types::UpiParams;

/// Canonical scheme prefix emitted by `build_upi_deeplink`
pub const UPI_SCHEME_PREFIX: &str = "upi://pay?";

/// Currency applied by `build_upi_deeplink` when the caller supplies none
pub const DEFAULT_CURRENCY: &str = "INR";

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Codec failures. Parse-time variants mean "not a valid code"; build-time
/// variants carry the specific validation that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpiError {
    /// Required `pa` key absent or empty
    MissingPayeeAddress,
    /// Broken percent-encoding or an otherwise unparsable payload
    MalformedInput(String),
    /// Payee address lacks the `@` separator
    InvalidPayeeFormat,
    /// Amount present but not a strictly positive number
    InvalidAmount,
}

impl std::fmt::Display for UpiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPayeeAddress => write!(f, "Missing payee address (pa)"),
            Self::MalformedInput(msg) => write!(f, "Malformed UPI string: {}", msg),
            Self::InvalidPayeeFormat => write!(f, "Invalid UPI ID format - must contain @"),
            Self::InvalidAmount => write!(f, "Invalid amount - must be a positive number"),
        }
    }
}

impl std::error::Error for UpiError {}

// ============================================================================
// PARSE
// ============================================================================

/// Parse a scanned UPI string into structured params.
///
/// Accepts a full scheme-qualified deep link (`upi://pay?...`), any other
/// scheme-qualified form, a bare `pay?...`, or just the query string. The
/// recognized keys are `pa`, `pn`, `am`, `cu`, `tn`, `tr`; values are
/// percent-decoded and the first occurrence of a key wins. `cu` is left
/// untouched here - the INR default belongs to `build_upi_deeplink` only.
pub fn parse_upi_string(raw: &str) -> Result<UpiParams, UpiError> {
    // Everything up to the first '?' is scheme/path noise; without a '?'
    // the whole input is treated as the query.
    let query = match raw.split_once('?') {
        Some((_, q)) => q,
        None => raw,
    };

    validate_percent_encoding(query)?;

    let mut pa = None;
    let mut pn = None;
    let mut am = None;
    let mut cu = None;
    let mut tn = None;
    let mut tr = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            "pa" => &mut pa,
            "pn" => &mut pn,
            "am" => &mut am,
            "cu" => &mut cu,
            "tn" => &mut tn,
            "tr" => &mut tr,
            _ => continue,
        };
        if slot.is_none() && !value.is_empty() {
            *slot = Some(value.into_owned());
        }
    }

    let payee_address = pa.ok_or(UpiError::MissingPayeeAddress)?;
    if !payee_address.contains('@') {
        return Err(UpiError::MalformedInput(
            "payee address must contain '@'".to_string(),
        ));
    }

    Ok(UpiParams {
        payee_address,
        payee_name: pn,
        amount: am,
        currency: cu,
        note: tn,
        reference: tr,
    })
}

/// Reject queries with a '%' that does not start a two-digit hex escape.
fn validate_percent_encoding(query: &str) -> Result<(), UpiError> {
    let bytes = query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(UpiError::MalformedInput(
                    "invalid percent-encoding".to_string(),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

// ============================================================================
// BUILD
// ============================================================================

/// Serialize params into a canonical deep link for payment hand-off.
///
/// Key order is fixed (`pa, pn, am, cu, tn, tr`), values are
/// percent-encoded, and `cu` is always emitted (defaulting to INR).
/// `parse_upi_string(build_upi_deeplink(p))` reproduces an equivalent `p`.
pub fn build_upi_deeplink(params: &UpiParams) -> Result<String, UpiError> {
    if !params.payee_address.contains('@') {
        return Err(UpiError::InvalidPayeeFormat);
    }

    if let Some(amount) = params.amount.as_deref() {
        let value: f64 = amount.parse().map_err(|_| UpiError::InvalidAmount)?;
        if !value.is_finite() || value <= 0.0 {
            return Err(UpiError::InvalidAmount);
        }
    }

    let mut query = format!("pa={}", urlencoding::encode(&params.payee_address));
    push_pair(&mut query, "pn", params.payee_name.as_deref());
    push_pair(&mut query, "am", params.amount.as_deref());
    push_pair(
        &mut query,
        "cu",
        Some(params.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)),
    );
    push_pair(&mut query, "tn", params.note.as_deref());
    push_pair(&mut query, "tr", params.reference.as_deref());

    Ok(format!("{}{}", UPI_SCHEME_PREFIX, query))
}

fn push_pair(query: &mut String, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
}

// ============================================================================
// MANUAL-PAYMENT INSTRUCTIONS
// ============================================================================

/// Human-readable instructions for paying manually when the deep-link
/// hand-off is unavailable on the device.
pub fn payment_instructions(params: &UpiParams) -> String {
    let mut lines = vec![
        "Open your UPI app (GPay / PhonePe / Paytm)".to_string(),
        String::new(),
        "Payment Details:".to_string(),
        format!(
            "\u{2022} To: {}",
            params.payee_name.as_deref().unwrap_or(&params.payee_address)
        ),
    ];

    if let Some(amount) = &params.amount {
        lines.push(format!("\u{2022} Amount: \u{20b9}{}", amount));
    }
    if let Some(note) = &params.note {
        lines.push(format!("\u{2022} Note: {}", note));
    }

    lines.push(String::new());
    lines.push("UPI ID copied to clipboard".to_string());

    lines.join("\n")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_deep_link() {
        let params =
            parse_upi_string("upi://pay?pa=merchant@upi&pn=Test%20Merchant&am=100&cu=INR")
                .unwrap();
        assert_eq!(params.payee_address, "merchant@upi");
        assert_eq!(params.payee_name.as_deref(), Some("Test Merchant"));
        assert_eq!(params.amount.as_deref(), Some("100"));
        assert_eq!(params.currency.as_deref(), Some("INR"));
    }

    #[test]
    fn parses_alternate_scheme() {
        let params = parse_upi_string("pay://pay?pa=merchant@upi&am=100").unwrap();
        assert_eq!(params.payee_address, "merchant@upi");
        assert_eq!(params.amount.as_deref(), Some("100"));
    }

    #[test]
    fn parses_without_scheme_prefix() {
        let params = parse_upi_string("pay?pa=test@paytm").unwrap();
        assert_eq!(params.payee_address, "test@paytm");
        assert_eq!(params.currency, None);
    }

    #[test]
    fn missing_pa_yields_no_result() {
        assert_eq!(
            parse_upi_string("upi://pay?pn=SomeMerchant"),
            Err(UpiError::MissingPayeeAddress)
        );
    }

    #[test]
    fn empty_pa_yields_no_result() {
        assert_eq!(
            parse_upi_string("upi://pay?pa=&pn=Shop"),
            Err(UpiError::MissingPayeeAddress)
        );
    }

    #[test]
    fn garbage_input_fails_gracefully() {
        assert_eq!(
            parse_upi_string("not-a-upi-string-at-all"),
            Err(UpiError::MissingPayeeAddress)
        );
    }

    #[test]
    fn pa_without_at_is_malformed() {
        assert!(matches!(
            parse_upi_string("upi://pay?pa=merchant"),
            Err(UpiError::MalformedInput(_))
        ));
    }

    #[test]
    fn broken_percent_encoding_is_malformed() {
        assert!(matches!(
            parse_upi_string("upi://pay?pa=merchant@upi&pn=Bad%2"),
            Err(UpiError::MalformedInput(_))
        ));
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let params = parse_upi_string("pay?pa=first@upi&pa=second@upi").unwrap();
        assert_eq!(params.payee_address, "first@upi");
    }

    #[test]
    fn builds_deep_link_with_all_params() {
        let mut params = UpiParams::new("merchant@upi");
        params.payee_name = Some("Shop".to_string());
        params.amount = Some("99.50".to_string());
        params.currency = Some("INR".to_string());

        let link = build_upi_deeplink(&params).unwrap();
        assert!(link.starts_with(UPI_SCHEME_PREFIX));
        assert!(link.contains("pa=merchant%40upi"));
        assert!(link.contains("cu=INR"));
        assert!(link.contains("am=99.50"));
    }

    #[test]
    fn always_includes_default_currency() {
        let link = build_upi_deeplink(&UpiParams::new("a@b")).unwrap();
        assert!(link.contains("cu=INR"));
    }

    #[test]
    fn build_rejects_missing_at() {
        assert_eq!(
            build_upi_deeplink(&UpiParams::new("invalid-upi")),
            Err(UpiError::InvalidPayeeFormat)
        );
    }

    #[test]
    fn build_rejects_negative_amount() {
        let mut params = UpiParams::new("a@b");
        params.amount = Some("-50".to_string());
        assert_eq!(build_upi_deeplink(&params), Err(UpiError::InvalidAmount));
    }

    #[test]
    fn build_rejects_zero_amount() {
        let mut params = UpiParams::new("a@b");
        params.amount = Some("0".to_string());
        assert_eq!(build_upi_deeplink(&params), Err(UpiError::InvalidAmount));
    }

    #[test]
    fn build_rejects_non_numeric_amount() {
        let mut params = UpiParams::new("a@b");
        params.amount = Some("ten".to_string());
        assert_eq!(build_upi_deeplink(&params), Err(UpiError::InvalidAmount));
    }

    #[test]
    fn round_trip_preserves_params() {
        let mut params = UpiParams::new("merchant@okaxis");
        params.payee_name = Some("Corner Store".to_string());
        params.amount = Some("250.75".to_string());
        params.note = Some("Groceries & more".to_string());
        params.reference = Some("INV-2024-001".to_string());

        let link = build_upi_deeplink(&params).unwrap();
        let parsed = parse_upi_string(&link).unwrap();

        assert_eq!(parsed.payee_address, params.payee_address);
        assert_eq!(parsed.payee_name, params.payee_name);
        assert_eq!(parsed.amount, params.amount);
        // build normalizes an absent currency to INR
        assert_eq!(parsed.currency.as_deref(), Some(DEFAULT_CURRENCY));
        assert_eq!(parsed.note, params.note);
        assert_eq!(parsed.reference, params.reference);
    }

    #[test]
    fn instructions_mention_payee_and_amount() {
        let mut params = UpiParams::new("merchant@upi");
        params.payee_name = Some("Shop".to_string());
        params.amount = Some("99.50".to_string());

        let text = payment_instructions(&params);
        assert!(text.contains("To: Shop"));
        assert!(text.contains("99.50"));
    }
}
