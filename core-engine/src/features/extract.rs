//! Payee Feature Extraction
//!
//! Converts a payee address into the 11-feature vector consumed by the
//! classifier. Pure and deterministic: the same address yields a
//! bit-identical vector on every call, wherever it runs. Inputs without
//! an `@` degrade to a low-information vector - this path never fails.

use std::collections::BTreeMap;

use super::layout::FEATURE_COUNT;
use super::vector::FeatureVector;

// ============================================================================
// LEXICONS
// ============================================================================

/// Known payment-provider handle suffixes
pub const TRUSTED_DOMAINS: &[&str] = &[
    "paytm", "phonepe", "googlepay", "gpay", "amazonpay",
    "ybl", "okaxis", "oksbi", "okhdfcbank", "okicici",
    "ibl", "axl", "fbl", "airtel", "jio", "bhim",
];

/// Social-engineering keywords commonly planted in phishing VPAs
pub const PHISHING_KEYWORDS: &[&str] = &[
    "refund", "support", "verify", "urgent", "prize", "winner",
    "claim", "reward", "bonus", "cashback", "offer", "customer",
    "service", "help", "official", "team", "admin", "security",
];

/// Known legitimate merchant brands (typosquatting reference list)
pub const LEGITIMATE_BRANDS: &[&str] = &[
    "zomato", "swiggy", "uber", "ola", "flipkart", "amazon",
    "myntra", "bigbasket", "dunzo", "grofers", "meesho",
    "bookmyshow", "makemytrip", "oyo", "airbnb", "paytm",
    "phonepe", "googlepay", "gpay",
];

/// Placeholder handles that carry zero reputation
pub const PLACEHOLDER_DOMAINS: &[&str] = &["unknown", "temp", "test", "fake"];

/// Brand distance reported when there is no username to compare
pub const NO_BRAND_MATCH: f32 = 999.0;

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the feature vector for a payee address.
pub fn extract(payee_address: &str) -> FeatureVector {
    let Some((username, domain)) = payee_address.split_once('@') else {
        // No '@': structure is unknowable. Degrade, never fail.
        let mut values = [0.0f32; FEATURE_COUNT];
        values[2] = payee_address.chars().count() as f32;
        values[9] = NO_BRAND_MATCH;
        return FeatureVector::from_values(values);
    };

    let username_lower = username.to_lowercase();
    let domain_lower = domain.to_lowercase();

    let username_len = username.chars().count();
    let digit_count = username.chars().filter(|c| c.is_ascii_digit()).count();
    let special_count = username.chars().filter(|c| !c.is_alphanumeric()).count();

    let has_trusted_domain = TRUSTED_DOMAINS.iter().any(|d| domain_lower.contains(d));
    let has_phishing_keyword = PHISHING_KEYWORDS.iter().any(|k| username_lower.contains(k));
    let starts_with_digit = username.chars().next().is_some_and(|c| c.is_ascii_digit());

    let domain_reputation = if has_trusted_domain {
        1.0
    } else if domain.chars().count() < 3 || PLACEHOLDER_DOMAINS.contains(&domain_lower.as_str()) {
        0.0
    } else {
        0.5
    };

    FeatureVector::from_values([
        username_len as f32,
        domain.chars().count() as f32,
        payee_address.chars().count() as f32,
        ratio(digit_count, username_len),
        ratio(special_count, username_len),
        shannon_entropy(username),
        flag(has_trusted_domain),
        flag(has_phishing_keyword),
        flag(starts_with_digit),
        min_brand_distance(&username_lower),
        domain_reputation,
    ])
}

fn ratio(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32
    }
}

fn flag(set: bool) -> f32 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// Shannon entropy over the character frequency distribution.
///
/// Counts are accumulated in a BTreeMap so summation order (and therefore
/// the floating-point result) is identical across runs.
pub fn shannon_entropy(text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }

    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let length = text.chars().count() as f64;
    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -(p * p.log2())
        })
        .sum();

    entropy as f32
}

/// Minimum Levenshtein distance from the (lowercased) username to any
/// known brand.
fn min_brand_distance(username_lower: &str) -> f32 {
    LEGITIMATE_BRANDS
        .iter()
        .map(|brand| levenshtein(username_lower, brand))
        .min()
        .map(|d| d as f32)
        .unwrap_or(NO_BRAND_MATCH)
}

/// Classic two-row Levenshtein edit distance over chars.
pub fn levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_is_deterministic() {
        let first = extract("merchant@paytm");
        let second = extract("merchant@paytm");
        assert_eq!(first.values, second.values);
        assert_eq!(first.layout_hash, second.layout_hash);
    }

    #[test]
    fn degenerate_vector_for_missing_at() {
        let vector = extract("not-a-upi");
        assert_eq!(
            vector.values,
            [0.0, 0.0, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, NO_BRAND_MATCH, 0.0]
        );
    }

    #[test]
    fn trusted_merchant_features() {
        let vector = extract("merchant@paytm");
        assert_eq!(vector.get_by_name("username_length"), Some(8.0));
        assert_eq!(vector.get_by_name("domain_length"), Some(5.0));
        assert_eq!(vector.get_by_name("total_length"), Some(14.0));
        assert_eq!(vector.get_by_name("has_trusted_domain"), Some(1.0));
        assert_eq!(vector.get_by_name("has_phishing_keyword"), Some(0.0));
        assert_eq!(vector.get_by_name("starts_with_digit"), Some(0.0));
        assert_eq!(vector.get_by_name("domain_reputation"), Some(1.0));
    }

    #[test]
    fn numeric_user_on_placeholder_domain() {
        let vector = extract("98765@unknown");
        assert_eq!(vector.get_by_name("digit_ratio"), Some(1.0));
        assert_eq!(vector.get_by_name("starts_with_digit"), Some(1.0));
        assert_eq!(vector.get_by_name("has_trusted_domain"), Some(0.0));
        assert_eq!(vector.get_by_name("domain_reputation"), Some(0.0));
    }

    #[test]
    fn phishing_keyword_is_flagged() {
        let vector = extract("refund-support@okoki");
        assert_eq!(vector.get_by_name("has_phishing_keyword"), Some(1.0));
        assert!(vector.get_by_name("special_char_ratio").unwrap() > 0.0);
    }

    #[test]
    fn short_domain_has_zero_reputation() {
        let vector = extract("shop@ab");
        assert_eq!(vector.get_by_name("domain_reputation"), Some(0.0));
    }

    #[test]
    fn unknown_but_plausible_domain_is_neutral() {
        let vector = extract("shop@citybank");
        assert_eq!(vector.get_by_name("domain_reputation"), Some(0.5));
    }

    #[test]
    fn typosquat_has_small_brand_distance() {
        let vector = extract("zomatoo@upibank");
        assert_eq!(vector.get_by_name("min_brand_distance"), Some(1.0));
    }

    #[test]
    fn entropy_of_uniform_text_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn entropy_of_two_symbols_is_one_bit() {
        assert_eq!(shannon_entropy("ab"), 1.0);
    }

    #[test]
    fn entropy_of_empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn levenshtein_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("paytm", "paytm"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }
}
