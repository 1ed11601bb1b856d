//! Features Module - Deterministic Feature Extraction
//!
//! Two layers of features come out of a scan:
//! - the 11-feature lexical vector fed to the classifier model
//! - the five coarse risk inputs shared with the remote scoring contract
//!
//! Both are pure functions of their inputs. Hour-of-day is always an
//! explicit parameter; nothing in this module reads the wall clock.

pub mod layout;
pub mod vector;
pub mod extract;
pub mod context;

// Re-export common types
pub use layout::{feature_index, feature_name, layout_hash, FEATURE_COUNT, FEATURE_VERSION};
pub use vector::FeatureVector;
pub use extract::{extract, LEGITIMATE_BRANDS, PHISHING_KEYWORDS, TRUSTED_DOMAINS};
pub use context::RiskInputs;
