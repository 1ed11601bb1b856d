//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default scoring endpoint, only edit this file.

/// Default remote scoring service URL
///
/// This is the fallback URL when no environment variable is set.
pub const DEFAULT_ANALYZE_URL: &str = "http://localhost:8000";

/// Default remote scoring timeout (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default local classifier model path
pub const DEFAULT_MODEL_PATH: &str = "models/upi_classifier.onnx";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SafeScan";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scoring service base URL from environment or use default
pub fn get_analyze_url() -> String {
    std::env::var("SAFESCAN_API_URL")
        .unwrap_or_else(|_| DEFAULT_ANALYZE_URL.to_string())
}

/// Get remote scoring timeout from environment or use default
pub fn get_timeout_ms() -> u64 {
    std::env::var("SAFESCAN_ANALYZE_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}

/// Get classifier model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("SAFESCAN_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
