//! Remote Scoring Client
//!
//! HTTP client for the scoring server's `/analyze` endpoint. One bounded
//! attempt per evaluation - no retries at this layer; any failure hands
//! control to the local fallback chain.

use std::time::Duration;

use serde::Deserialize;

use crate::constants;
use crate::features::RiskInputs;
use crate::verdict::RiskLabel;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Remote scoring configuration
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_analyze_url(),
            timeout_ms: constants::DEFAULT_TIMEOUT_MS,
        }
    }
}

// ============================================================================
// WIRE TYPES
// ============================================================================

/// Response shape of `POST /analyze`
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAssessment {
    pub risk_label: RiskLabel,
    pub risk_score: i32,
    pub reasons: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ============================================================================
// CLIENT
// ============================================================================

/// Remote scoring client
pub struct RemoteClient {
    config: RemoteConfig,
    http_client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// POST the risk inputs for scoring, bounded by the configured
    /// timeout. Cancellation drops the request and releases the
    /// connection.
    pub async fn analyze(&self, inputs: &RiskInputs) -> Result<RemoteAssessment, RemoteError> {
        let url = format!("{}/analyze", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(inputs)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteError::Timeout(self.config.timeout_ms)
                } else {
                    RemoteError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RemoteError::Server(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Remote scoring errors; all of them mean "use the next fallback layer"
#[derive(Debug, Clone)]
pub enum RemoteError {
    Network(String),
    Timeout(u64),
    Server(u16),
    Parse(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Timeout(ms) => write!(f, "Timed out after {} ms", ms),
            Self::Server(code) => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for RemoteError {}
