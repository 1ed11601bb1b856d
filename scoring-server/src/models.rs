//! Wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use safescan_core::RiskLabel;

/// Response shape of `POST /analyze`; `/history` replays the same
/// records. The request body is `safescan_core::RiskInputs` - the client
/// and this server share one definition of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// 0-100 integer
    pub risk_score: i32,
    pub risk_label: RiskLabel,
    /// Always at least one entry
    pub reasons: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
