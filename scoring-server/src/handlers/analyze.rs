//! Analyze handler

use axum::{extract::State, Json};

use safescan_core::RiskInputs;

use crate::engine;
use crate::models::AnalysisResponse;
use crate::{AppError, AppResult, AppState};

/// Score a transaction and record the result in the session history
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<RiskInputs>,
) -> AppResult<Json<AnalysisResponse>> {
    let named_risks = [
        ("amount_risk", req.amount_risk),
        ("payee_risk", req.payee_risk),
        ("frequency_risk", req.frequency_risk),
        ("timing_risk", req.timing_risk),
        ("device_risk", req.device_risk),
    ];
    for (name, value) in named_risks {
        if !value.is_finite() {
            return Err(AppError::ValidationError(format!(
                "{} must be a finite number",
                name
            )));
        }
    }

    let result = engine::analyze_transaction(&req);
    tracing::info!(
        "Scored {} as {} ({})",
        req.payee_id.as_deref().unwrap_or("<no payee>"),
        result.risk_label,
        result.risk_score
    );

    state.history.write().await.push(result.clone());
    Ok(Json(result))
}
