//! Inference Engine - ONNX Runtime Integration
//!
//! Loads and runs the two-class payee classifier. The session is created
//! at most once per process, on first use, and shared by every
//! evaluation afterwards.

use ndarray::Array2;
use once_cell::sync::OnceCell;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::constants;
use crate::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// STATE
// ============================================================================

/// Process-wide session handle. `OnceCell` resolves initialization races:
/// exactly one load succeeds and every other caller reuses its result.
/// A failed load leaves the cell empty so a later call may retry once the
/// asset appears.
static SESSION: OnceCell<Mutex<Session>> = OnceCell::new();

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// SESSION LOADING
// ============================================================================

fn load_session(model_path: &str) -> Result<Mutex<Session>, InferenceError> {
    log::info!("Loading classifier model from: {}", model_path);

    if !std::path::Path::new(model_path).exists() {
        return Err(InferenceError(format!("Model not found: {}", model_path)));
    }

    let session = Session::builder()
        .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
        .commit_from_file(model_path)
        .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

    log::info!("Classifier model loaded");
    Ok(Mutex::new(session))
}

/// True once some caller has loaded the model.
pub fn is_model_loaded() -> bool {
    SESSION.get().is_some()
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Phishing probability for a feature vector, scaled to 0-100.
pub fn predict_phishing(features: &FeatureVector) -> Result<f32, InferenceError> {
    features
        .validate()
        .map_err(|e| InferenceError(e.to_string()))?;

    let session = SESSION.get_or_try_init(|| load_session(&constants::get_model_path()))?;
    let mut session = session.lock();

    let input_array =
        Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

    // Two-class exports list a label output followed by the probability
    // output; single-output models just expose the probabilities.
    let output_name = session
        .outputs
        .get(1)
        .or_else(|| session.outputs.first())
        .map(|o| o.name.clone())
        .ok_or_else(|| InferenceError("No output defined".to_string()))?;

    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

    let outputs = session
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    let output = outputs
        .get(&output_name)
        .ok_or_else(|| InferenceError("No output".to_string()))?;

    let probabilities = output
        .try_extract_tensor::<f32>()
        .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

    // [prob_legitimate, prob_phishing]
    let phishing = probabilities
        .1
        .get(1)
        .or_else(|| probabilities.1.first())
        .copied()
        .ok_or_else(|| InferenceError("Empty probability output".to_string()))?;

    Ok((phishing * 100.0).clamp(0.0, 100.0))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract;
    use std::io::Write;

    #[test]
    fn missing_model_asset_is_an_error_not_a_panic() {
        // No model file ships with the test environment, so the lazy load
        // must surface a typed error for the orchestrator to catch.
        let result = predict_phishing(&extract("merchant@paytm"));
        if !is_model_loaded() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn corrupt_model_asset_fails_to_load() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"definitely not an onnx graph")
            .expect("write temp file");

        let loaded = load_session(file.path().to_str().expect("utf-8 temp path"));
        assert!(loaded.is_err());
    }

    #[test]
    fn stale_layout_is_rejected_before_inference() {
        let mut vector = extract("merchant@paytm");
        vector.version = vector.version.wrapping_add(1);

        let result = predict_phishing(&vector);
        assert!(result.is_err());
    }
}
