//! SafeScan Core - UPI Scan Risk Engine
//!
//! Evaluates the risk of a scanned UPI deep-link before the payer is
//! allowed to proceed, and rebuilds a canonical deep-link for payment
//! hand-off once they do.
//!
//! ## Architecture
//! - `upi/` - Deep-link codec (strict parse / canonical build)
//! - `features/` - Deterministic feature extraction (11-feature lexical
//!   vector + the five coarse risk inputs)
//! - `model/` - Local ONNX inference (lazy, process-wide session)
//! - `scoring/` - Orchestrator: remote service -> local model -> formula
//! - `verdict/` - Risk labels, thresholds, and the shared classifier

pub mod constants;
pub mod upi;
pub mod features;
pub mod model;
pub mod scoring;
pub mod verdict;

// Re-export the evaluation entry points and core types
pub use features::{FeatureVector, RiskInputs, FEATURE_COUNT};
pub use scoring::{analyze_scan, score};
pub use upi::{UpiError, UpiParams};
pub use verdict::{classify, RiskAssessment, RiskLabel, ScoreSource};
