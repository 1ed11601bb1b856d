//! Model Module - Local Inference Path
//!
//! On-device classifier used when the scoring server is unreachable.
//! Loading the model artifact is an out-of-band concern; a missing or
//! broken asset is a normal fallback trigger, never fatal.

pub mod inference;

pub use inference::{is_model_loaded, predict_phishing, InferenceError};
