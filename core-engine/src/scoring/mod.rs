//! Scoring Module - Risk Scoring Orchestration
//!
//! Sequences a bounded remote scoring call, the on-device model, and the
//! deterministic formula into one resolved assessment. Failure at any
//! layer degrades to the next; the caller never sees an error from
//! scoring itself.

pub mod remote;
pub mod formula;
pub mod orchestrator;

pub use formula::formula_score;
pub use orchestrator::{analyze_scan, score};
pub use remote::{RemoteAssessment, RemoteClient, RemoteConfig, RemoteError};
