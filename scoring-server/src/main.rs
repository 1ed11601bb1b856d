//! SafeScan Scoring Server
//!
//! Remote analysis backend for SafeScan clients.
//!
//! # Architecture
//!
//! ```text
//! client ──POST /analyze──▶ handlers ──▶ engine (weighted scoring
//!   ▲                                     + optional model blend)
//!   └────GET /history──── in-memory session history
//! ```
//!
//! Scoring is deterministic given the request body and the optional
//! on-disk classifier model; the only state is the session history.

mod config;
mod engine;
mod error;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
use models::AnalysisResponse;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safescan_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("SafeScan Scoring Server starting...");
    tracing::info!(
        "Classifier model path: {}",
        safescan_core::constants::get_model_path()
    );
    if !config.is_production() {
        tracing::warn!("Running in development mode - CORS is wide open");
    }

    // Build application state
    let state = AppState {
        config: config.clone(),
        history: Arc::new(RwLock::new(Vec::new())),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    /// Session-scoped scan history; durable storage is the caller's
    /// concern, not this server's.
    pub history: Arc<RwLock<Vec<AnalysisResponse>>>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/history", get(handlers::history::list))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
