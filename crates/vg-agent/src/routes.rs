//! REST bridge — on-demand health checks over HTTP.
//!
//! Runs alongside the scheduled batch mode so the hub (or an operator) can
//! trigger a diagnostic and get the compact summary back. Handlers never
//! fail on hub connectivity problems: the pipeline degrades to an All
//! Clear packet by design.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use vg_diag::{HealthSummary, Pipeline};

use crate::channels::HubApiChannel;

/// Shared bridge state, cheap to clone into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Kept separately from the orchestrator inside the pipeline so
    /// handlers can fetch the system snapshot.
    pub hub: HubApiChannel,
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/health/report", get(health_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /ping — liveness check.
async fn ping() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health — run a diagnostic, return the compact summary.
async fn health(State(state): State<AppState>) -> Json<HealthSummary> {
    let snapshot = state.hub.system_snapshot().await;
    let report = state.pipeline.run(&snapshot).await;
    Json(report.summary)
}

/// GET /health/report — run a diagnostic, return the full markdown packet.
async fn health_report(State(state): State<AppState>) -> String {
    let snapshot = state.hub.system_snapshot().await;
    let report = state.pipeline.run(&snapshot).await;
    report.markdown
}
