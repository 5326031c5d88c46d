//! Operational HTTP endpoints.
//!
//! - `/healthz`       : liveness
//! - `/readyz`        : readiness (503 when draining)
//! - `/status`        : JSON usage report with process memory merged in
//! - `/status/reset`  : zero every counter (POST)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use marquee_core::OverallReport;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn status(State(state): State<AppState>) -> Json<OverallReport> {
    let report = state.metrics().snapshot_overall();
    let report = match state.memory() {
        Some(memory) => report.with_memory(memory),
        None => report,
    };
    Json(report)
}

pub async fn reset(State(state): State<AppState>) -> StatusCode {
    state.metrics().reset();
    tracing::info!("metrics reset via /status/reset");
    StatusCode::NO_CONTENT
}
