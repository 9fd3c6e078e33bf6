//! Operational HTTP endpoints.
//!
//! - `/health-check` : fixed greeting, always 200
//! - `/readyz`       : readiness (503 when draining)
//! - `/metrics`      : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tally_core::message::HEALTH_MESSAGE;

use crate::app_state::AppState;

pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
