//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, layers, ops, visits};

pub fn build_router(state: AppState) -> Router {
    let server = state.cfg().server.clone();
    let metrics = state.metrics();

    let routes = Router::new()
        .route("/health-check", get(ops::health_check))
        .route("/visit-with-mutex", get(visits::visit_with_mutex))
        .route("/visit-with-atomic", get(visits::visit_with_atomic))
        .route("/visit-with-channel", get(visits::visit_with_channel))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state);

    layers::apply(routes, &server, metrics)
}
