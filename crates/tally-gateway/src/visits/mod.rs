//! Visit endpoints, one per increment strategy.
//!
//! All three share `visit`: increment, then format the message from the
//! returned scalar. The counter is never touched after the increment returns.

use std::time::Instant;

use axum::extract::State;
use tally_core::message::visit_message;
use tally_core::Strategy;

use crate::app_state::AppState;
use crate::error::HttpError;

pub async fn visit_with_mutex(State(state): State<AppState>) -> Result<String, HttpError> {
    visit(&state, Strategy::Mutex).await
}

pub async fn visit_with_atomic(State(state): State<AppState>) -> Result<String, HttpError> {
    visit(&state, Strategy::Atomic).await
}

pub async fn visit_with_channel(State(state): State<AppState>) -> Result<String, HttpError> {
    visit(&state, Strategy::Channel).await
}

async fn visit(state: &AppState, strategy: Strategy) -> Result<String, HttpError> {
    let counter = state.counter(strategy);
    let metrics = state.metrics();
    let labels = [("strategy", strategy.as_str())];

    let started = Instant::now();
    match counter.increment().await {
        Ok(count) => {
            metrics.increment_duration.observe(&labels, started.elapsed());
            metrics.visits.inc(&labels);
            tracing::debug!(%strategy, count, "visit counted");
            Ok(visit_message(count))
        }
        Err(e) => {
            metrics.visit_errors.inc(&labels);
            tracing::error!(%strategy, error = %e, "visit failed");
            Err(HttpError(e))
        }
    }
}
