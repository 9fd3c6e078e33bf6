use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::obs::metrics::GatewayMetrics;

/// Response for a handler panic: a bare 500. The panic is logged and counted;
/// counter guards already released while unwinding.
pub fn panic_response(
    metrics: Arc<GatewayMetrics>,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |err| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "unknown panic payload"
        };

        metrics.record_panic();
        tracing::error!(panic = %detail, "handler panicked");

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
