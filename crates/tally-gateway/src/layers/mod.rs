//! Request-scoped middleware around every route.
//!
//! Outermost first:
//! 1. request id (`x-request-id`, generated when absent)
//! 2. client IP extraction
//! 3. structured request logging
//! 4. request id echoed on the response
//! 5. panic recovery (500)
//! 6. request timeout (408)
//! 7. header size guard (431)

pub mod client_ip;
pub mod header_limit;
pub mod panic;

use std::sync::Arc;

use axum::{extract::Request, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServerSection;
use crate::obs::metrics::GatewayMetrics;

pub use client_ip::ClientIp;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap `router` with the full middleware stack.
pub fn apply(router: Router, server: &ServerSection, metrics: Arc<GatewayMetrics>) -> Router {
    let stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(client_ip::capture_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::custom(panic::panic_response(metrics)))
        // Dropping a handler here is safe for the counters: no strategy awaits
        // while it holds its critical section.
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::from_fn_with_state(
            server.max_header_bytes,
            header_limit::enforce_header_limit,
        ));

    router.layer(stack)
}

fn request_span(req: &Request) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    let client_ip = req
        .extensions()
        .get::<ClientIp>()
        .map(|ip| ip.0.to_string())
        .unwrap_or_else(|| "-".into());

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id,
        client_ip = %client_ip,
    )
}
