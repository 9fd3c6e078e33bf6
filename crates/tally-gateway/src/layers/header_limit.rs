use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bytes the header block takes on the wire: `name: value\r\n` per field.
pub fn header_block_len(headers: &HeaderMap) -> usize {
    headers
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len() + 4)
        .sum()
}

pub async fn enforce_header_limit(
    State(limit): State<usize>,
    req: Request,
    next: Next,
) -> Response {
    let size = header_block_len(req.headers());
    if size > limit {
        tracing::warn!(size, limit, "request headers too large");
        return StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE.into_response();
    }
    next.run(req).await
}
