//! Client IP extraction.
//!
//! Proxy headers win over the socket peer, in this order: `True-Client-IP`,
//! `X-Real-IP`, then the first `X-Forwarded-For` hop. Unparseable values are
//! skipped.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Resolved client address, stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

const TRUE_CLIENT_IP: &str = "true-client-ip";
const X_REAL_IP: &str = "x-real-ip";
const X_FORWARDED_FOR: &str = "x-forwarded-for";

pub fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let header = |name: &'static str| headers.get(name).and_then(|v| v.to_str().ok());
    let parse = |v: &str| v.trim().parse::<IpAddr>().ok();

    header(TRUE_CLIENT_IP)
        .and_then(parse)
        .or_else(|| header(X_REAL_IP).and_then(parse))
        .or_else(|| {
            header(X_FORWARDED_FOR)
                .and_then(|v| v.split(',').next())
                .and_then(parse)
        })
}

pub async fn capture_client_ip(mut req: Request, next: Next) -> Response {
    let ip = forwarded_ip(req.headers()).or_else(|| {
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0.ip())
    });
    if let Some(ip) = ip {
        req.extensions_mut().insert(ClientIp(ip));
    }
    next.run(req).await
}
