//! Client IP extraction for geolocation and access logging.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Determines the client address for a request.
///
/// When `behind_proxy` is set, the `X-Forwarded-For` chain (first entry, the
/// original client) and `X-Real-IP` are consulted before the socket peer
/// address. The flag defaults to off because forwarding headers from
/// arbitrary clients cannot be trusted.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> IpAddr {
    if behind_proxy {
        if let Some(ip) = forwarded_ip(headers) {
            return ip;
        }
    }

    peer.ip()
}

/// Extracts a forwarded client IP from proxy headers, if present and parseable.
fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.trim().parse().ok())
        })
}
