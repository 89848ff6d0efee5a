//! Per-request access logging in combined-log style.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Emits one log line per request after the response is produced.
///
/// The logged IP honors the `behind_proxy` setting, so access logs and click
/// locations agree on who the client was.
pub async fn access_log_mw(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let ip = client_ip(req.headers(), addr, state.behind_proxy);
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(
        r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#,
        ip = ip,
        method = method,
        path = path,
        version = version,
        status = status,
        referer = referer,
        ua = ua,
        ms = ms,
    );

    response
}
