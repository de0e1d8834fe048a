// Start of file: /src/middlewares/access_log.rs

use std::convert::Infallible;
use std::time::Instant;
use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

/// Emits one log line per request: method, path, status, latency and UTC date.
pub async fn access_log(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    // Pass the request down the chain
    let response: Response = next.run(req).await;

    info!(
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        date = %Utc::now().to_rfc3339(),
        "{} {}",
        method,
        path,
    );

    Ok(response)
}

// End of file: /src/middlewares/access_log.rs
