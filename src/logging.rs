//! Logging setup and middleware for logging requests and responses.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;

/// Request and response bodies longer than this many bytes are truncated in
/// `info` logs. The full body is logged at the `debug` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Install the global tracing subscriber.
///
/// Logs at `stdout_level` and above are pretty printed to stdout. Everything
/// at `debug` and above is appended to the file at `log_path`.
///
/// # Errors
/// Returns [Error::Config] if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn setup_logging(stdout_level: LevelFilter, log_path: &Path) -> Result<(), Error> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_level);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| {
            Error::Config(format!(
                "could not open log file {}: {error}",
                log_path.display()
            ))
        })?;

    let debug_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .try_init()
        .map_err(|error| Error::Config(format!("could not set up logging: {error}")))
}

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Bodies are passed on byte for byte, invalid UTF-8 only affects the log line.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    log_body(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &String::from_utf8_lossy(&bytes),
    );

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_body(
        &format!("Sending response: {}", parts.status),
        &String::from_utf8_lossy(&bytes),
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn log_body(summary: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{summary}\nbody: {}...", truncate(body, LOG_BODY_LENGTH_LIMIT));
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{summary}\nbody: {body:?}");
    }
}

/// The longest prefix of `text` that is at most `max_len` bytes and ends on a
/// character boundary.
fn truncate(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }

    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
