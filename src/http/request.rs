//! Request extraction.
//!
//! # Responsibilities
//! - Determine the declared body length from `Content-Length`
//! - Read exactly the declared body, honoring the optional size limit
//! - Recover the request target verbatim
//! - Collapse repeated headers to one value per name

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_LENGTH, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure while reading a request body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The client went away or sent fewer bytes than declared.
    #[error("Failed to read request body: {0}")]
    Read(#[source] axum::Error),

    /// The declared length exceeds `limits.max_body_bytes`.
    #[error("Declared body of {declared} bytes exceeds limit of {limit} bytes")]
    TooLarge { declared: u64, limit: usize },
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        match self {
            BodyError::Read(_) => StatusCode::BAD_REQUEST.into_response(),
            BodyError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE.into_response(),
        }
    }
}

/// Declared body length. Missing or unparsable values count as zero.
pub fn declared_length(headers: &HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// The request target as sent: path plus query, or the whole URI in absolute form.
pub fn request_target(uri: &Uri) -> String {
    if uri.scheme().is_some() {
        return uri.to_string();
    }
    uri.path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned())
}

/// One `(name, value)` pair per header name, the last occurrence winning.
pub fn collapse_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .keys()
        .filter_map(|name| {
            headers.get_all(name).iter().last().map(|value| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
        })
        .collect()
}

/// Read the declared-length body. A zero length never touches the stream.
pub async fn read_declared_body(
    body: Body,
    declared: u64,
    limit: Option<usize>,
) -> Result<Bytes, BodyError> {
    if declared == 0 {
        return Ok(Bytes::new());
    }

    if let Some(limit) = limit {
        if declared > limit as u64 {
            return Err(BodyError::TooLarge { declared, limit });
        }
    }

    let cap = usize::try_from(declared).unwrap_or(usize::MAX);
    axum::body::to_bytes(body, cap)
        .await
        .map_err(BodyError::Read)
}
