//! Fixed responses.

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Acknowledgement body.
pub const ACK_BODY: &str = "ok";

/// Content type of every response this listener crafts.
pub const PLAIN_TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// `200 ok`, sent for every POST that was read successfully.
pub fn acknowledgement() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)],
        ACK_BODY,
    )
        .into_response()
}

/// `501` for anything other than POST.
pub fn unsupported_method(method: &Method) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        [(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)],
        format!("Unsupported method ({method})"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acknowledgement_is_plain_ok() {
        let response = acknowledgement();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[test]
    fn unsupported_method_is_501() {
        let response = unsupported_method(&Method::GET);
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
