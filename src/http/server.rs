//! HTTP server setup and the callback handler.
//!
//! # Responsibilities
//! - Create the Axum router (every path, every method, one handler)
//! - Read the declared body, decode it, emit the record, acknowledge
//! - Serve on a bound listener until the shutdown signal fires

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    response::{IntoResponse, Response},
    Router,
};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, oneshot};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::callback::{CallbackRecord, Payload, RecordSink, StdoutSink};
use crate::config::CallbackConfig;
use crate::http::request::{collapse_headers, declared_length, read_declared_body, request_target};
use crate::http::response::{acknowledgement, unsupported_method};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn RecordSink>,
    pub max_body_bytes: Option<usize>,
}

/// HTTP server for the callback listener.
pub struct CallbackServer {
    router: Router,
    grace: Duration,
}

impl CallbackServer {
    /// Create a server that writes records to stdout.
    pub fn new(config: CallbackConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Create a server that writes records to `sink`.
    pub fn with_sink(config: CallbackConfig, sink: Arc<dyn RecordSink>) -> Self {
        let state = AppState {
            sink,
            max_body_bytes: config.limits.max_body_bytes,
        };
        Self {
            router: Self::build_router(state),
            grace: Duration::from_millis(config.shutdown.grace_ms),
        }
    }

    /// Build the Axum router.
    ///
    /// The trace layer logs at debug level, failures included, so
    /// per-request lines stay silent unless `RUST_LOG` asks for them.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(callback_handler)
            .with_state(state)
            .layer(
                TraceLayer::new_for_http()
                    .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
            )
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// On shutdown the listener stops accepting and in-flight requests get
    /// the configured grace period. Connections still open after that,
    /// such as a client stalled mid-body, are abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
                let _ = signalled_tx.send(());
            })
            .into_future();

        let grace = self.grace;
        let deadline = async move {
            match signalled_rx.await {
                Ok(()) => tokio::time::sleep(grace).await,
                Err(_) => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = serve => result?,
            _ = deadline => {
                tracing::warn!(
                    grace_ms = grace.as_millis() as u64,
                    "Grace period elapsed, abandoning open connections"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handle any request. Only POST is a callback.
async fn callback_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() != Method::POST {
        tracing::debug!(method = %request.method(), "Rejecting non-POST request");
        return unsupported_method(request.method());
    }

    let (parts, body) = request.into_parts();
    let declared = declared_length(&parts.headers);

    let bytes = match read_declared_body(body, declared, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, declared, "Dropping callback");
            return e.into_response();
        }
    };

    let record = CallbackRecord {
        path: request_target(&parts.uri),
        headers: collapse_headers(&parts.headers),
        payload: Payload::decode(&bytes),
    };
    state.sink.emit(&record);

    acknowledgement()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::MemorySink;
    use axum::http::{header, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn server(sink: &MemorySink) -> CallbackServer {
        CallbackServer::with_sink(CallbackConfig::default(), Arc::new(sink.clone()))
    }

    fn post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn post_is_logged_and_acknowledged() {
        let sink = MemorySink::new();
        let response = server(&sink)
            .router()
            .oneshot(post("/callback?x=1", r#"{"a": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "ok");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "/callback?x=1");
        assert_eq!(records[0].payload, Payload::Structured(json!({"a": 1})));
        assert_eq!(records[0].header("content-length"), Some("8"));
    }

    #[tokio::test]
    async fn missing_content_length_logs_absent_body() {
        let sink = MemorySink::new();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/hook")
            .body(Body::from("unannounced"))
            .unwrap();

        let response = server(&sink).router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
        assert_eq!(sink.records()[0].payload, Payload::Absent);
    }

    #[tokio::test]
    async fn non_post_is_not_implemented_and_not_logged() {
        let sink = MemorySink::new();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/callback")
            .body(Body::empty())
            .unwrap();

        let response = server(&sink).router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn body_over_limit_is_rejected_without_record() {
        let sink = MemorySink::new();
        let mut config = CallbackConfig::default();
        config.limits.max_body_bytes = Some(4);
        let server = CallbackServer::with_sink(config, Arc::new(sink.clone()));

        let response = server.router().oneshot(post("/big", "too long")).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(sink.is_empty());
    }
}
