//! TCP listener binding.
//!
//! # Responsibilities
//! - Resolve and bind the configured host/port once at startup
//! - Report bind failures with the address that was attempted
//!
//! The bound socket is handed to the HTTP server by value and lives until
//! the server stops.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to resolve or bind the address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let bind_error = |source| ListenerError::Bind {
        address: config.address(),
        source,
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}
