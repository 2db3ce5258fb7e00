//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener once, before anything is served
//! - Announce the callback URL on stdout
//!
//! Any startup error is fatal and propagates to `main`.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;
use crate::net::{self, ListenerError};

/// The line printed once the listener is bound.
pub fn banner(host: &str, port: u16) -> String {
    format!("Callback server listening on http://{host}:{port}/callback")
}

/// Bind the configured listener and print the banner.
///
/// The banner reports the port actually bound, which differs from the
/// configured one only when port `0` was requested.
pub async fn bind_and_announce(
    config: &ListenerConfig,
) -> Result<(TcpListener, SocketAddr), ListenerError> {
    let listener = net::bind(config).await?;
    let local_addr = listener.local_addr().map_err(|source| ListenerError::Bind {
        address: config.address(),
        source,
    })?;

    println!("{}", banner(&config.host, local_addr.port()));

    Ok((listener, local_addr))
}
