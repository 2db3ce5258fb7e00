//! Callback listener binary.
//!
//! ```text
//! callback-listener [--config <file>] [--host <host>] [--port <port>]
//! ```
//!
//! With no arguments it listens on `127.0.0.1:9011`.

use std::path::PathBuf;

use clap::Parser;

use callback_listener::config::{self, CallbackConfig, ConfigError};
use callback_listener::lifecycle::{signals, startup, Shutdown};
use callback_listener::observability;
use callback_listener::CallbackServer;

#[derive(Parser)]
#[command(name = "callback-listener")]
#[command(about = "Log inbound callbacks and answer `ok`", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind host, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    fn resolve_config(&self) -> Result<CallbackConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => CallbackConfig::default(),
        };

        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }

        config::validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    observability::logging::init(&config.observability);

    tracing::info!(
        address = %config.listener.address(),
        max_body_bytes = ?config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let (listener, _) = startup::bind_and_announce(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::forward_to(shutdown.clone());

    CallbackServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
