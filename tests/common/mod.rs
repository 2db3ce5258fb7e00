//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use callback_listener::config::{CallbackConfig, ListenerConfig};
use callback_listener::{net, CallbackServer, MemorySink, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// A listener running on an ephemeral loopback port.
pub struct TestListener {
    pub addr: SocketAddr,
    pub sink: MemorySink,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestListener {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a listener that records into memory.
pub async fn start_listener(mut config: CallbackConfig) -> TestListener {
    config.listener = ListenerConfig {
        host: "127.0.0.1".into(),
        port: 0,
    };

    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let sink = MemorySink::new();
    let shutdown = Shutdown::new();
    let server = CallbackServer::with_sink(config, Arc::new(sink.clone()));
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestListener {
        addr,
        sink,
        shutdown,
        handle,
    }
}

/// Client that never pools or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Write raw bytes on a fresh connection and read until the server closes it.
pub async fn send_raw(addr: SocketAddr, request: &[u8]) -> String {
    let mut socket = TcpStream::connect(addr).await.unwrap();
    socket.write_all(request).await.unwrap();

    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), socket.read_to_end(&mut response))
        .await
        .expect("server did not close the connection")
        .unwrap();

    String::from_utf8_lossy(&response).into_owned()
}
