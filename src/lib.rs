//! Local callback listener.
//!
//! Accepts inbound webhook-style POST requests on any path, prints a
//! readable record of each one to stdout and answers `200 ok`.

pub mod callback;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use callback::{CallbackRecord, MemorySink, Payload, RecordSink, StdoutSink};
pub use config::CallbackConfig;
pub use http::CallbackServer;
pub use lifecycle::Shutdown;
