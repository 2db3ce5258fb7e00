//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single fallback handler)
//!     → request.rs (declared length, body, target, headers)
//!     → callback (decode, record, sink)
//!     → response.rs (fixed acknowledgement)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::BodyError;
pub use server::{AppState, CallbackServer};
