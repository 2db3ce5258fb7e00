//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig { host, port }
//!     → listener.rs (resolve, bind once)
//!     → Hand off to HTTP layer (axum::serve)
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
