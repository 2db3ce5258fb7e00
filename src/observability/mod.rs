//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! tracing events from all subsystems
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Quiet by default: only warnings and errors reach stderr
//! - `RUST_LOG` overrides the configured level
//! - Per-request access lines come from tower-http's TraceLayer at debug

pub mod logging;
