//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (--host, --port)
//!     → CallbackConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the listener runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CallbackConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ShutdownConfig,
};
pub use validation::{validate_config, ValidationError};
