//! Callback decoding and logging.
//!
//! # Data Flow
//! ```text
//! request body bytes
//!     → payload.rs (Absent | Structured | Raw)
//!     → record.rs (path + headers + payload, rendered as text)
//!     → sink.rs (stdout, or memory for inspection)
//! ```

pub mod payload;
pub mod record;
pub mod sink;

pub use payload::{parse_structured, Payload, RawText};
pub use record::{CallbackRecord, DIVIDER};
pub use sink::{MemorySink, RecordSink, StdoutSink};
