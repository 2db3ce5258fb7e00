//! Destinations for callback records.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::callback::record::CallbackRecord;

/// Somewhere to emit records.
///
/// Implementations must write a record as one unit so concurrent requests
/// never interleave mid-record.
pub trait RecordSink: Send + Sync {
    fn emit(&self, record: &CallbackRecord);
}

/// Writes records to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl RecordSink for StdoutSink {
    fn emit(&self, record: &CallbackRecord) {
        let rendered = record.to_string();
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write callback record");
        }
    }
}

/// Keeps records in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CallbackRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<CallbackRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for MemorySink {
    fn emit(&self, record: &CallbackRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
    }
}
