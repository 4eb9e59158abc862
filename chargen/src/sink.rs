//! Where created characters are sent after they are stored.
//!
//! There is no database. [`LogSink`] stands in for one by writing each
//! record to the log.

use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

/// Errors from sending a record.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

/// Receives a pretty-printed JSON record for each stored character.
pub trait RecordSink: Send + Sync {
    fn send(&self, record: &str) -> Result<(), SinkError>;
}

/// Logs every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn send(&self, record: &str) -> Result<(), SinkError> {
        info!(%record, "mock sending data to DB");
        Ok(())
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl RecordSink for MemorySink {
    fn send(&self, record: &str) -> Result<(), SinkError> {
        self.records
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?
            .push(record.to_string());
        Ok(())
    }
}
