// Outbox port for integration intents.
//
// A row is written after its events are appended. `(stream_id, stream_version)` identifies
// the row, so replaying a command never publishes the same change twice.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    /// Event name as published, e.g. `TimeEntryDeleted`.
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    /// Stream version the events were appended on top of.
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

impl OutboxRow {
    pub fn dedup_key(&self) -> (String, i64) {
        (self.stream_id.clone(), self.stream_version)
    }
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("intent already queued for {stream_id} at version {stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("intent payload rejected: {0}")]
    Validation(String),

    #[error("outbox unavailable: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
