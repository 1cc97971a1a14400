use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::Serialize;

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<TimeEntryIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            TimeEntryIntent::PublishTimeEntryRegistered { payload } => {
                ("TimeEntryRegistered", payload.created_at, to_json(&payload)?)
            }
            TimeEntryIntent::PublishTimeEntryDeleted { payload } => {
                ("TimeEntryDeleted", payload.deleted_at, to_json(&payload)?)
            }
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

fn to_json(payload: &impl Serialize) -> Result<serde_json::Value, OutboxError> {
    serde_json::to_value(payload).map_err(|e| OutboxError::Validation(e.to_string()))
}
