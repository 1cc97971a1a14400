use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete;
use crate::modules::time_entries::use_cases::delete_time_entry::decision::{
    DeleteDecideError, Decision,
};
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::modules::time_entries::use_cases::stream::{commit, current_entry};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct DeleteTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> DeleteTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: DeleteTimeEntry,
    ) -> Result<(), ApplicationError> {
        let current = current_entry(&*self.event_store, stream_id).await?;
        match decide_delete(&current.state, command) {
            Decision::Accepted { events, intents } => {
                commit(
                    &*self.event_store,
                    &*self.outbox,
                    &self.topic,
                    stream_id,
                    current.version,
                    events,
                    intents,
                )
                .await?;
                tracing::info!(stream_id, "time entry deleted");
                Ok(())
            }
            Decision::Rejected {
                reason: DeleteDecideError::NotFound,
            } => Err(ApplicationError::NotFound(stream_id.to_string())),
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "time entry deletion rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
