use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::modules::time_entries::use_cases::register_time_entry::decision::Decision;
use crate::modules::time_entries::use_cases::stream::{commit, current_entry};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct RegisterTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> RegisterTimeEntryHandler<TEventStore, TOutbox>
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
        command: RegisterTimeEntry,
    ) -> Result<(), ApplicationError> {
        let current = current_entry(&*self.event_store, stream_id).await?;
        match decide_register(&current.state, command) {
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
                tracing::info!(stream_id, "time entry registered");
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "time entry registration rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
