// Steps every time entry command handler shares around its decide function.

use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

/// A time entry folded from its stream, with the version a commit must expect.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentEntry {
    pub state: TimeEntryState,
    pub version: i64,
}

pub async fn current_entry<S>(
    event_store: &S,
    stream_id: &str,
) -> Result<CurrentEntry, ApplicationError>
where
    S: EventStore<TimeEntryEvent>,
{
    let stream = event_store.load(stream_id).await?;
    Ok(CurrentEntry {
        state: stream.events.into_iter().fold(TimeEntryState::None, evolve),
        version: stream.version,
    })
}

/// Append `events` on top of `expected_version`, then queue `intents` for the same versions.
pub async fn commit<S, O>(
    event_store: &S,
    outbox: &O,
    topic: &str,
    stream_id: &str,
    expected_version: i64,
    events: Vec<TimeEntryEvent>,
    intents: Vec<TimeEntryIntent>,
) -> Result<(), ApplicationError>
where
    S: EventStore<TimeEntryEvent>,
    O: DomainOutbox,
{
    event_store
        .append(stream_id, expected_version, &events)
        .await?;
    dispatch_intents(outbox, stream_id, expected_version, topic, intents).await?;
    Ok(())
}
