// Translate a domain event into read model mutations.
//
// last_event_id is "stream_id:version" so repeated application is detectable.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;

#[derive(Debug, PartialEq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    MarkDeleted {
        user_id: String,
        time_entry_id: String,
        deleted_at: i64,
        deleted_by: String,
        last_event_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeEntryEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeEntryEvent::TimeEntryRegisteredV1(details) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: details.time_entry_id.clone(),
            user_id: details.user_id.clone(),
            project_id: details.project_id.clone(),
            hours: details.hours,
            date: details.date,
            description: details.description.clone(),
            created_at: details.created_at,
            created_by: details.created_by.clone(),
            updated_at: details.created_at,
            updated_by: details.created_by.clone(),
            deleted_at: None,
            last_event_id: Some(stream_key),
        })],
        TimeEntryEvent::TimeEntryDeletedV1(details) => vec![Mutation::MarkDeleted {
            user_id: details.user_id.clone(),
            time_entry_id: details.time_entry_id.clone(),
            deleted_at: details.deleted_at,
            deleted_by: details.deleted_by.clone(),
            last_event_id: stream_key,
        }],
    }
}
