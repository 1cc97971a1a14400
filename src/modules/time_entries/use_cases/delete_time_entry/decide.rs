use crate::modules::time_entries::core::{
    events::{TimeEntryEvent, v1::time_entry_deleted::TimeEntryDeletedV1},
    intents::TimeEntryIntent,
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::delete_time_entry::{
    command::DeleteTimeEntry,
    decision::{DeleteDecideError, Decision},
};

pub fn decide_delete(state: &TimeEntryState, command: DeleteTimeEntry) -> Decision {
    let reject = |reason| Decision::Rejected { reason };
    match state {
        TimeEntryState::None => reject(DeleteDecideError::NotFound),
        TimeEntryState::Registered {
            deleted_at: Some(_),
            ..
        } => reject(DeleteDecideError::AlreadyDeleted),
        TimeEntryState::Registered { user_id, .. }
            if !command.cascade && *user_id != command.deleted_by =>
        {
            reject(DeleteDecideError::NotOwner)
        }
        TimeEntryState::Registered { user_id, .. } => {
            let payload = TimeEntryDeletedV1 {
                time_entry_id: command.time_entry_id,
                user_id: user_id.clone(),
                deleted_at: command.deleted_at,
                deleted_by: command.deleted_by,
            };
            Decision::Accepted {
                events: vec![TimeEntryEvent::TimeEntryDeletedV1(payload.clone())],
                intents: vec![TimeEntryIntent::PublishTimeEntryDeleted { payload }],
            }
        }
    }
}
