use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::tests::fixtures::commands::delete_time_entry::DeleteTimeEntryBuilder;

pub fn make_time_entry_deleted_v1_event() -> TimeEntryDeletedV1 {
    let command = DeleteTimeEntryBuilder::new().build();
    TimeEntryDeletedV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.deleted_by.clone(),
        deleted_at: command.deleted_at,
        deleted_by: command.deleted_by,
    }
}
