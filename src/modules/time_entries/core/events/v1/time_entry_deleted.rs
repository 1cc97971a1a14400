// Event payload: TimeEntryDeletedV1.
//
// Carries `user_id` so the projection can address the row without loading the stream.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryDeletedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub deleted_at: i64,
    pub deleted_by: String,
}
