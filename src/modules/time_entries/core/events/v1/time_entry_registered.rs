// Event payload: TimeEntryRegisteredV1.
//
// Records that a user logged `hours` against a project on a calendar date.
// `date` serializes as `YYYY-MM-DD`. Timestamps are epoch milliseconds.

use chrono::NaiveDate;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct TimeEntryRegisteredV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
}
