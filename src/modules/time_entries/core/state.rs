use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum TimeEntryState {
    None,
    Registered {
        time_entry_id: String,
        user_id: String,
        project_id: String,
        hours: f64,
        date: NaiveDate,
        description: String,
        created_at: i64,
        created_by: String,
        updated_at: i64,
        updated_by: String,
        deleted_at: Option<i64>,
    },
}

impl TimeEntryState {
    pub fn is_deleted(&self) -> bool {
        matches!(
            self,
            TimeEntryState::Registered {
                deleted_at: Some(_),
                ..
            }
        )
    }
}
