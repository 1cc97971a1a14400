use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
}
