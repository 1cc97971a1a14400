#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTimeEntry {
    pub time_entry_id: String,
    pub deleted_by: String,
    pub deleted_at: i64,
    /// Set when the entry goes because its project was removed. Skips the ownership check.
    pub cascade: bool,
}
