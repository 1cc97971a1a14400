use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use async_trait::async_trait;

/// Read access to live (not deleted) time entries.
#[async_trait]
pub trait TimeEntryQueries {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_date_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Every entry of one user, unpaged.
    async fn list_all_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Every entry of every user, unpaged.
    async fn list_all(&self) -> anyhow::Result<Vec<TimeEntryView>>;
}
