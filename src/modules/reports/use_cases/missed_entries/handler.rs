use crate::modules::reports::adapters::mappers::time_entry_view_to_entry::to_entries;
use crate::modules::reports::core::missed_entries::{MissedEntry, find_missed_entries};
use crate::modules::reports::use_cases::errors::ReportError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::clock::Clock;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct MissedEntriesHandler {
    queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl MissedEntriesHandler {
    pub fn new(queries: Arc<dyn TimeEntryQueries + Send + Sync>, clock: Arc<dyn Clock>) -> Self {
        Self { queries, clock }
    }

    /// Missed working days of `user_id` as of `as_of`, or as of today when absent.
    pub async fn handle(
        &self,
        user_id: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<MissedEntry>, ReportError> {
        let as_of = as_of.unwrap_or_else(|| self.clock.today());
        let entries = to_entries(self.queries.list_all_by_user_id(user_id).await?);
        let missed = find_missed_entries(&entries, as_of);
        tracing::debug!(user_id, %as_of, missed = missed.len(), "missed entries computed");
        Ok(missed)
    }
}
