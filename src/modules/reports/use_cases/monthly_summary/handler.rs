use crate::modules::reports::adapters::mappers::time_entry_view_to_entry::to_entries;
use crate::modules::reports::core::monthly::MonthlySummary;
use crate::modules::reports::use_cases::errors::ReportError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::core::calendar::month_bounds;
use crate::shared::infrastructure::clock::Clock;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct MonthlySummaryHandler {
    queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    clock: Arc<dyn Clock>,
}

impl MonthlySummaryHandler {
    pub fn new(queries: Arc<dyn TimeEntryQueries + Send + Sync>, clock: Arc<dyn Clock>) -> Self {
        Self { queries, clock }
    }

    /// Summary of the month containing `month`, or of the current month when absent.
    /// Total hours cover every user; the remaining fields are about `user_id`.
    pub async fn handle(
        &self,
        user_id: &str,
        month: Option<NaiveDate>,
    ) -> Result<MonthlySummary, ReportError> {
        let (month_start, month_end) = month_bounds(month.unwrap_or_else(|| self.clock.today()));
        let entries = to_entries(self.queries.list_all().await?);
        let summary = MonthlySummary::compute(&entries, user_id, month_start, month_end);
        tracing::debug!(user_id, %month_start, user_hours = summary.user_hours, "monthly summary computed");
        Ok(summary)
    }
}
