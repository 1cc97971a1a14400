use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeEntryMutation;

#[Object]
impl RegisterTimeEntryMutation {
    /// `date` is a `YYYY-MM-DD` calendar date.
    async fn register_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
        project_id: String,
        hours: f64,
        date: String,
        description: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| async_graphql::Error::new(format!("invalid date: {date}")))?;

        let time_entry_id = Uuid::now_v7().to_string();
        let stream_id = format!("TimeEntry-{time_entry_id}");

        let command = RegisterTimeEntry {
            time_entry_id: time_entry_id.clone(),
            user_id: user_id.clone(),
            project_id,
            hours,
            date,
            description: description.unwrap_or_default(),
            created_at: state.clock.now_millis(),
            created_by: user_id,
        };

        state
            .register_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state
            .project_latest(&stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(time_entry_id))
    }
}
