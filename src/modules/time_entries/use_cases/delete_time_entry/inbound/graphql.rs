use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: String,
        user_id: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let stream_id = format!("TimeEntry-{time_entry_id}");

        let command = DeleteTimeEntry {
            time_entry_id,
            deleted_by: user_id,
            deleted_at: state.clock.now_millis(),
            cascade: false,
        };

        state
            .delete_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state
            .project_latest(&stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(true)
    }
}
