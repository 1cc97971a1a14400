use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::reports::core::missed_entries::MissedEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMissedEntry {
    pub date: String,
    pub total_hours: f64,
    pub formatted_date: String,
}

impl From<MissedEntry> for GqlMissedEntry {
    fn from(m: MissedEntry) -> Self {
        Self {
            date: m.date.to_string(),
            total_hours: m.total_hours,
            formatted_date: m.formatted_date,
        }
    }
}

#[derive(Default)]
pub struct MissedEntriesQuery;

#[Object]
impl MissedEntriesQuery {
    /// Working days with less than a full day logged. `as_of` is `YYYY-MM-DD`, default today.
    async fn missed_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
        as_of: Option<String>,
    ) -> GqlResult<Vec<GqlMissedEntry>> {
        let state = context.data_unchecked::<AppState>();
        let as_of = as_of
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| async_graphql::Error::new(format!("invalid as_of: {raw}")))
            })
            .transpose()?;
        let missed = state
            .missed_entries_handler
            .handle(&user_id, as_of)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(missed.into_iter().map(Into::into).collect())
    }
}
