use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::reports::core::monthly::MonthlySummary;
use crate::shared::core::calendar::parse_month;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthlySummary {
    pub month_start: String,
    pub month_end: String,
    pub total_hours: f64,
    pub user_hours: f64,
    pub working_days: i32,
    pub expected_hours: f64,
    pub remaining_hours: f64,
}

impl From<MonthlySummary> for GqlMonthlySummary {
    fn from(s: MonthlySummary) -> Self {
        Self {
            month_start: s.month_start.to_string(),
            month_end: s.month_end.to_string(),
            total_hours: s.total_hours,
            user_hours: s.user_hours,
            working_days: i32::try_from(s.working_days).unwrap_or(i32::MAX),
            expected_hours: s.expected_hours,
            remaining_hours: s.remaining_hours,
        }
    }
}

#[derive(Default)]
pub struct MonthlySummaryQuery;

#[Object]
impl MonthlySummaryQuery {
    /// `month` is `YYYY-MM`, default the current month.
    async fn monthly_summary(
        &self,
        context: &Context<'_>,
        user_id: String,
        month: Option<String>,
    ) -> GqlResult<GqlMonthlySummary> {
        let state = context.data_unchecked::<AppState>();
        let month = month
            .map(|raw| {
                parse_month(&raw)
                    .ok_or_else(|| async_graphql::Error::new(format!("invalid month: {raw}")))
            })
            .transpose()?;
        let summary = state
            .monthly_summary_handler
            .handle(&user_id, month)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary.into())
    }
}
