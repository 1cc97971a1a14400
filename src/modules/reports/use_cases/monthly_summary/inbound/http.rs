use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::core::calendar::parse_month;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlySummaryParams {
    pub user_id: String,
    /// `YYYY-MM`, defaults to the current month.
    pub month: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<MonthlySummaryParams>,
) -> impl IntoResponse {
    let month = match params.month.as_deref().map(parse_month) {
        None => None,
        Some(Some(month)) => Some(month),
        Some(None) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state
        .monthly_summary_handler
        .handle(&params.user_id, month)
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => {
            tracing::error!(%error, "monthly summary failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
