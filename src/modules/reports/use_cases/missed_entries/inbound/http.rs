use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MissedEntriesParams {
    pub user_id: String,
    /// `YYYY-MM-DD`, defaults to today.
    pub as_of: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<MissedEntriesParams>,
) -> impl IntoResponse {
    let as_of = match params
        .as_of
        .as_deref()
        .map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
    {
        None => None,
        Some(Ok(date)) => Some(date),
        Some(Err(_)) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state
        .missed_entries_handler
        .handle(&params.user_id, as_of)
        .await
    {
        Ok(missed) => Json(missed).into_response(),
        Err(error) => {
            tracing::error!(%error, "missed entries failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
