use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProjectTotalsParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProjectTotalsParams>,
) -> impl IntoResponse {
    match state.project_totals_handler.handle(&params.user_id).await {
        Ok(totals) => Json(totals).into_response(),
        Err(error) => {
            tracing::error!(%error, "project totals failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
