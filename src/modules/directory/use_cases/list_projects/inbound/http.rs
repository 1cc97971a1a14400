use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_projects_handler.handle().await {
        Ok(projects) => Json(projects).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing projects failed");
            error.status().into_response()
        }
    }
}
