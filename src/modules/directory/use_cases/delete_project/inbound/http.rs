use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::directory::use_cases::delete_project::handler::DeleteProject;
use crate::shell::http::requester;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    let command = DeleteProject {
        project_id,
        requested_by: requester(&headers).to_string(),
        requested_at: state.clock.now_millis(),
    };

    let streams = match state.delete_project_handler.handle(command).await {
        Ok(streams) => streams,
        Err(error) => {
            tracing::debug!(%error, "project not deleted");
            return error.status().into_response();
        }
    };

    for stream_id in &streams {
        if let Err(error) = state.project_latest(stream_id).await {
            tracing::error!(stream_id, %error, "inline projection failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    StatusCode::NO_CONTENT.into_response()
}
