use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteTimeEntryBody {
    pub time_entry_id: String,
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let stream_id = format!("TimeEntry-{}", body.time_entry_id);
    let command = DeleteTimeEntry {
        time_entry_id: body.time_entry_id,
        deleted_by: body.user_id,
        deleted_at: state.clock.now_millis(),
        cascade: false,
    };

    match state.delete_handler.handle(&stream_id, command).await {
        Ok(()) => {}
        Err(ApplicationError::NotFound(_)) => return StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Domain(_)) => return StatusCode::CONFLICT.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }

    if let Err(error) = state.project_latest(&stream_id).await {
        tracing::error!(stream_id, %error, "inline projection failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}
