use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterTimeEntryBody {
    pub user_id: String,
    pub project_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct RegisterTimeEntryResponse {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let time_entry_id = Uuid::now_v7().to_string();
    let stream_id = format!("TimeEntry-{time_entry_id}");

    let command = RegisterTimeEntry {
        time_entry_id: time_entry_id.clone(),
        user_id: body.user_id.clone(),
        project_id: body.project_id,
        hours: body.hours,
        date: body.date,
        description: body.description,
        created_at: state.clock.now_millis(),
        created_by: body.user_id,
    };

    match state.register_handler.handle(&stream_id, command).await {
        Ok(()) => {}
        Err(ApplicationError::Domain(_)) => return StatusCode::CONFLICT.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }

    if let Err(error) = state.project_latest(&stream_id).await {
        tracing::error!(stream_id, %error, "inline projection failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::CREATED,
        Json(RegisterTimeEntryResponse { time_entry_id }),
    )
        .into_response()
}
