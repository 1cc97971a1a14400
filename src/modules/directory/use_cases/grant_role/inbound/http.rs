use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::directory::core::model::UserRole;
use crate::modules::directory::use_cases::grant_role::handler::GrantRole;
use crate::shell::http::requester;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GrantRoleBody {
    pub user_id: String,
    pub role: UserRole,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<GrantRoleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = GrantRole {
        user_id: body.user_id,
        role: body.role,
        requested_by: requester(&headers).to_string(),
    };

    match state.grant_role_handler.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::debug!(%error, "role not granted");
            error.status().into_response()
        }
    }
}
