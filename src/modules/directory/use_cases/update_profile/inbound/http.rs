use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::directory::use_cases::update_profile::handler::UpdateProfile;
use crate::shell::http::requester;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProfileBody {
    pub display_name: Option<String>,
    pub daily_cost: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    body: Result<Json<UpdateProfileBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateProfile {
        user_id,
        display_name: body.display_name,
        daily_cost: body.daily_cost,
        requested_by: requester(&headers).to_string(),
    };

    match state.update_profile_handler.handle(command).await {
        Ok(profile) => Json(profile).into_response(),
        Err(error) => {
            tracing::debug!(%error, "profile not updated");
            error.status().into_response()
        }
    }
}
