use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::directory::use_cases::create_project::handler::CreateProject;
use crate::shell::http::requester;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub color: Option<String>,
    pub budget: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateProject {
        project_id: Uuid::now_v7().to_string(),
        name: body.name,
        color: body.color,
        budget: body.budget,
        requested_by: requester(&headers).to_string(),
    };

    match state.create_project_handler.handle(command).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(error) => {
            tracing::debug!(%error, "project not created");
            error.status().into_response()
        }
    }
}
