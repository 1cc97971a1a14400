// Admin report over HTTP.
//
// A missing `x-user-id` header is treated as an unknown user and refused like any other
// non-admin.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reports::use_cases::errors::ReportError;
use crate::shell::http::requester;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AdminReportParams {
    pub search: Option<String>,
    pub page: Option<usize>,
}

fn error_response(error: ReportError) -> axum::response::Response {
    match error {
        ReportError::Forbidden(_) => StatusCode::FORBIDDEN.into_response(),
        ReportError::Queries(error) => {
            tracing::error!(%error, "admin report failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminReportParams>,
) -> impl IntoResponse {
    match state
        .admin_report_handler
        .handle(
            requester(&headers),
            params.search.as_deref().unwrap_or_default(),
            params.page.unwrap_or(1),
        )
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn handle_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminReportParams>,
) -> impl IntoResponse {
    match state
        .admin_report_handler
        .export(
            requester(&headers),
            params.search.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", csv.filename),
                ),
            ],
            csv.content,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
