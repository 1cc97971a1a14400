use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    http::HeaderMap,
    response::Html,
    routing::{delete, get, post, put},
};

use crate::modules::directory::use_cases::create_project::inbound::http as create_project_http;
use crate::modules::directory::use_cases::delete_project::inbound::http as delete_project_http;
use crate::modules::directory::use_cases::grant_role::inbound::http as grant_role_http;
use crate::modules::directory::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::directory::use_cases::update_profile::inbound::http as update_profile_http;
use crate::modules::reports::use_cases::admin_report::inbound::http as admin_report_http;
use crate::modules::reports::use_cases::missed_entries::inbound::http as missed_entries_http;
use crate::modules::reports::use_cases::monthly_summary::inbound::http as monthly_summary_http;
use crate::modules::reports::use_cases::project_totals::inbound::http as project_totals_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_http;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

/// Header naming the user behind a request. There is no authentication in front of it.
pub const USER_HEADER: &str = "x-user-id";

/// The requesting user, or "" when the header is missing or not text.
pub fn requester(headers: &HeaderMap) -> &str {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route("/register-time-entry", post(register_http::handle))
        .route("/delete-time-entry", post(delete_http::handle))
        .route("/list-time-entries", get(list_http::handle))
        .route("/missed-entries", get(missed_entries_http::handle))
        .route("/monthly-summary", get(monthly_summary_http::handle))
        .route("/project-totals", get(project_totals_http::handle))
        .route("/admin/report", get(admin_report_http::handle))
        .route("/admin/report.csv", get(admin_report_http::handle_csv))
        .route("/admin/roles", post(grant_role_http::handle))
        .route(
            "/projects",
            get(list_projects_http::handle).post(create_project_http::handle),
        )
        .route("/projects/{project_id}", delete(delete_project_http::handle))
        .route("/profiles/{user_id}", put(update_profile_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
