use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::config::AppConfig;
use crate::shell::http::{USER_HEADER, router};
use crate::shell::state::{AppState, seed_admin};
use crate::tests::fixtures::app_state::{ADMIN_ID, AppStateBuilder, TODAY};
use crate::tests::fixtures::entries::date;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn call(method: Method, uri: &str, user: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_HEADER, user);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn register(project_id: &str, day: &str, hours: f64) -> Request<Body> {
    let body = serde_json::json!({
        "user_id": "u-ada",
        "project_id": project_id,
        "hours": hours,
        "date": day,
    });
    call(Method::POST, "/register-time-entry", "u-ada", Some(body))
}

async fn create_project(app: &Router, user: &str, name: &str, budget: f64) -> String {
    let body = serde_json::json!({ "name": name, "budget": budget });
    let (status, project) = send(app, call(Method::POST, "/projects", user, Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    project["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn a_project_created_over_http_is_named_in_the_reports() {
    let app = router(AppStateBuilder::new().build().await);
    let project_id = create_project(&app, ADMIN_ID, "Mobile app", 8_000.0).await;

    let (status, _) = send(&app, register(&project_id, "2024-03-12", 6.0)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, totals) = send(
        &app,
        call(Method::GET, "/project-totals?user_id=u-ada", ADMIN_ID, None),
    )
    .await;
    assert_eq!(totals[0]["project_id"], project_id.as_str());
    assert_eq!(totals[0]["project_name"], "Mobile app");
    assert_eq!(totals[0]["hours"], 6.0);

    let (status, report) = send(
        &app,
        call(Method::GET, "/admin/report?search=mobile", ADMIN_ID, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["entries"]["total_items"], 1);
    assert_eq!(report["entries"]["items"][0]["project_name"], "Mobile app");
    assert!(
        report["budgets"]
            .as_array()
            .unwrap()
            .iter()
            .any(|b| b["project_name"] == "Mobile app" && b["cost"] == 300.0)
    );

    let (_, projects) = send(&app, call(Method::GET, "/projects", "u-ada", None)).await;
    let names: Vec<_> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["Mobile app", "Website"]);
}

#[tokio::test]
async fn deleting_a_project_removes_its_entries_from_every_report() {
    let app = router(AppStateBuilder::new().build().await);
    let project_id = create_project(&app, ADMIN_ID, "Mobile app", 0.0).await;
    for (project, hours) in [(project_id.as_str(), 5.0), ("p-web", 3.0)] {
        let (status, _) = send(&app, register(project, "2024-03-14", hours)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = format!("/projects/{project_id}");
    let (status, _) = send(&app, call(Method::DELETE, &uri, "u-ada", None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, call(Method::DELETE, &uri, ADMIN_ID, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, call(Method::DELETE, &uri, ADMIN_ID, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, totals) = send(
        &app,
        call(Method::GET, "/project-totals?user_id=u-ada", ADMIN_ID, None),
    )
    .await;
    assert_eq!(totals.as_array().unwrap().len(), 1);
    assert_eq!(totals[0]["project_id"], "p-web");

    let (_, missed) = send(
        &app,
        call(Method::GET, "/missed-entries?user_id=u-ada", "u-ada", None),
    )
    .await;
    assert!(
        missed
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m["date"] == "2024-03-14" && m["total_hours"] == 3.0)
    );
}

#[tokio::test]
async fn roles_and_profiles_are_managed_over_http() {
    let app = router(AppStateBuilder::new().build().await);

    let body = serde_json::json!({ "name": "Intranet" });
    let (status, _) = send(&app, call(Method::POST, "/projects", "u-ada", Some(body))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let grant = serde_json::json!({ "user_id": "u-ada", "role": "project_owner" });
    let (status, _) = send(&app, call(Method::POST, "/admin/roles", ADMIN_ID, Some(grant))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    create_project(&app, "u-ada", "Intranet", 0.0).await;

    let rename = serde_json::json!({ "display_name": "Countess Lovelace" });
    let (status, _) = send(
        &app,
        call(Method::PUT, "/profiles/u-ada", "u-ada", Some(rename)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    send(&app, register("p-web", "2024-03-13", 2.0)).await;

    let (_, report) = send(
        &app,
        call(Method::GET, "/admin/report?search=countess", ADMIN_ID, None),
    )
    .await;
    assert_eq!(report["entries"]["total_items"], 1);
    assert_eq!(report["entries"]["items"][0]["user_name"], "Countess Lovelace");
}

#[tokio::test]
async fn the_configured_admin_can_read_the_admin_report() {
    let config = AppConfig::from_lookup(|key| {
        (key == "TIME_TRACKING_ADMIN_ID").then(|| "u-root".to_string())
    })
    .unwrap();
    let directory = Arc::new(InMemoryDirectory::new());
    seed_admin(&config, &*directory).await.unwrap();
    let app = router(AppState::new(
        &config,
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryDomainOutbox::new()),
        Arc::new(InMemoryProjections::new()),
        directory,
        Arc::new(FixedClock::new(date(TODAY))),
    ));

    let (status, _) = send(&app, call(Method::GET, "/admin/report", "u-root", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, call(Method::GET, "/admin/report", "u-other", None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    create_project(&app, "u-root", "Website", 0.0).await;
}
