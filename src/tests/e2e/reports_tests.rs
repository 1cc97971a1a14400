use crate::shell::http::router;
use crate::tests::fixtures::app_state::{ADMIN_ID, AppStateBuilder};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn register(date: &str, hours: f64) -> Request<Body> {
    let body = serde_json::json!({
        "user_id": "u-ada",
        "project_id": "p-web",
        "hours": hours,
        "date": date,
        "description": "Development",
    });
    Request::post("/register-time-entry")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-user-id", ADMIN_ID)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn registered_hours_flow_into_every_report() {
    let app = router(AppStateBuilder::new().build().await);

    for (date, hours) in [
        ("2024-03-14", 8.0),
        ("2024-03-13", 4.0),
        ("2024-03-11", 5.0),
        ("2024-03-11", 3.0),
    ] {
        let (status, _) = send(&app, register(date, hours)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, missed) = send(&app, get("/missed-entries?user_id=u-ada")).await;
    assert_eq!(status, StatusCode::OK);
    let missed = missed.as_array().cloned().unwrap_or_default();
    assert_eq!(missed.len(), 20);
    assert!(missed.iter().all(|m| m["date"] != "2024-03-14" && m["date"] != "2024-03-11"));
    assert!(missed.iter().any(|m| m["date"] == "2024-03-13" && m["total_hours"] == 4.0));

    let (_, summary) = send(&app, get("/monthly-summary?user_id=u-ada&month=2024-03")).await;
    assert_eq!(summary["user_hours"], 20.0);
    assert_eq!(summary["expected_hours"], 168.0);
    assert_eq!(summary["remaining_hours"], 148.0);

    let (_, totals) = send(&app, get("/project-totals?user_id=u-ada")).await;
    assert_eq!(totals[0]["hours"], 20.0);

    let (status, report) = send(&app, get("/admin/report?search=ada")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["entries"]["total_items"], 4);
    assert_eq!(report["total_hours"], 20.0);
}

#[tokio::test]
async fn a_deleted_entry_is_missed_again() {
    let app = router(AppStateBuilder::new().build().await);

    let (_, created) = send(&app, register("2024-03-14", 8.0)).await;
    let time_entry_id = created["time_entry_id"].as_str().unwrap().to_string();

    let (_, before) = send(&app, get("/missed-entries?user_id=u-ada")).await;
    assert!(before.as_array().unwrap().iter().all(|m| m["date"] != "2024-03-14"));

    let body = serde_json::json!({ "time_entry_id": time_entry_id, "user_id": "u-ada" });
    let (status, _) = send(
        &app,
        Request::post("/delete-time-entry")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, after) = send(&app, get("/missed-entries?user_id=u-ada")).await;
    assert!(
        after
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m["date"] == "2024-03-14" && m["total_hours"] == 0.0)
    );
}
