//! HTTP API integration tests
//!
//! Drives the axum router in-process with `oneshot` against a wiremock
//! directory.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use camera_console::config::{Config, ViewConfig};
use camera_console::notifications::NotificationCenter;
use camera_console::store::RecordStore;
use camera_console::view::{PageSize, ViewRegistry};
use camera_console::web::{create_router, AppState};
use common::fixtures::*;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct TestApp {
    mock: MockDirectoryServer,
    state: AppState,
}

impl TestApp {
    async fn new() -> Self {
        let mock = MockDirectoryServer::start().await;
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8096,
            directory: mock.config(),
            view: ViewConfig::default(),
        };
        let store = Arc::new(RecordStore::new(mock.directory(), NotificationCenter::new()));
        let state = AppState::new(
            Arc::new(config),
            store,
            ViewRegistry::new(PageSize::default()),
            PageSize::default(),
        );
        Self { mock, state }
    }

    /// App with `count` cameras already loaded
    async fn loaded(count: u64) -> Self {
        let app = Self::new().await;
        let cameras = (1..=count)
            .map(|id| {
                let location = locations::ALL[(id as usize) % locations::ALL.len()];
                let status = if id % 2 == 0 { "Inactive" } else { "Active" };
                camera_json(id, &format!("Camera {}", id), location, status)
            })
            .collect();
        app.mock.mock_list_success(cameras).await;
        app.state.store.load().await.unwrap();
        app
    }

    fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None).await
    }
}

fn row_ids(page: &Value) -> Vec<u64> {
    page["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_table_blocked_until_loaded() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/cameras").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Loading cameras...");
}

#[tokio::test]
async fn test_failed_load_offers_retry() {
    let app = TestApp::new().await;
    app.mock.mock_list_failure(500).await;

    let (status, _) = app.post("/api/cameras/reload").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, body) = app.get("/api/cameras").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error: "));
    assert!(message.contains("/api/cameras/reload"));

    app.mock.reset().await;
    app.mock
        .mock_list_success(vec![camera_json(1, "Gate", locations::DENVER, "Active")])
        .await;

    let (status, body) = app.post("/api/cameras/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["loaded"], 1);

    let (status, body) = app.get("/api/cameras").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_ids(&body["data"]), vec![1]);
}

#[tokio::test]
async fn test_list_cameras_pages_and_filters() {
    let app = TestApp::loaded(25).await;

    let (status, body) = app.get("/api/cameras?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_ids(&body["data"]), vec![21, 22, 23, 24, 25]);
    assert_eq!(body["data"]["total_pages"], 3);
    assert_eq!(body["data"]["first_item"], 21);
    assert_eq!(body["data"]["last_item"], 25);

    let (status, body) = app.get("/api/cameras?status=Inactive&page_size=20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["filtered_count"], 12);
    assert!(body["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["status"] == "Inactive"));

    let (_, body) = app.get("/api/cameras?location=Austin%2C%20TX").await;
    assert!(body["data"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["location"] == locations::AUSTIN));
}

#[tokio::test]
async fn test_page_zero_is_an_empty_dead_end() {
    let app = TestApp::loaded(25).await;

    let (status, body) = app.get("/api/cameras?page=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(row_ids(&body["data"]).is_empty());
    assert_eq!(body["data"]["has_previous"], false);
    assert_eq!(body["data"]["has_next"], false);
}

#[tokio::test]
async fn test_list_cameras_rejects_bad_inputs() {
    let app = TestApp::loaded(3).await;

    let (status, _) = app.get("/api/cameras?status=Paused").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/cameras?page_size=15").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("15"));
}

#[tokio::test]
async fn test_locations_follow_first_appearance() {
    let app = TestApp::loaded(6).await;

    let (status, body) = app.get("/api/cameras/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([locations::AUSTIN, locations::BOSTON, locations::DENVER])
    );
}

#[tokio::test]
async fn test_toggle_returns_updated_row() {
    let app = TestApp::loaded(3).await;
    app.mock.expect_status_update(1, "Inactive").await;

    let (status, body) = app.post("/api/cameras/1/toggle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Inactive");
    assert_eq!(body["data"]["current_status"], "Offline");
    assert_eq!(body["data"]["toggle_hint"], "Activate");
}

#[tokio::test]
async fn test_failed_toggle_surfaces_notification() {
    let app = TestApp::loaded(3).await;
    app.mock.mock_status_update_failure(500).await;

    let (status, _) = app.post("/api/cameras/2/toggle").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = app.get("/api/cameras").await;
    assert_eq!(body["data"]["rows"][1]["status"], "Inactive");

    let (status, body) = app.get("/api/notifications").await;
    assert_eq!(status, StatusCode::OK);
    let notes = body["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["message"], "Failed to update Camera 2 status");
    assert_eq!(notes[0]["camera_id"], 2);

    // Each notification is handed out once
    let (_, body) = app.get("/api/notifications").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_toggle_unknown_camera_is_not_found() {
    let app = TestApp::loaded(3).await;

    let (status, _) = app.post("/api/cameras/99/toggle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_busy_camera_rejects_second_toggle() {
    let app = TestApp::loaded(3).await;
    app.mock
        .mock_status_update_delayed(Duration::from_millis(400))
        .await;

    let store = app.state.store.clone();
    let first = tokio::spawn(async move { store.toggle_status(1).await });

    for _ in 0..40 {
        if app.state.store.is_updating(1).await {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let (status, body) = app.post("/api/cameras/1/toggle").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("busy"));

    let (_, body) = app.get("/api/cameras/status").await;
    assert_eq!(body["data"]["updating"], json!([1]));

    first.await.unwrap().unwrap();
    let (_, body) = app.get("/api/cameras/status").await;
    assert_eq!(body["data"]["updating"], json!([]));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let app = TestApp::loaded(3).await;

    let (status, body) = app.send(Method::DELETE, "/api/cameras/2", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("confirm=true"));

    let (status, body) = app
        .send(Method::DELETE, "/api/cameras/2?confirm=true", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"], true);

    let (_, body) = app.get("/api/cameras").await;
    assert_eq!(row_ids(&body["data"]), vec![1, 3]);

    let (status, body) = app
        .send(Method::DELETE, "/api/cameras/2?confirm=true", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"], false);
}

#[tokio::test]
async fn test_view_session_lifecycle() {
    let app = TestApp::loaded(25).await;

    let (status, body) = app.post("/api/views").await;
    assert_eq!(status, StatusCode::OK);
    let view_id = body["data"]["view_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["page"]["page"], 1);
    let uri = format!("/api/views/{}", view_id);

    let (status, body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(json!({
                "commands": [
                    { "action": "go_to_page", "page": 3 },
                    { "action": "go_to_page", "page": 4 }
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ignored_commands"], 1);
    assert_eq!(body["data"]["page"]["page"], 3);
    assert_eq!(row_ids(&body["data"]["page"]), vec![21, 22, 23, 24, 25]);

    let (_, body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(json!({
                "commands": [{ "action": "filter_status", "status": "Active" }]
            })),
        )
        .await;
    assert_eq!(body["data"]["page"]["page"], 1);
    assert_eq!(body["data"]["page"]["filtered_count"], 13);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"]["query"]["status"], "Active");

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reload_resets_open_views() {
    let app = TestApp::loaded(25).await;
    let (_, body) = app.post("/api/views").await;
    let uri = format!("/api/views/{}", body["data"]["view_id"].as_str().unwrap());

    app.send(
        Method::PATCH,
        &uri,
        Some(json!({ "commands": [{ "action": "next_page" }] })),
    )
    .await;

    app.state.store.load().await.unwrap();

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["data"]["page"]["page"], 1);
}
