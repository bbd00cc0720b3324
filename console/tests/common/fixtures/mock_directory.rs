//! Mock Camera Directory Service for testing
//!
//! Serves the two directory endpoints without a real backend.

use camera_console::config::DirectoryConfig;
use camera_console::directory::HttpCameraDirectory;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::API_TOKEN;

pub struct MockDirectoryServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockDirectoryServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    pub fn config(&self) -> DirectoryConfig {
        DirectoryConfig {
            base_url: self.base_url.clone(),
            api_token: API_TOKEN.to_string(),
            request_timeout_seconds: Some(5),
        }
    }

    pub fn directory(&self) -> HttpCameraDirectory {
        HttpCameraDirectory::new(&self.config()).expect("Failed to build directory client")
    }

    /// Camera list wrapped in `{ "data": [...] }`
    pub async fn mock_list_success(&self, cameras: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/fetch/cameras"))
            .and(header("authorization", format!("Bearer {}", API_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": cameras })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_without_data(&self) {
        Mock::given(method("GET"))
            .and(path("/fetch/cameras"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/fetch/cameras"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_list_malformed(&self) {
        Mock::given(method("GET"))
            .and(path("/fetch/cameras"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
            .mount(&self.server)
            .await;
    }

    /// Accept any status update and echo it back
    pub async fn mock_status_update_success(&self) {
        Mock::given(method("POST"))
            .and(path("/update/camera/status"))
            .and(header("authorization", format!("Bearer {}", API_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&self.server)
            .await;
    }

    /// Accept only this exact update body, answered once
    pub async fn expect_status_update(&self, id: u64, status: &str) {
        Mock::given(method("POST"))
            .and(path("/update/camera/status"))
            .and(body_json(json!({ "id": id, "status": status })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": id, "status": status })),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_status_update_delayed(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/update/camera/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_status_update_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/update/camera/status"))
            .respond_with(ResponseTemplate::new(status).set_body_string("update rejected"))
            .mount(&self.server)
            .await;
    }

    /// Drop every mounted mock
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
