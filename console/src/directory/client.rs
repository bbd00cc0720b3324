use anyhow::Result;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::{CameraDirectory, StatusAck};
use crate::camera::{Camera, CameraId, CameraStatus};
use crate::config::DirectoryConfig;
use crate::constants::directory::{LIST_CAMERAS_PATH, UPDATE_STATUS_PATH};
use crate::errors::DirectoryError;

#[derive(Debug, Deserialize)]
struct CameraListResponse {
    #[serde(default)]
    data: Option<Vec<Camera>>,
}

/// reqwest-backed client for the Camera Directory Service
#[derive(Clone)]
pub struct HttpCameraDirectory {
    client: Client,
    base_url: String,
    api_token: String,
}

impl HttpCameraDirectory {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client for directory: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(url: &str, response: Response) -> Result<Response, DirectoryError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(DirectoryError::ServiceError {
            url: url.to_string(),
            status,
            body,
        })
    }
}

impl CameraDirectory for HttpCameraDirectory {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Camera>, DirectoryError> {
        let url = self.url(LIST_CAMERAS_PATH);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::ConnectionFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let response = Self::check_status(&url, response).await?;

        let body: CameraListResponse =
            response
                .json()
                .await
                .map_err(|e| DirectoryError::InvalidResponse {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

        let cameras = body.data.unwrap_or_default();
        info!("Fetched {} cameras from directory", cameras.len());
        Ok(cameras)
    }

    #[instrument(skip(self), fields(camera_id = id, status = %status))]
    async fn set_status(
        &self,
        id: CameraId,
        status: CameraStatus,
    ) -> Result<StatusAck, DirectoryError> {
        let url = self.url(UPDATE_STATUS_PATH);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "id": id, "status": status }))
            .send()
            .await
            .map_err(|e| DirectoryError::ConnectionFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let response = Self::check_status(&url, response).await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let ack = match serde_json::from_value::<StatusAck>(body.clone()) {
            Ok(ack) => ack,
            Err(e) => {
                debug!("Acknowledgement without echo fields ({}): {}", e, body);
                StatusAck::default()
            }
        };

        match (ack.id, ack.status) {
            (Some(echo_id), _) if echo_id != id => {
                warn!("Directory acknowledged camera {} while updating {}", echo_id, id)
            }
            (_, Some(echo_status)) if echo_status != status => {
                warn!("Directory echoed status {} while setting {}", echo_status, status)
            }
            _ => info!("Directory acknowledged camera {} -> {}", id, status),
        }

        Ok(ack)
    }
}
