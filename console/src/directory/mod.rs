//! Camera Directory Service access
//!
//! The directory is the remote source of truth for the camera list. The
//! console only ever needs two calls from it:
//!
//! ```text
//! Console → GET  /fetch/cameras         → { "data": [Camera, ...] }
//! Console → POST /update/camera/status  → acknowledgement
//! ```
//!
//! Both are fire-and-wait: no retries, no backoff, and no timeout unless one
//! is configured.

pub mod client;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraId, CameraStatus};
use crate::errors::DirectoryError;

pub use client::HttpCameraDirectory;

/// Acknowledgement for a status update. Fields are echoes and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusAck {
    #[serde(default)]
    pub id: Option<CameraId>,
    #[serde(default)]
    pub status: Option<CameraStatus>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Source of camera records and sink for status changes
pub trait CameraDirectory: Send + Sync {
    /// Fetch the full camera list
    fn list(&self) -> impl Future<Output = Result<Vec<Camera>, DirectoryError>> + Send;

    /// Ask the directory to set a camera's status
    fn set_status(
        &self,
        id: CameraId,
        status: CameraStatus,
    ) -> impl Future<Output = Result<StatusAck, DirectoryError>> + Send;
}
