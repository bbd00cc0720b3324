//! Custom error types for the camera console
//!
//! Provides structured error handling with context for different failure scenarios.

use std::fmt;

use crate::camera::CameraId;

/// Main error type for the camera console
#[derive(Debug)]
pub enum ConsoleError {
    /// Configuration-related errors
    Config(ConfigError),

    /// Communication errors with the Camera Directory Service
    Directory(DirectoryError),

    /// Record store errors (load and mutation failures)
    Store(StoreError),

    /// Other errors with context
    Other(String),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

/// Camera Directory Service error variants
#[derive(Debug)]
pub enum DirectoryError {
    /// Request never produced a response
    ConnectionFailed { url: String, reason: String },

    /// Service answered with a non-success status
    ServiceError { url: String, status: u16, body: String },

    /// Response body could not be decoded
    InvalidResponse { url: String, reason: String },
}

/// Record store error variants
#[derive(Debug)]
pub enum StoreError {
    /// Populating the store from the directory failed
    LoadFailed { reason: String },

    /// A status update was rejected or never acknowledged
    MutationFailed { camera_id: CameraId, reason: String },

    /// No camera with this id is in the store
    CameraNotFound { camera_id: CameraId },

    /// A status update for this camera is still outstanding
    UpdateInFlight { camera_id: CameraId },
}

impl StoreError {
    /// True for failures that should block rendering of the table
    pub fn is_load_failure(&self) -> bool {
        matches!(self, StoreError::LoadFailed { .. })
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Config(e) => write!(f, "Configuration error: {}", e),
            ConsoleError::Directory(e) => write!(f, "Directory error: {}", e),
            ConsoleError::Store(e) => write!(f, "Store error: {}", e),
            ConsoleError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::ConnectionFailed { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            DirectoryError::ServiceError { url, status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP error! status: {} ({})", status, url)
                } else {
                    write!(f, "HTTP error! status: {} ({}): {}", status, url, body)
                }
            }
            DirectoryError::InvalidResponse { url, reason } => {
                write!(f, "Invalid response from {}: {}", url, reason)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LoadFailed { reason } => {
                write!(f, "Failed to load cameras: {}", reason)
            }
            StoreError::MutationFailed { camera_id, reason } => {
                write!(
                    f,
                    "Failed to update status of camera {}: {}",
                    camera_id, reason
                )
            }
            StoreError::CameraNotFound { camera_id } => {
                write!(f, "Camera {} not found", camera_id)
            }
            StoreError::UpdateInFlight { camera_id } => {
                write!(
                    f,
                    "Camera {} is busy with a status update. Wait for it to finish.",
                    camera_id
                )
            }
        }
    }
}

impl std::error::Error for ConsoleError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for DirectoryError {}
impl std::error::Error for StoreError {}

impl From<anyhow::Error> for ConsoleError {
    fn from(err: anyhow::Error) -> Self {
        ConsoleError::Other(err.to_string())
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::Config(err)
    }
}

impl From<DirectoryError> for ConsoleError {
    fn from(err: DirectoryError) -> Self {
        ConsoleError::Directory(err)
    }
}

impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        ConsoleError::Store(err)
    }
}
