// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{ConsoleError, StoreError};
use crate::store::{Availability, StoreSnapshot};
use crate::view::{LocationFilter, PageSize, StatusFilter, ViewQuery};
use crate::web::AppState;

// Helper type for API responses
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::error(message.into())))
}

/// Map a console failure onto the HTTP status the client sees
pub fn console_error(err: ConsoleError) -> ApiError {
    let status = match &err {
        ConsoleError::Store(StoreError::CameraNotFound { .. }) => StatusCode::NOT_FOUND,
        ConsoleError::Store(StoreError::UpdateInFlight { .. }) => StatusCode::CONFLICT,
        ConsoleError::Store(_) | ConsoleError::Directory(_) => StatusCode::BAD_GATEWAY,
        ConsoleError::Config(_) | ConsoleError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    api_error(status, err.to_string())
}

// Query parameters
#[derive(Debug, Default, Deserialize)]
pub struct CameraListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl CameraListQuery {
    pub fn view_query(&self) -> Result<ViewQuery, ApiError> {
        let status = match self.status.as_deref() {
            Some(raw) => raw
                .parse::<StatusFilter>()
                .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?,
            None => StatusFilter::All,
        };

        Ok(ViewQuery {
            search: self.search.clone().unwrap_or_default(),
            status,
            location: self
                .location
                .clone()
                .map(LocationFilter::from)
                .unwrap_or_default(),
        })
    }

    pub fn page_size(&self, fallback: PageSize) -> Result<PageSize, ApiError> {
        match self.page_size {
            Some(size) => {
                PageSize::try_from(size).map_err(|e| api_error(StatusCode::BAD_REQUEST, e))
            }
            None => Ok(fallback),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Snapshot of the store, or 503 while the table cannot be rendered
pub async fn ready_snapshot(state: &AppState) -> Result<StoreSnapshot, ApiError> {
    match state.store.availability().await {
        Availability::Ready => Ok(state.store.snapshot().await),
        Availability::Loading => Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Loading cameras...",
        )),
        Availability::Unavailable { error } => Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            format!(
                "Error: {}. Retry with POST /api/cameras/reload",
                error
            ),
        )),
    }
}
