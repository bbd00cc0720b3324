// Camera list, status toggle and delete endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use tracing::{error, info};

use super::common::{
    api_error, console_error, ready_snapshot, ApiResponse, ApiResult, CameraListQuery,
    DeleteQuery,
};
use crate::camera::CameraId;
use crate::store::{Availability, DeleteOutcome};
use crate::view::{render_page, CameraRow, ViewPage};
use crate::web::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct StoreStatusSummary {
    pub availability: Availability,
    pub total_cameras: usize,
    pub updating: Vec<CameraId>,
    pub revision: u64,
    pub last_error: Option<String>,
    pub pending_notifications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReloadSummary {
    pub loaded: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSummary {
    pub camera_id: CameraId,
    pub removed: bool,
}

/// Render one page of the table from query parameters alone
pub async fn list_cameras(
    Query(query): Query<CameraListQuery>,
    State(state): State<AppState>,
) -> ApiResult<ViewPage> {
    let view_query = query.view_query()?;
    let page_size = query.page_size(state.default_page_size)?;
    let snapshot = ready_snapshot(&state).await?;

    let page = render_page(&snapshot, &view_query, query.page.unwrap_or(1), page_size);
    Ok(Json(ApiResponse::success(page)))
}

/// Location choices for the filter dropdown
pub async fn list_locations(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let snapshot = ready_snapshot(&state).await?;
    Ok(Json(ApiResponse::success(snapshot.locations.to_vec())))
}

pub async fn get_store_status(State(state): State<AppState>) -> ApiResult<StoreStatusSummary> {
    let snapshot = state.store.snapshot().await;
    let mut updating: Vec<CameraId> = snapshot.updating.iter().copied().collect();
    updating.sort_unstable();

    Ok(Json(ApiResponse::success(StoreStatusSummary {
        availability: state.store.availability().await,
        total_cameras: snapshot.cameras.len(),
        updating,
        revision: snapshot.revision,
        last_error: state.store.last_error().await,
        pending_notifications: state.store.notifications().pending_count().await,
    })))
}

/// Explicit retry after a failed load
pub async fn reload_cameras(State(state): State<AppState>) -> ApiResult<ReloadSummary> {
    info!("Manual reload requested");
    match state.store.load().await {
        Ok(loaded) => Ok(Json(ApiResponse::success(ReloadSummary { loaded }))),
        Err(e) => {
            error!("Manual reload failed: {}", e);
            Err(console_error(e.into()))
        }
    }
}

pub async fn toggle_camera_status(
    Path(camera_id): Path<CameraId>,
    State(state): State<AppState>,
) -> ApiResult<CameraRow> {
    ready_snapshot(&state).await?;

    match state.store.toggle_status(camera_id).await {
        Ok(camera) => Ok(Json(ApiResponse::success(CameraRow::from_camera(
            &camera, false,
        )))),
        Err(e) => Err(console_error(e.into())),
    }
}

/// Local-only removal; `?confirm=true` is the yes/no answer
pub async fn delete_camera(
    Path(camera_id): Path<CameraId>,
    Query(query): Query<DeleteQuery>,
    State(state): State<AppState>,
) -> ApiResult<DeleteSummary> {
    ready_snapshot(&state).await?;

    let confirmed = query.confirm;
    match state
        .store
        .delete_camera(camera_id, &|_prompt: &str| confirmed)
        .await
    {
        DeleteOutcome::Removed(_) => Ok(Json(ApiResponse::success(DeleteSummary {
            camera_id,
            removed: true,
        }))),
        DeleteOutcome::NotFound => Ok(Json(ApiResponse::success(DeleteSummary {
            camera_id,
            removed: false,
        }))),
        DeleteOutcome::Declined => Err(api_error(
            StatusCode::BAD_REQUEST,
            format!(
                "Deleting camera {} requires confirmation (add ?confirm=true)",
                camera_id
            ),
        )),
    }
}
