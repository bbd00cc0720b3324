// Stateful table view endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{api_error, ready_snapshot, ApiResponse, ApiResult};
use crate::view::{ViewCommand, ViewPage};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewUpdateRequest {
    pub commands: Vec<ViewCommand>,
}

#[derive(Debug, Serialize)]
pub struct ViewSnapshot {
    pub view_id: Uuid,
    pub ignored_commands: usize,
    pub page: ViewPage,
}

fn unknown_view(view_id: Uuid) -> (StatusCode, Json<ApiResponse<()>>) {
    api_error(
        StatusCode::NOT_FOUND,
        format!("Table view {} not found", view_id),
    )
}

pub async fn create_view(State(state): State<AppState>) -> ApiResult<ViewSnapshot> {
    let snapshot = ready_snapshot(&state).await?;
    let view_id = state.views.create().await;
    let page = state
        .views
        .render(view_id, &snapshot)
        .await
        .ok_or_else(|| unknown_view(view_id))?;

    Ok(Json(ApiResponse::success(ViewSnapshot {
        view_id,
        ignored_commands: 0,
        page,
    })))
}

pub async fn get_view(
    Path(view_id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<ViewSnapshot> {
    let snapshot = ready_snapshot(&state).await?;
    let page = state
        .views
        .render(view_id, &snapshot)
        .await
        .ok_or_else(|| unknown_view(view_id))?;

    Ok(Json(ApiResponse::success(ViewSnapshot {
        view_id,
        ignored_commands: 0,
        page,
    })))
}

pub async fn update_view(
    Path(view_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<ViewUpdateRequest>,
) -> ApiResult<ViewSnapshot> {
    let snapshot = ready_snapshot(&state).await?;
    let applied = state
        .views
        .apply(view_id, request.commands, &snapshot)
        .await
        .ok_or_else(|| unknown_view(view_id))?;

    Ok(Json(ApiResponse::success(ViewSnapshot {
        view_id,
        ignored_commands: applied.ignored,
        page: applied.page,
    })))
}

pub async fn close_view(
    Path(view_id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<bool> {
    if state.views.remove(view_id).await {
        Ok(Json(ApiResponse::success(true)))
    } else {
        Err(unknown_view(view_id))
    }
}
