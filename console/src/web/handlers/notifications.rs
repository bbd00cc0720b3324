// Notification endpoint

use axum::{extract::State, response::Json};

use super::common::{ApiResponse, ApiResult};
use crate::notifications::Notification;
use crate::web::AppState;

/// Hand pending notifications to the caller; each is returned once
pub async fn drain_notifications(State(state): State<AppState>) -> ApiResult<Vec<Notification>> {
    let notifications = state.store.notifications().drain().await;
    Ok(Json(ApiResponse::success(notifications)))
}
