//! Transient user-visible notifications
//!
//! Failures that must not block the table (a rejected status update, a reload
//! that failed while older data is still shown) end up here. The presentation
//! layer drains the queue and shows each notification once.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::camera::CameraId;
use crate::constants::notifications::MAX_PENDING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub camera_id: Option<CameraId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct NotificationCenter {
    pending: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(
        &self,
        level: NotificationLevel,
        message: impl Into<String>,
        camera_id: Option<CameraId>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            camera_id,
            created_at: Utc::now(),
        };

        let mut pending = self.pending.lock().await;
        if pending.len() >= MAX_PENDING {
            if let Some(dropped) = pending.pop_front() {
                warn!("Notification queue full, dropping: {}", dropped.message);
            }
        }
        pending.push_back(notification.clone());
        notification
    }

    /// Take every pending notification, oldest first
    pub async fn drain(&self) -> Vec<Notification> {
        self.pending.lock().await.drain(..).collect()
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
