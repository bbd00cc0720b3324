//! In-memory record store for camera records
//!
//! The store owns the authoritative camera list and is the only place it is
//! mutated. There are exactly three mutations:
//!
//! - **replace** on a successful `load()`
//! - **patch one** on an acknowledged `toggle_status()`
//! - **remove one** on a confirmed `delete_camera()`
//!
//! Status changes are confirm-then-mutate: the record is only patched after the
//! directory acknowledges the update. While a call is outstanding the id sits
//! in the update-in-flight set so the presentation layer can show it as busy.
//! The lock is never held across a directory call.
//!
//! # Usage
//!
//! ```ignore
//! let store = RecordStore::new(directory, notifications.clone());
//! store.load().await?;
//! let camera = store.toggle_status(42).await?;
//! store.delete_camera(42, &|_prompt: &str| true).await;
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::camera::{Camera, CameraId};
use crate::directory::{CameraDirectory, HttpCameraDirectory};
use crate::errors::StoreError;
use crate::notifications::{NotificationCenter, NotificationLevel};

/// Yes/no gate in front of destructive actions
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Removed(Camera),
    Declined,
    NotFound,
}

/// Whether the table can be rendered at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Availability {
    Loading,
    Unavailable { error: String },
    Ready,
}

/// Point-in-time copy of the store handed to the view pipeline
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub cameras: Arc<Vec<Camera>>,
    pub locations: Arc<Vec<String>>,
    pub updating: HashSet<CameraId>,
    /// Bumped on every change to the record list
    pub revision: u64,
}

#[derive(Default)]
struct StoreState {
    cameras: Arc<Vec<Camera>>,
    locations: Arc<Vec<String>>,
    updating: HashSet<CameraId>,
    revision: u64,
    loads_in_flight: usize,
    loaded_once: bool,
    last_error: Option<String>,
}

pub struct RecordStore<D = HttpCameraDirectory> {
    directory: D,
    state: RwLock<StoreState>,
    notifications: NotificationCenter,
}

impl<D: CameraDirectory> RecordStore<D> {
    pub fn new(directory: D, notifications: NotificationCenter) -> Self {
        Self {
            directory,
            state: RwLock::new(StoreState::default()),
            notifications,
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Replace the store contents with the directory's full list
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<usize, StoreError> {
        self.state.write().await.loads_in_flight += 1;

        let result = self.directory.list().await;

        let mut guard = self.state.write().await;
        let state = &mut *guard;
        state.loads_in_flight = state.loads_in_flight.saturating_sub(1);

        match result {
            Ok(cameras) => {
                let cameras = dedupe_by_id(cameras);
                let count = cameras.len();
                state.locations = Arc::new(distinct_locations(&cameras));
                state.cameras = Arc::new(cameras);
                state.revision += 1;
                state.loaded_once = true;
                state.last_error = None;
                info!(
                    "Loaded {} cameras across {} locations",
                    count,
                    state.locations.len()
                );
                Ok(count)
            }
            Err(e) => {
                let reason = e.to_string();
                error!("Failed to load cameras: {}", reason);
                state.last_error = Some(reason.clone());
                let keeps_previous = state.loaded_once;
                drop(guard);

                if keeps_previous {
                    self.notifications
                        .push(
                            NotificationLevel::Warning,
                            format!("Failed to refresh cameras: {}", reason),
                            None,
                        )
                        .await;
                }
                Err(StoreError::LoadFailed { reason })
            }
        }
    }

    /// Flip a camera between Active and Inactive once the directory agrees.
    /// A second toggle while one is outstanding is refused.
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: CameraId) -> Result<Camera, StoreError> {
        let (name, new_status) = {
            let mut state = self.state.write().await;
            let (name, new_status) = match state.cameras.iter().find(|c| c.id == id) {
                Some(camera) => (camera.name.clone(), camera.status.toggled()),
                None => return Err(StoreError::CameraNotFound { camera_id: id }),
            };
            if !state.updating.insert(id) {
                warn!("Camera {} already has a status update in flight", id);
                return Err(StoreError::UpdateInFlight { camera_id: id });
            }
            (name, new_status)
        };

        info!("Setting camera {} ({}) to {}", id, name, new_status);
        let result = self.directory.set_status(id, new_status).await;

        let mut guard = self.state.write().await;
        let state = &mut *guard;
        state.updating.remove(&id);

        match result {
            Ok(_) => {
                let cameras = Arc::make_mut(&mut state.cameras);
                match cameras.iter_mut().find(|c| c.id == id) {
                    Some(camera) => {
                        camera.apply_status(new_status);
                        let updated = camera.clone();
                        state.revision += 1;
                        Ok(updated)
                    }
                    None => {
                        warn!(
                            "Camera {} disappeared while its status update was in flight",
                            id
                        );
                        Err(StoreError::CameraNotFound { camera_id: id })
                    }
                }
            }
            Err(e) => {
                drop(guard);
                let reason = e.to_string();
                error!("Status update for camera {} failed: {}", id, reason);
                self.notifications
                    .push(
                        NotificationLevel::Error,
                        format!("Failed to update {} status", name),
                        Some(id),
                    )
                    .await;
                Err(StoreError::MutationFailed {
                    camera_id: id,
                    reason,
                })
            }
        }
    }

    /// Remove a camera locally after the gate confirms
    #[instrument(skip(self, gate))]
    pub async fn delete_camera<G>(&self, id: CameraId, gate: &G) -> DeleteOutcome
    where
        G: ConfirmationGate + ?Sized,
    {
        let name = match self.camera(id).await {
            Some(camera) => camera.name,
            None => return DeleteOutcome::NotFound,
        };

        let prompt = format!("Are you sure you want to delete camera '{}'?", name);
        if !gate.confirm(&prompt) {
            info!("Deletion of camera {} declined", id);
            return DeleteOutcome::Declined;
        }

        let mut guard = self.state.write().await;
        let state = &mut *guard;
        match state.cameras.iter().position(|c| c.id == id) {
            Some(index) => {
                let removed = Arc::make_mut(&mut state.cameras).remove(index);
                state.revision += 1;
                info!("Deleted camera {} ({})", id, removed.name);
                DeleteOutcome::Removed(removed)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            cameras: state.cameras.clone(),
            locations: state.locations.clone(),
            updating: state.updating.clone(),
            revision: state.revision,
        }
    }

    pub async fn availability(&self) -> Availability {
        let state = self.state.read().await;
        if state.loaded_once {
            Availability::Ready
        } else if state.loads_in_flight == 0 {
            match &state.last_error {
                Some(error) => Availability::Unavailable {
                    error: error.clone(),
                },
                None => Availability::Loading,
            }
        } else {
            Availability::Loading
        }
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn camera(&self, id: CameraId) -> Option<Camera> {
        let state = self.state.read().await;
        state.cameras.iter().find(|c| c.id == id).cloned()
    }

    pub async fn is_updating(&self, id: CameraId) -> bool {
        self.state.read().await.updating.contains(&id)
    }
}

fn dedupe_by_id(cameras: Vec<Camera>) -> Vec<Camera> {
    let mut seen = HashSet::with_capacity(cameras.len());
    cameras
        .into_iter()
        .filter(|camera| {
            let first = seen.insert(camera.id);
            if !first {
                warn!("Dropping duplicate camera id {} ({})", camera.id, camera.name);
            }
            first
        })
        .collect()
}

/// Unique locations in order of first appearance
pub fn distinct_locations(cameras: &[Camera]) -> Vec<String> {
    let mut seen = HashSet::new();
    cameras
        .iter()
        .filter(|camera| seen.insert(camera.location.as_str()))
        .map(|camera| camera.location.clone())
        .collect()
}
