//! Common camera test data

use camera_console::camera::{Camera, CameraHealth, CameraId, CameraStatus, Connectivity, HealthGrade};
use camera_console::store::StoreSnapshot;
use camera_console::store::distinct_locations;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::Fake;
use serde_json::{json, Value};
use std::sync::Arc;

pub const API_TOKEN: &str = "test-token";

/// Common test locations
pub mod locations {
    pub const DENVER: &str = "Denver, CO";
    pub const AUSTIN: &str = "Austin, TX";
    pub const BOSTON: &str = "Boston, MA";

    pub const ALL: [&str; 3] = [DENVER, AUSTIN, BOSTON];
}

/// Directory payload for one camera
pub fn camera_json(id: CameraId, name: &str, location: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "location": location,
        "recorder": format!("NVR-{}", id % 4),
        "tasks": (id % 3),
        "status": status,
        "current_status": if status == "Active" { "Online" } else { "Offline" },
        "health": { "cloud": "A", "device": "B" },
        "hasWarning": id % 5 == 0
    })
}

pub fn camera(id: CameraId, status: CameraStatus, location: &str) -> Camera {
    Camera {
        id,
        name: format!("camera-{}", id),
        location: location.to_string(),
        recorder: None,
        tasks: None,
        status,
        current_status: Some(status.mirrored_connectivity()),
        health: CameraHealth {
            cloud: HealthGrade::A,
            device: HealthGrade::C,
        },
        has_warning: false,
    }
}

/// `count` cameras with sequential ids starting at 1
pub fn sequential_cameras(count: u64) -> Vec<Camera> {
    (1..=count)
        .map(|id| camera(id, CameraStatus::Active, locations::DENVER))
        .collect()
}

/// Randomised cameras drawn from the fixed location set
pub fn random_cameras(count: u64) -> Vec<Camera> {
    (1..=count)
        .map(|id| {
            let location = locations::ALL[(0..locations::ALL.len()).fake::<usize>()];
            let status = if (0..2u8).fake::<u8>() == 0 {
                CameraStatus::Active
            } else {
                CameraStatus::Inactive
            };
            let recorder: Option<String> = if (0..3u8).fake::<u8>() == 0 {
                None
            } else {
                Some(CompanyName().fake())
            };
            Camera {
                id,
                name: format!("{} {}", CityName().fake::<String>(), id),
                location: location.to_string(),
                recorder,
                tasks: None,
                status,
                current_status: Some(Connectivity::Online),
                health: CameraHealth::default(),
                has_warning: false,
            }
        })
        .collect()
}

pub fn snapshot_of(cameras: Vec<Camera>, revision: u64) -> StoreSnapshot {
    StoreSnapshot {
        locations: Arc::new(distinct_locations(&cameras)),
        cameras: Arc::new(cameras),
        updating: Default::default(),
        revision,
    }
}
