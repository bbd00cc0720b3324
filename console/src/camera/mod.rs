pub mod types;

pub use types::{Camera, CameraHealth, CameraId, CameraStatus, Connectivity, HealthGrade};
