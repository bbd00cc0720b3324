pub mod camera;
pub mod config;
pub mod constants;
pub mod directory;
pub mod errors;
pub mod notifications;
pub mod store;
pub mod view;
pub mod web;

// Re-export commonly used types
pub use camera::{Camera, CameraId, CameraStatus};
pub use config::{Config, ConfigManager};
pub use directory::{CameraDirectory, HttpCameraDirectory};
pub use notifications::NotificationCenter;
pub use store::RecordStore;
pub use view::{TableView, ViewRegistry};
