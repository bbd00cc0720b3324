pub mod cameras;
pub mod common;
pub mod notifications;
pub mod views;

pub use cameras::{
    delete_camera, get_store_status, list_cameras, list_locations, reload_cameras,
    toggle_camera_status,
};
pub use notifications::drain_notifications;
pub use views::{close_view, create_view, get_view, update_view};
