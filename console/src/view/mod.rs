//! View pipeline for the camera table
//!
//! ```text
//! StoreSnapshot ─┐
//!                ├─> search ─> status ─> location ─> page slice ─> ViewPage
//! TableView ─────┘
//! ```
//!
//! `pipeline` holds the pure derivation, `table` the per-view input state and
//! `registry` the open views.

pub mod pipeline;
pub mod registry;
pub mod table;

pub use pipeline::{
    filter_cameras, page_bounds, render_page, total_pages, CameraRow, LocationFilter, PageSize,
    StatusFilter, ViewPage, ViewQuery,
};
pub use registry::{AppliedCommands, ViewRegistry};
pub use table::{TableView, ViewCommand};
