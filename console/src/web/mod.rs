// File: console/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::store::RecordStore;
use crate::view::{PageSize, ViewRegistry};

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<RecordStore>,
    pub views: ViewRegistry,
    pub default_page_size: PageSize,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        store: Arc<RecordStore>,
        views: ViewRegistry,
        default_page_size: PageSize,
    ) -> Self {
        Self {
            config,
            store,
            views,
            default_page_size,
        }
    }
}
