// File: console/src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

use crate::constants::{cleanup, view};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_token: String,
    // No timeout unless configured
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: i64,
}

fn default_page_size() -> usize {
    view::DEFAULT_PAGE_SIZE
}

fn default_session_idle_minutes() -> i64 {
    cleanup::DEFAULT_SESSION_IDLE_MINUTES
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}
