//! Application-wide constants for endpoints, view limits, and housekeeping intervals
//!
//! Organized by category so the directory client, the view pipeline and the
//! web layer read the same values.

/// Camera Directory Service endpoints and defaults
pub mod directory {
    /// Full camera list (GET)
    pub const LIST_CAMERAS_PATH: &str = "/fetch/cameras";

    /// Status update (POST, JSON body `{ id, status }`)
    pub const UPDATE_STATUS_PATH: &str = "/update/camera/status";

    /// Environment variable overriding `directory.base_url`
    pub const BASE_URL_ENV: &str = "CAMERA_DIRECTORY_URL";

    /// Environment variable overriding `directory.api_token`
    pub const API_TOKEN_ENV: &str = "CAMERA_DIRECTORY_TOKEN";
}

/// Table view limits
pub mod view {
    /// Page sizes the pager offers
    pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

    /// Page size used when nothing else is configured
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Placeholder for absent descriptive fields
    pub const MISSING_FIELD: &str = "N/A";

    /// Filter value meaning "no filter"
    pub const ALL: &str = "all";
}

/// Notification queue limits
pub mod notifications {
    /// Oldest notifications are dropped beyond this many
    pub const MAX_PENDING: usize = 50;
}

/// Cleanup and housekeeping constants
pub mod cleanup {
    /// Minutes after which an untouched view session is discarded
    pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;

    /// Upper bound for the idle limit (one week)
    pub const MAX_SESSION_IDLE_MINUTES: i64 = 7 * 24 * 60;

    /// Cleanup interval in seconds
    pub const CLEANUP_INTERVAL_SECONDS: u64 = 300;
}
