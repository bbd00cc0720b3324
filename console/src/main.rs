// File: console/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use camera_console::config::ConfigManager;
use camera_console::constants::cleanup;
use camera_console::directory::HttpCameraDirectory;
use camera_console::notifications::NotificationCenter;
use camera_console::store::RecordStore;
use camera_console::view::{PageSize, ViewRegistry};
use camera_console::web::{start_web_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("camera_console=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Camera Console");

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let config = config_manager.get_current_config();

    let directory = HttpCameraDirectory::new(&config.directory)?;
    info!("Directory client ready for {}", directory.base_url());

    let notifications = NotificationCenter::new();
    let store = Arc::new(RecordStore::new(directory, notifications));

    // Populate once at startup; a failure leaves the table blocked until a manual reload
    match store.load().await {
        Ok(count) => info!("Initial load complete: {} cameras", count),
        Err(e) => {
            error!("Initial load failed: {}", e);
            warn!("Table is unavailable until POST /api/cameras/reload succeeds");
        }
    }

    let default_page_size = PageSize::try_from(config.view.default_page_size)
        .map_err(|e| anyhow::anyhow!(e))?;
    let views = ViewRegistry::new(default_page_size);

    // Periodic cleanup of idle table views
    let views_clone = views.clone();
    let idle_minutes = config.view.session_idle_minutes;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(
            cleanup::CLEANUP_INTERVAL_SECONDS,
        ));
        loop {
            interval.tick().await;
            let cleaned = views_clone.cleanup_idle(idle_minutes).await;
            if cleaned > 0 {
                info!(
                    "Cleaned up {} table views idle for more than {} minutes",
                    cleaned, idle_minutes
                );
            }
        }
    });

    let state = AppState::new(config, store, views, default_page_size);
    start_web_server(state).await?;

    info!("Camera Console stopped");
    Ok(())
}
