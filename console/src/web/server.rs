// File: console/src/web/server.rs
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // === CAMERA TABLE ROUTES ===
        .route("/api/cameras", get(handlers::list_cameras))
        .route("/api/cameras/locations", get(handlers::list_locations))
        .route("/api/cameras/status", get(handlers::get_store_status))
        .route("/api/cameras/reload", post(handlers::reload_cameras))
        .route(
            "/api/cameras/{camera_id}/toggle",
            post(handlers::toggle_camera_status),
        )
        .route(
            "/api/cameras/{camera_id}",
            axum::routing::delete(handlers::delete_camera),
        )
        // === TABLE VIEW SESSION ROUTES ===
        .route("/api/views", post(handlers::create_view))
        .route(
            "/api/views/{view_id}",
            get(handlers::get_view)
                .patch(handlers::update_view)
                .delete(handlers::close_view),
        )
        // === NOTIFICATIONS ===
        .route(
            "/api/notifications",
            get(handlers::drain_notifications),
        )
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
