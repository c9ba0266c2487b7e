use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/chat", post(handlers::chat_handler))
        .route(
            "/api/upload_image/{sample_id}",
            post(handlers::upload_image_handler).layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        .route(
            "/api/sample_image/{sample_id}",
            get(handlers::sample_image_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
