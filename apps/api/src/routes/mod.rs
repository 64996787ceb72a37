pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/process", post(handlers::handle_process))
        .route("/analyze", post(handlers::handle_analyze))
        // Uploads are not size-limited; drop axum's default 2 MB body cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
