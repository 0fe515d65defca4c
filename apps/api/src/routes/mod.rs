pub mod health;

use axum::{routing::get, Router};

use crate::matching::handlers::handle_recommendations;
use crate::profile::handlers::{handle_get_profile, handle_save_profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/profile",
            get(handle_get_profile).post(handle_save_profile),
        )
        .route("/api/v1/recommendations", get(handle_recommendations))
        .with_state(state)
}
