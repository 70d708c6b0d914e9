pub mod analysis;
pub mod health;
pub mod profile;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze/skill-distribution",
            get(analysis::handle_skill_distribution),
        )
        .route(
            "/api/analyze/skill-compensation",
            get(analysis::handle_skill_compensation),
        )
        .route("/api/profile/health", get(profile::handle_profile_health))
        .route("/api/profile/:username", get(profile::handle_get_profile))
        .route("/api/search/people", post(search::handle_search_people))
        .with_state(state)
}
