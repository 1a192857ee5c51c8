pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dialogue;
use crate::matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Compatibility engine
        .route(
            "/api/v1/match/analyze",
            post(matching::handlers::handle_analyze),
        )
        // Dialogue engine
        .route(
            "/api/v1/interview/respond",
            post(dialogue::handlers::handle_respond),
        )
        .with_state(state)
}
