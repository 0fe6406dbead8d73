pub mod health;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::auth::require_session;
use crate::job_postings::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/job-postings",
            post(handlers::handle_create_job_posting),
        )
        .layer(from_fn_with_state(state.clone(), require_session))
        .with_state(state)
}
