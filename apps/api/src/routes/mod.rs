pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::quiz::handlers as quiz;
use crate::state::ServerState;
use crate::store::handlers as store;

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // App state
        .route("/api/v1/state", get(store::handle_get_state))
        .route("/api/v1/state/reset", post(store::handle_reset))
        .route("/api/v1/profile", post(store::handle_update_profile))
        // Navigation
        .route("/api/v1/navigation", post(store::handle_navigate))
        .route("/api/v1/navigation/back", post(store::handle_history_back))
        .route(
            "/api/v1/navigation/forward",
            post(store::handle_history_forward),
        )
        // Sign-in mock
        .route("/api/v1/auth/email", post(auth::handle_email_sign_in))
        .route("/api/v1/auth/provider", post(auth::handle_provider_sign_in))
        // Quiz
        .route("/api/v1/quiz", get(quiz::handle_get_run))
        .route("/api/v1/quiz/questions", get(quiz::handle_questions))
        .route("/api/v1/quiz/start", post(quiz::handle_start))
        .route("/api/v1/quiz/answer", post(quiz::handle_answer))
        .route("/api/v1/quiz/back", post(quiz::handle_back))
        .route("/api/v1/quiz/retake", post(quiz::handle_retake))
        .route("/api/v1/dashboard", get(quiz::handle_dashboard))
        .with_state(state)
}
