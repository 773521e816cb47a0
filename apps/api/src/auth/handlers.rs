use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::{email_sign_in, provider_sign_in};
use crate::errors::AppError;
use crate::models::LoginMethod;
use crate::state::ServerState;
use crate::store::{AppState, Page};

#[derive(Deserialize)]
pub struct EmailSignInRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ProviderSignInRequest {
    pub provider: LoginMethod,
}

/// POST /api/v1/auth/email
pub async fn handle_email_sign_in(
    State(state): State<ServerState>,
    Json(req): Json<EmailSignInRequest>,
) -> Result<Json<AppState>, AppError> {
    let update = email_sign_in(&req.email)?;
    let mut session = state.session()?;
    session.store.set_user_info(update);
    session.store.set_current_page(Page::Profile);
    info!("signed in with email");
    Ok(Json(session.store.state().clone()))
}

/// POST /api/v1/auth/provider
/// Waits a fixed delay to mimic the provider round trip; there is no cancellation.
pub async fn handle_provider_sign_in(
    State(state): State<ServerState>,
    Json(req): Json<ProviderSignInRequest>,
) -> Result<Json<AppState>, AppError> {
    let update = provider_sign_in(req.provider)?;
    tokio::time::sleep(state.config.mock_latency).await;

    let mut session = state.session()?;
    session.store.set_user_info(update);
    session.store.set_current_page(Page::Profile);
    info!(provider = req.provider.label(), "signed in with provider");
    Ok(Json(session.store.state().clone()))
}
