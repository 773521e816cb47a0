use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ProfileUpdate;
use crate::state::{AdvisorStore, ServerState};
use crate::store::{AppState, NavigationPort, Page};

#[derive(Deserialize)]
pub struct ProfileRequest {
    #[serde(flatten)]
    pub profile: ProfileUpdate,
    /// Page to show once the profile is saved.
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub page: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub page: Page,
    pub path: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub history_length: usize,
}

impl NavigationResponse {
    fn of(store: &AdvisorStore) -> Self {
        Self {
            page: store.state().current_page,
            path: store.navigation().current_path(),
            can_go_back: store.navigation().can_go_back(),
            can_go_forward: store.navigation().can_go_forward(),
            history_length: store.navigation().entries().len(),
        }
    }
}

/// GET /api/v1/state
pub async fn handle_get_state(
    State(state): State<ServerState>,
) -> Result<Json<AppState>, AppError> {
    let session = state.session()?;
    Ok(Json(session.store.state().clone()))
}

/// POST /api/v1/state/reset
pub async fn handle_reset(State(state): State<ServerState>) -> Result<Json<AppState>, AppError> {
    let mut session = state.session()?;
    session.quiz = None;
    session.store.reset_state();
    Ok(Json(session.store.state().clone()))
}

/// POST /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<ServerState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<AppState>, AppError> {
    let mut session = state.session()?;
    session.store.set_user_info(req.profile);
    if let Some(next) = req.next.as_deref() {
        session.store.navigate_to(next);
    }
    Ok(Json(session.store.state().clone()))
}

/// POST /api/v1/navigation
pub async fn handle_navigate(
    State(state): State<ServerState>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<NavigationResponse>, AppError> {
    let mut session = state.session()?;
    session.store.navigate_to(&req.page);
    Ok(Json(NavigationResponse::of(&session.store)))
}

/// POST /api/v1/navigation/back
pub async fn handle_history_back(
    State(state): State<ServerState>,
) -> Result<Json<NavigationResponse>, AppError> {
    let mut session = state.session()?;
    let landed = session.store.navigation_mut().back();
    if let Some(entry) = landed {
        session.store.apply_pop_event(entry);
    }
    Ok(Json(NavigationResponse::of(&session.store)))
}

/// POST /api/v1/navigation/forward
pub async fn handle_history_forward(
    State(state): State<ServerState>,
) -> Result<Json<NavigationResponse>, AppError> {
    let mut session = state.session()?;
    let landed = session.store.navigation_mut().forward();
    if let Some(entry) = landed {
        session.store.apply_pop_event(entry);
    }
    Ok(Json(NavigationResponse::of(&session.store)))
}
