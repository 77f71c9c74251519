//! Login route handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
}

/// POST /api/login - Exchange a password for a token.
///
/// The token is the password itself; no session is created.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !state.credentials.contains(&req.password) {
        warn!("Login rejected");
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    info!("Login accepted");
    Ok(Json(LoginResponse {
        status: "success".to_string(),
        token: req.password,
    }))
}
