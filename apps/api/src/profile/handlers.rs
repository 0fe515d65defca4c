//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::profile::models::{StoredProfile, UserProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<StoredProfile>,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub profile: StoredProfile,
}

/// GET /api/v1/profile
///
/// `profile` is `null` until the user has saved one.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.profiles.get(user.user_id).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/v1/profile
///
/// Replaces the caller's profile. Skills, interests and education level are required.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let profile = UserProfile::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;

    let stored = StoredProfile {
        profile,
        user_id: user.user_id,
        updated_at: Utc::now(),
    };
    state.profiles.put(&stored).await?;
    info!("Saved profile for user {}", user.user_id);

    Ok(Json(SaveProfileResponse {
        success: true,
        profile: stored,
    }))
}
